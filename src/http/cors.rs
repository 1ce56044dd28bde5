//! CORS policy for relayed responses and preflights.
//!
//! The policy is deliberately permissive and fixed: the gateway fronts a
//! single first-party backend, and the browser only needs enough CORS to
//! reach it. Preflights are answered locally and never reach the backend.

use axum::body::Body;
use axum::http::{header::HeaderValue, HeaderMap, Response, StatusCode};

/// `Access-Control-Allow-Origin` on every gateway response.
pub const ALLOW_ORIGIN: &str = "*";

/// `Access-Control-Allow-Methods` on relayed responses.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// `Access-Control-Allow-Methods` on preflight responses (PATCH included).
pub const PREFLIGHT_ALLOW_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// `Access-Control-Allow-Headers` on every gateway response.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// `Access-Control-Max-Age` on preflight responses, in seconds (one day).
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// Add the three unconditional CORS headers to a relayed (or error) response.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// Build the preflight response: 204, empty body, extended method list.
pub fn preflight_response() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;

    let headers = response.headers_mut();
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static(PREFLIGHT_ALLOW_METHODS),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        "access-control-max-age",
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );

    response
}
