//! Response reconstruction.
//!
//! # Responsibilities
//! - Relay the backend's exact status and body
//! - Carry over Content-Type and Cache-Control only, with fixed defaults
//! - Add the unconditional CORS headers
//! - Render transport failures as the 502 envelope
//!
//! # Design Decisions
//! - Dropping every other backend header is deliberate narrowing: the
//!   backend's own CORS or cookie directives must not leak through.
//! - The 502 envelope also carries CORS headers so a browser caller can
//!   read the failure.

use axum::body::Body;
use axum::http::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{Response, StatusCode};
use hyper::body::Incoming;

use crate::config::origin::BackendOrigin;
use crate::http::cors;
use crate::proxy::error::{ErrorEnvelope, GatewayError};

fn default_content_type() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

fn default_cache_control() -> HeaderValue {
    HeaderValue::from_static("no-store")
}

/// Rebuild the caller-facing response from the backend's.
///
/// The full backend body is read into memory; a mid-body transport failure
/// is reported like any other (the caller renders the 502 envelope).
pub async fn relay(backend: Response<Incoming>) -> Result<Response<Body>, GatewayError> {
    let (parts, body) = backend.into_parts();

    let bytes = axum::body::to_bytes(Body::new(body), usize::MAX)
        .await
        .map_err(|e| GatewayError::BackendBody(e.to_string()))?;

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(default_content_type);
    let cache_control = parts
        .headers
        .get(CACHE_CONTROL)
        .cloned()
        .unwrap_or_else(default_cache_control);

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = parts.status;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, content_type);
    headers.insert(CACHE_CONTROL, cache_control);
    cors::apply_cors(headers);

    Ok(response)
}

/// Render a relay failure as the fixed 502 envelope.
pub fn bad_gateway(err: &GatewayError, origin: &BackendOrigin) -> Response<Body> {
    let envelope = ErrorEnvelope::new(err, origin.as_str());
    let body = serde_json::to_vec(&envelope).unwrap_or_default();

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::BAD_GATEWAY;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, default_content_type());
    cors::apply_cors(headers);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_gateway_envelope_shape() {
        let err = GatewayError::BackendBody("broken pipe".to_string());
        let origin = BackendOrigin::parse("http://localhost:8000").unwrap();

        let response = bad_gateway(&err, &origin);

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
