//! Outbound request adaptation.
//!
//! # Responsibilities
//! - Capture everything relevant from the inbound request exactly once
//! - Rebuild the equivalent outbound request against the backend origin
//!
//! # Design Decisions
//! - The query string is carried as the raw inbound text, which preserves
//!   key order, duplicate keys, and percent-encoding byte-for-byte.
//! - A zero-length body is treated as "no body": the outbound call must not
//!   grow a body-bearing content type for an empty payload.

use axum::body::{Body, Bytes};
use axum::http::{request::Parts, HeaderMap, Method, Request, Uri};

use crate::config::origin::BackendOrigin;
use crate::proxy::error::GatewayError;
use crate::proxy::headers::filter_headers;

/// Path prefix every relayed call is mounted under on the backend.
pub const API_PREFIX: &str = "/api/v1";

/// One inbound request, reduced to what the backend call needs.
///
/// Request-scoped: constructed from the inbound request, consumed exactly
/// once by [`ProxyRequest::into_outbound`].
#[derive(Debug)]
pub struct ProxyRequest {
    method: Method,
    path_and_query: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ProxyRequest {
    /// Build from inbound request parts and an already-buffered body.
    ///
    /// `body` must be `None` for GET/HEAD and for empty payloads; the
    /// handler enforces both before calling this.
    pub fn new(parts: &Parts, body: Option<Bytes>) -> Self {
        let suffix = parts.uri.path().trim_start_matches('/');
        let mut path_and_query = format!("{API_PREFIX}/{suffix}");
        if let Some(query) = parts.uri.query() {
            path_and_query.push('?');
            path_and_query.push_str(query);
        }

        Self {
            method: parts.method.clone(),
            path_and_query,
            headers: filter_headers(&parts.headers),
            body,
        }
    }

    /// The backend path and query this request will be sent to.
    pub fn path_and_query(&self) -> &str {
        &self.path_and_query
    }

    /// Consume into the outbound request toward the resolved origin.
    pub fn into_outbound(self, origin: &BackendOrigin) -> Result<Request<Body>, GatewayError> {
        let uri: Uri = format!("{}{}", origin.as_str(), self.path_and_query).parse()?;

        let mut builder = Request::builder().method(self.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }

        let body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };

        Ok(builder.body(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_for(uri: &str, method: Method) -> Parts {
        let (parts, _) = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();
        parts
    }

    fn origin() -> BackendOrigin {
        BackendOrigin::parse("http://backend:8000").unwrap()
    }

    #[test]
    fn path_suffix_is_mounted_under_api_prefix() {
        let parts = parts_for("/words/42/senses", Method::GET);
        let req = ProxyRequest::new(&parts, None);
        assert_eq!(req.path_and_query(), "/api/v1/words/42/senses");
    }

    #[test]
    fn empty_suffix_maps_to_bare_api_root() {
        let parts = parts_for("/", Method::GET);
        let req = ProxyRequest::new(&parts, None);
        assert_eq!(req.path_and_query(), "/api/v1/");
    }

    #[test]
    fn query_string_passes_through_verbatim() {
        let parts = parts_for("/search?b=2&a=1&a=3&q=%C3%A9", Method::GET);
        let req = ProxyRequest::new(&parts, None);
        assert_eq!(req.path_and_query(), "/api/v1/search?b=2&a=1&a=3&q=%C3%A9");
    }

    #[test]
    fn outbound_uri_targets_the_origin() {
        let parts = parts_for("/words?limit=10", Method::GET);
        let outbound = ProxyRequest::new(&parts, None)
            .into_outbound(&origin())
            .unwrap();
        assert_eq!(
            outbound.uri().to_string(),
            "http://backend:8000/api/v1/words?limit=10"
        );
        assert_eq!(outbound.method(), Method::GET);
    }

    #[test]
    fn filtered_headers_reach_the_outbound_request() {
        let (parts, _) = Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header("connection", "close")
            .header("x-trace", "abc")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let outbound = ProxyRequest::new(&parts, Some(Bytes::from_static(b"payload")))
            .into_outbound(&origin())
            .unwrap();

        assert!(!outbound.headers().contains_key("connection"));
        assert_eq!(outbound.headers().get("x-trace").unwrap(), "abc");
    }
}
