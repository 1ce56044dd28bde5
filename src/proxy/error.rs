//! Relay error types and the transport-failure wire envelope.

use serde::Serialize;

/// Fixed `error` field of the 502 envelope.
pub const BACKEND_CONNECTION_FAILED: &str = "Backend connection failed";

/// Errors on the relay path.
///
/// Every variant is reported to the caller the same way: a 502 with the
/// JSON envelope below. The gateway draws no distinction between
/// "unreachable", "timed out", and "reset"; the underlying message text is
/// exposed for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid outbound URI: {0}")]
    Uri(#[from] axum::http::uri::InvalidUri),

    #[error("failed to assemble outbound request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("{0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read backend response body: {0}")]
    BackendBody(String),
}

/// JSON body returned with status 502 when the backend call cannot complete.
///
/// `backend_url` names the resolved origin only, never the full path.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: &'static str,
    pub message: String,
    pub backend_url: &'a str,
}

impl<'a> ErrorEnvelope<'a> {
    pub fn new(err: &GatewayError, backend_url: &'a str) -> Self {
        Self {
            error: BACKEND_CONNECTION_FAILED,
            message: err.to_string(),
            backend_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_fixed_error_literal() {
        let err = GatewayError::BackendBody("connection reset".to_string());
        let envelope = ErrorEnvelope::new(&err, "http://localhost:8000");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["error"], "Backend connection failed");
        assert_eq!(json["backend_url"], "http://localhost:8000");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("connection reset"));
    }
}
