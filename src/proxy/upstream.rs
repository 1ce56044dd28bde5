//! Outbound HTTP client toward the backend.
//!
//! # Responsibilities
//! - Hold the pooled client and the resolved origin for the process lifetime
//! - Issue exactly one outbound call per inbound request, no retries
//!
//! # Design Decisions
//! - Connection reuse is whatever the pooled client provides by default;
//!   no policy beyond standard keep-alive.

use axum::body::Body;
use hyper::body::Incoming;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::config::origin::BackendOrigin;
use crate::proxy::error::GatewayError;
use crate::proxy::request::ProxyRequest;

/// The backend side of the relay: pooled client plus resolved origin.
///
/// Constructed once at startup and shared read-only across request tasks.
pub struct Upstream {
    client: Client<HttpConnector, Body>,
    origin: BackendOrigin,
}

impl Upstream {
    /// Create a client for the given origin.
    pub fn new(origin: BackendOrigin) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, origin }
    }

    /// The resolved backend origin.
    pub fn origin(&self) -> &BackendOrigin {
        &self.origin
    }

    /// Send one relayed request. Transport failures of any kind surface as
    /// [`GatewayError`]; the caller renders them as the 502 envelope.
    pub async fn send(
        &self,
        request: ProxyRequest,
    ) -> Result<axum::http::Response<Incoming>, GatewayError> {
        let outbound = request.into_outbound(&self.origin)?;
        Ok(self.client.request(outbound).await?)
    }
}
