//! Request relay subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request parts + buffered body
//!     → headers.rs (drop hop-by-hop names, keep everything else)
//!     → request.rs (ProxyRequest → outbound Request toward the origin)
//!     → upstream.rs (one pooled outbound call, no retries)
//!     → errors surface as GatewayError, rendered by http/response.rs
//! ```

pub mod error;
pub mod headers;
pub mod request;
pub mod upstream;

pub use error::GatewayError;
pub use headers::{filter_headers, HOP_BY_HOP_HEADERS};
pub use request::ProxyRequest;
pub use upstream::Upstream;
