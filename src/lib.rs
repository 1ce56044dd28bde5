//! API Forwarding Gateway
//!
//! Relays browser-originated REST calls to a plain-HTTP backend under
//! `/api/v1/`, stripping hop-by-hop headers, answering CORS preflights
//! locally, and translating transport failures into a stable 502 envelope.
//!
//! # Data Flow
//! ```text
//! Client request
//!     → http/server.rs (Axum setup, timeout, request ID, in-flight cap)
//!     → proxy/request.rs (rebuild as ProxyRequest: path, query, headers, body)
//!     → proxy/upstream.rs (single outbound call, pooled client)
//!     → http/response.rs (narrow headers, add CORS, or 502 envelope)
//!     → Send to client
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::origin::BackendOrigin;
pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
