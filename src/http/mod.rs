//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout, request ID, in-flight cap)
//!     → OPTIONS? → cors.rs preflight, no backend call
//!     → otherwise proxy/* issues the backend call
//!     → response.rs (narrow headers, add CORS, or 502 envelope)
//!     → Send to client
//! ```

pub mod cors;
pub mod response;
pub mod server;

pub use server::GatewayServer;
