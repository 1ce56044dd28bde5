//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, all sections defaulted)
//!     → origin.rs (resolve backend origin: file > env > fixed default)
//!     → GatewayConfig + BackendOrigin (immutable for process lifetime)
//!     → injected into GatewayServer at construction
//! ```
//!
//! # Design Decisions
//! - The backend origin is resolved exactly once, before any request is
//!   served; handlers only ever see the resolved value.
//! - All config fields have defaults so the gateway runs with no file at all.

pub mod loader;
pub mod origin;
pub mod schema;

pub use origin::BackendOrigin;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
