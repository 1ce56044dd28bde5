//! Lifecycle coordination: startup signals and graceful shutdown.

pub mod shutdown;

pub use shutdown::Shutdown;
