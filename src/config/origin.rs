//! Backend origin resolution.
//!
//! # Responsibilities
//! - Resolve the backend origin exactly once, at process start
//! - Prefer the server-only value over the publicly-exposed one
//! - Fall back to a fixed local default when nothing is configured
//! - Reduce whatever was configured to scheme+host+port only
//!
//! # Design Decisions
//! - Resolution is a pure function over a lookup closure, so precedence is
//!   unit-testable without mutating process-global environment state.
//! - Any path component in the configured value is discarded; only the
//!   origin may ever appear in error envelopes.

use url::Url;

/// Server-only environment variable holding the backend origin.
pub const BACKEND_URL_VAR: &str = "BACKEND_API_URL";

/// Publicly-exposed analog, consulted only if the server-only one is unset.
pub const PUBLIC_BACKEND_URL_VAR: &str = "PUBLIC_BACKEND_API_URL";

/// Origin used when nothing is configured at all.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Error type for origin resolution.
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    #[error("invalid backend origin {raw:?}: {source}")]
    Invalid {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("backend origin {0:?} must use http or https")]
    UnsupportedScheme(String),
}

/// A validated backend origin: scheme + host + port, nothing else.
///
/// Immutable once resolved; shared read-only across all request tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOrigin {
    serialized: String,
}

impl BackendOrigin {
    /// Parse and normalize an origin, discarding any path/query/fragment.
    pub fn parse(raw: &str) -> Result<Self, OriginError> {
        let url = Url::parse(raw).map_err(|source| OriginError::Invalid {
            raw: raw.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(OriginError::UnsupportedScheme(raw.to_string()));
        }

        Ok(Self {
            serialized: url.origin().ascii_serialization(),
        })
    }

    /// Resolve the origin with explicit precedence:
    /// configured value > server-only env > public env > fixed default.
    ///
    /// Empty strings count as unset, matching how the source deployment
    /// treated blank environment variables.
    pub fn resolve<F>(configured: Option<&str>, lookup: F) -> Result<Self, OriginError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = configured.filter(|v| !v.is_empty()) {
            return Self::parse(raw);
        }
        for var in [BACKEND_URL_VAR, PUBLIC_BACKEND_URL_VAR] {
            if let Some(raw) = lookup(var).filter(|v| !v.is_empty()) {
                return Self::parse(&raw);
            }
        }
        Self::parse(DEFAULT_BACKEND_URL)
    }

    /// Resolve from the process environment. Called once at startup.
    pub fn resolve_from_env(configured: Option<&str>) -> Result<Self, OriginError> {
        Self::resolve(configured, |var| std::env::var(var).ok())
    }

    /// The origin as `scheme://host[:port]`, with no trailing slash.
    pub fn as_str(&self) -> &str {
        &self.serialized
    }
}

impl std::fmt::Display for BackendOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialized)
    }
}
