//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    if config.limits.max_body_bytes == 0 {
        return Err(ConfigError::Invalid(
            "limits.max_body_bytes must be greater than zero".to_string(),
        ));
    }
    if config.listener.max_in_flight == 0 {
        return Err(ConfigError::Invalid(
            "listener.max_in_flight must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}
