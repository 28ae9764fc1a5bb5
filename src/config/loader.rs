//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ProxyConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration for process startup.
///
/// Loads `FIPE_PROXY_CONFIG` if set, otherwise defaults, then applies the
/// `PORT` and `FIPE_API_URL` environment overrides.
pub fn load_from_env() -> Result<ProxyConfig, ConfigError> {
    let mut config = match std::env::var("FIPE_PROXY_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => ProxyConfig::default(),
    };

    if let Ok(port) = std::env::var("PORT") {
        if let Ok(port) = port.parse() {
            config.listener.port = port;
        } else {
            tracing::warn!(value = %port, "Ignoring unparseable PORT override");
        }
    }
    if let Ok(url) = std::env::var("FIPE_API_URL") {
        config.upstream.base_url = url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
