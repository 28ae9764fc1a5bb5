//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (TTL and window > 0)
//! - Check the upstream base URL is a well-formed absolute URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ProxyConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if url::Url::parse(&config.upstream.base_url).is_err() {
        errors.push(ValidationError {
            field: "upstream.base_url".to_string(),
            message: format!("not a valid absolute URL: {}", config.upstream.base_url),
        });
    }

    if config.cache.ttl_secs == 0 {
        errors.push(ValidationError {
            field: "cache.ttl_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.rate_limit.enabled && config.rate_limit.window_secs == 0 {
        errors.push(ValidationError {
            field: "rate_limit.window_secs".to_string(),
            message: "must be greater than zero when rate limiting is enabled".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
