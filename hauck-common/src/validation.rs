//! Configuration validation.
//!
//! Checks that configured values are present and within valid ranges
//! before a service starts.

use hauck_core::MAX_SAMPLE_SIZE;
use thiserror::Error;

use crate::config::{CalculatorConfig, Config, NetworkConfig, ObservabilityConfig, WebConfig};
use crate::error::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["json", "pretty"];

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port {port} for {field}: must be between 1 and 65535")]
    InvalidPort { port: u16, field: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Validate for Config {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors: Vec<ValidationError> = [
            self.network.validate(),
            self.web.validate(),
            self.calculator.validate(),
            self.observability.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

impl Config {
    /// Load, apply environment overrides, and validate.
    pub fn load_and_validate() -> crate::Result<Self> {
        let config = Self::load_with_env()?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for NetworkConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.bind.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "network.bind".into(),
            });
        }
        Ok(())
    }
}

impl Validate for WebConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort {
                port: self.port,
                field: "web.port".into(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "web.request_timeout_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.body_limit_bytes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "web.body_limit_bytes".into(),
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> ValidationResult<()> {
        let alpha = self.significance_level;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ValidationError::InvalidValue {
                field: "calculator.significance_level".into(),
                reason: format!("{alpha} is not in the open interval (0, 1)"),
            });
        }
        if self.default_comparisons == 0 || self.default_comparisons > MAX_SAMPLE_SIZE {
            return Err(ValidationError::InvalidValue {
                field: "calculator.default_comparisons".into(),
                reason: format!("must be between 1 and {MAX_SAMPLE_SIZE}"),
            });
        }
        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }
        if !LOG_FORMATS.contains(&self.log_format.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("must be one of: {}", LOG_FORMATS.join(", ")),
            });
        }
        Ok(())
    }
}
