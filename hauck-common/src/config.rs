//! Configuration management for the calculator services.
//!
//! All services share a configuration file at `~/.hauck/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (HAUCK_* prefix)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `HAUCK_BIND_ADDRESS` → network.bind
//! - `HAUCK_WEB_PORT` → web.port
//! - `HAUCK_LOG_LEVEL` → observability.log_level
//! - `HAUCK_LOG_FORMAT` → observability.log_format
//! - `HAUCK_SIGNIFICANCE_LEVEL` → calculator.significance_level

use hauck_core::DEFAULT_ALPHA;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".hauck"),
        |dirs| dirs.home_dir().join(".hauck"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Network Configuration
// ============================================================================

/// Global network configuration.
///
/// Default bind address is `127.0.0.1` (local only).
/// Set to `0.0.0.0` to allow remote access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_bind_address")]
    pub bind: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

// ============================================================================
// Web Service Configuration
// ============================================================================

/// HTTP service configuration for the calculator form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Port number for the web service
    #[serde(default = "default_web_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            request_timeout_secs: default_request_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

fn default_web_port() -> u16 {
    4480
}
fn default_request_timeout_secs() -> u64 {
    10
}
fn default_body_limit_bytes() -> usize {
    16 * 1024
}

// ============================================================================
// Calculator Configuration
// ============================================================================

/// Defaults applied by the front ends before calling the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Significance level used for the verdict banner
    #[serde(default = "default_significance_level", alias = "alpha")]
    pub significance_level: f64,

    /// Number of comparisons assumed when the form leaves it blank
    #[serde(default = "default_comparisons")]
    pub default_comparisons: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            significance_level: default_significance_level(),
            default_comparisons: default_comparisons(),
        }
    }
}

fn default_significance_level() -> f64 {
    DEFAULT_ALPHA
}
fn default_comparisons() -> u32 {
    1
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,

    /// Additional module targets to hold at `warn`.
    #[serde(default)]
    pub excluded_targets: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            excluded_targets: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration shared by the web service and the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub calculator: CalculatorConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse are ignored and the existing value kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("HAUCK_BIND_ADDRESS") {
            self.network.bind = bind;
        }
        if let Some(port) = lookup("HAUCK_WEB_PORT") {
            match port.parse() {
                Ok(p) => self.web.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid HAUCK_WEB_PORT"),
            }
        }
        if let Some(level) = lookup("HAUCK_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("HAUCK_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Some(alpha) = lookup("HAUCK_SIGNIFICANCE_LEVEL") {
            match alpha.parse() {
                Ok(a) => self.calculator.significance_level = a,
                Err(_) => {
                    tracing::warn!(value = %alpha, "Ignoring invalid HAUCK_SIGNIFICANCE_LEVEL")
                }
            }
        }
    }

    /// Socket address string for the web service.
    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.network.bind, self.web.port)
    }
}
