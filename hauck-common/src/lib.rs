//! Hauck Common - Shared configuration, errors, and logging for the calculator services.
//!
//! This crate provides:
//! - Configuration types and loading
//! - Configuration validation
//! - The shared service error type
//! - Logging setup and request tracing helpers

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{CalculatorConfig, Config, NetworkConfig, ObservabilityConfig, WebConfig};
pub use error::{Error, Result};
pub use validation::{Validate, ValidationError, ValidationResult};

