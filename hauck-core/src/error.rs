//! Calculator error types.

use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while validating inputs or computing the test.
///
/// Validation variants are raised before any arithmetic runs; the
/// arithmetic variants abort the single computation that hit them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{field} is out of range ({value}): {reason}")]
    InputOutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Division by zero: {field} must be at least 1")]
    DivisionByZero { field: String },

    #[error("Undefined result: {reason}")]
    UndefinedResult { reason: String },
}

impl CalcError {
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InputOutOfRange {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InputOutOfRange { .. } => "INPUT_OUT_OF_RANGE",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            Self::UndefinedResult { .. } => "UNDEFINED_RESULT",
        }
    }
}
