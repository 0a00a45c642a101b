//! Domain error model.

use thiserror::Error;

/// Result type used across the engine.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures. The engine has no
/// IO, so every error here is caller-visible input rejection, never a crash.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A numeric input resolved to NaN or infinity.
    ///
    /// Malformed numbers are rejected up front rather than propagated through
    /// totals as NaN.
    #[error("non-finite value for {field}: {value}")]
    NonFiniteNumber { field: &'static str, value: f64 },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFiniteNumber { field, value }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
