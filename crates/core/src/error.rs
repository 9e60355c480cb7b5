//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers construction and compatibility failures only. An overfilled load is
/// not an error: it is reported through the container's hazard notifier and the
/// load is rejected without touching state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A constructor or operation received a missing or out-of-range value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A container with this serial number is already held by the target storage.
    #[error("container with serial number {0} already exists")]
    DuplicateSerialNumber(String),

    /// No container carries the requested serial number.
    #[error("container with serial number {0} not found")]
    NotFound(String),

    /// Chilled container configured for a different cargo type.
    #[error("incompatible cargo type: expected {expected}, received {received}")]
    IncompatibleCargoType { expected: String, received: String },

    /// Cargo requires a temperature above the container's guaranteed maximum.
    #[error("incompatible temperature: required {required}, container keeps {maximum} or lower")]
    IncompatibleTemperature { required: f64, maximum: f64 },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate(serial_number: impl core::fmt::Display) -> Self {
        Self::DuplicateSerialNumber(serial_number.to_string())
    }

    pub fn not_found(serial_number: impl core::fmt::Display) -> Self {
        Self::NotFound(serial_number.to_string())
    }

    /// Require `value` to be finite and strictly positive.
    pub fn ensure_positive(name: &str, value: f64) -> DomainResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid_argument(format!(
                "{name} must be a positive number (received: {value})"
            )))
        }
    }
}
