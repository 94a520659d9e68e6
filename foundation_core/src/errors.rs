//! # Error Types
//!
//! Structured error types for foundation_core. Numeric input never fails
//! (it is parsed leniently and clamped), so these errors only cover the
//! non-numeric paths: parameter keys, view names, JSON and file access.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::errors::{FoundationError, FoundationResult};
//! use foundation_core::config::Parameter;
//!
//! fn lookup(key: &str) -> FoundationResult<Parameter> {
//!     key.parse()
//! }
//!
//! let err = lookup("height").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_PARAMETER");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for foundation_core operations
pub type FoundationResult<T> = Result<T, FoundationError>;

/// Structured error type for configuration and rendering operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FoundationError {
    /// A configuration key does not name one of the seven parameters
    #[error("Unknown parameter '{key}' (expected one of: {expected})")]
    UnknownParameter { key: String, expected: String },

    /// A view name is neither "plan" nor "section"
    #[error("Unknown view '{name}' (expected 'plan' or 'section')")]
    UnknownView { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    Io {
        operation: String,
        path: String,
        reason: String,
    },
}

impl FoundationError {
    /// Create an UnknownParameter error listing the accepted keys
    pub fn unknown_parameter(key: impl Into<String>) -> Self {
        let expected = crate::config::Parameter::ALL
            .iter()
            .map(|p| p.key())
            .collect::<Vec<_>>()
            .join(", ");
        FoundationError::UnknownParameter {
            key: key.into(),
            expected,
        }
    }

    /// Create an UnknownView error
    pub fn unknown_view(name: impl Into<String>) -> Self {
        FoundationError::UnknownView { name: name.into() }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        FoundationError::Serialization {
            reason: reason.into(),
        }
    }

    /// Create an Io error
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FoundationError::Io {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FoundationError::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            FoundationError::UnknownView { .. } => "UNKNOWN_VIEW",
            FoundationError::Serialization { .. } => "SERIALIZATION_ERROR",
            FoundationError::Io { .. } => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for FoundationError {
    fn from(err: serde_json::Error) -> Self {
        FoundationError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FoundationError::unknown_parameter("height");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: FoundationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FoundationError::unknown_view("iso").error_code(), "UNKNOWN_VIEW");
        assert_eq!(FoundationError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(FoundationError::io("read", "a.json", "missing").error_code(), "IO_ERROR");
    }

    #[test]
    fn test_unknown_parameter_lists_keys() {
        let msg = FoundationError::unknown_parameter("height").to_string();
        assert!(msg.contains("height"));
        assert!(msg.contains("rebarSpacing"));
        assert!(msg.contains("coverConcrete"));
    }
}
