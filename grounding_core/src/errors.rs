//! # Error Types
//!
//! Structured error types for grounding_core. Every configuration-level
//! calculation validates its inputs first, so a bad value surfaces here as
//! a named error instead of a NaN somewhere downstream.
//!
//! ## Example
//!
//! ```rust
//! use grounding_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_m: f64) -> CalcResult<()> {
//!     if spacing_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "conductor_spacing_m",
//!             spacing_m.to_string(),
//!             "Conductor spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for grounding_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, outside a formula's domain, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Soil or conductor name not found in the reference tables
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// The grid-sizing search hit its side-length cap without meeting the target
    #[error("Cannot size a grid to reach {target_ohm} ohm: side length exceeded {limit_m} m")]
    NotSizable { target_ohm: f64, limit_m: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a NotSizable error
    pub fn not_sizable(target_ohm: f64, limit_m: f64) -> Self {
        CalcError::NotSizable { target_ohm, limit_m }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure comes from the design itself rather than bad input.
    ///
    /// A `NotSizable` configuration is valid; the soil and target simply
    /// cannot be reconciled by growing the grid.
    pub fn is_design_limit(&self) -> bool {
        matches!(self, CalcError::NotSizable { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::NotSizable { .. } => "NOT_SIZABLE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fault_duration_s", "0", "Fault duration must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_not_found("basalt").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::not_sizable(0.5, 1_000_000.0).error_code(), "NOT_SIZABLE");
    }

    #[test]
    fn test_not_sizable_message() {
        let error = CalcError::not_sizable(0.5, 1_000_000.0);
        assert!(error.is_design_limit());
        assert_eq!(
            error.to_string(),
            "Cannot size a grid to reach 0.5 ohm: side length exceeded 1000000 m"
        );
        assert!(!CalcError::material_not_found("x").is_design_limit());
    }
}
