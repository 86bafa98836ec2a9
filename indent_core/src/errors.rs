//! # Error Types
//!
//! Structured error types for indent_core. Table lookup misses are never
//! errors (they fall back locally); what reaches the caller is either a
//! structural integration problem (unknown product, mismatched
//! configuration) or an I/O / export failure.
//!
//! ## Example
//!
//! ```rust
//! use indent_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_m",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for indent_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No calculator is registered for the requested product type
    #[error("No calculator for product type: {product_type}")]
    CalculatorNotFound { product_type: String },

    /// The configuration variant does not belong to the requested product
    #[error("Configuration mismatch: expected {expected}, got {found}")]
    ConfigurationMismatch { expected: String, found: String },

    /// Material not found in a reference table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Rendering an export format failed
    #[error("Export failed ({format}): {reason}")]
    ExportFailed { format: String, reason: String },

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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
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

    /// Create a CalculatorNotFound error
    pub fn calculator_not_found(product_type: impl Into<String>) -> Self {
        CalcError::CalculatorNotFound {
            product_type: product_type.into(),
        }
    }

    /// Create a ConfigurationMismatch error
    pub fn configuration_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CalcError::ConfigurationMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an ExportFailed error
    pub fn export_failed(format: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ExportFailed {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::CalculatorNotFound { .. } => "CALCULATOR_NOT_FOUND",
            CalcError::ConfigurationMismatch { .. } => "CONFIGURATION_MISMATCH",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::ExportFailed { .. } => "EXPORT_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length_m", "-3.0", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::calculator_not_found("Tower").error_code(), "CALCULATOR_NOT_FOUND");
        assert_eq!(CalcError::material_not_found("99mm").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::export_failed("pdf", "boom").error_code(), "EXPORT_FAILED");
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::configuration_mismatch("Centering Plate", "Adjustable Prop");
        assert_eq!(
            error.to_string(),
            "Configuration mismatch: expected Centering Plate, got Adjustable Prop"
        );
    }
}
