//! # Error Types
//!
//! Structured error types for mdof_core. Model generation is a one-shot
//! batch computation: every failure here is terminal for the invocation,
//! nothing is retried, and no partial model is ever produced.
//!
//! ## Example
//!
//! ```rust
//! use mdof_core::errors::{ModelError, ModelResult};
//!
//! fn validate_stories(no_stories: u32) -> ModelResult<()> {
//!     if no_stories < 1 {
//!         return Err(ModelError::invalid_input(
//!             "noStories",
//!             no_stories.to_string(),
//!             "Building must have at least one story",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mdof_core operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Structured error type for model generation.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by downstream tooling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ModelError {
    /// An input field value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Building-description file is not valid JSON of the expected shape
    #[error("Malformed building description in '{path}': {reason}")]
    MalformedInput { path: String, reason: String },

    /// Reference table does not contain exactly 4 blocks of 36 well-formed entries
    #[error("Malformed reference data at line {line}: {reason}")]
    MalformedReferenceData { line: usize, reason: String },

    /// Structure-type key absent from the resolved code-level bucket
    #[error("Unknown building type '{struc_type}' under code level {code_level}")]
    UnknownBuildingType {
        struc_type: String,
        code_level: String,
    },

    /// A matched reference entry carries physically unusable data
    #[error("Invalid reference data for '{struc_type}': {reason}")]
    InvalidReferenceData { struc_type: String, reason: String },

    /// File I/O error (either source file absent/unreadable, or output unwritable)
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

impl ModelError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedReferenceData error for a 1-based line number
    pub fn malformed_reference(line: usize, reason: impl Into<String>) -> Self {
        ModelError::MalformedReferenceData {
            line,
            reason: reason.into(),
        }
    }

    /// Create an UnknownBuildingType error
    pub fn unknown_building_type(
        struc_type: impl Into<String>,
        code_level: impl Into<String>,
    ) -> Self {
        ModelError::UnknownBuildingType {
            struc_type: struc_type.into(),
            code_level: code_level.into(),
        }
    }

    /// Create an InvalidReferenceData error
    pub fn invalid_reference(
        struc_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::InvalidReferenceData {
            struc_type: struc_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ModelError::InvalidInput { .. } => "INVALID_INPUT",
            ModelError::MalformedInput { .. } => "MALFORMED_INPUT",
            ModelError::MalformedReferenceData { .. } => "MALFORMED_REFERENCE_DATA",
            ModelError::UnknownBuildingType { .. } => "UNKNOWN_BUILDING_TYPE",
            ModelError::InvalidReferenceData { .. } => "INVALID_REFERENCE_DATA",
            ModelError::FileError { .. } => "FILE_ERROR",
            ModelError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
