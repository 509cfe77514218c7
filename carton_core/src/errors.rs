//! # Error Types
//!
//! Structured error types for carton_core. The calculation formulas themselves
//! are total and never fail; errors only arise from the validation helpers and
//! from flexible string parsing (e.g. flute profile lookup).
//!
//! ## Example
//!
//! ```rust
//! use carton_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_mm".to_string(),
//!             value: length_mm.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for carton_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for validation and lookup operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by downstream consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Flute profile not found in the board database
    #[error("Flute profile not found: {profile_name}")]
    ProfileNotFound { profile_name: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(profile_name: impl Into<String>) -> Self {
        CalcError::ProfileNotFound {
            profile_name: profile_name.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
        }
    }
}
