//! Error types for affection-map-core.
//!
//! This module defines the central error type [`AnalysisError`] used
//! throughout the crate, along with the [`AnalysisResult<T>`] type alias.
//!
//! An undefined correlation is deliberately NOT an error: it is modelled as
//! [`crate::correlation::Correlation::Undefined`] and every consumer must
//! branch on it. `AnalysisError` covers only invalid input, which fails
//! fast and is never retried.
//!
//! # Examples
//!
//! ```rust
//! use affection_map_core::{pearson, AnalysisError};
//!
//! let result = pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
//! assert!(matches!(
//!     result,
//!     Err(AnalysisError::LengthMismatch { left: 2, right: 3 })
//! ));
//! ```

use thiserror::Error;

/// Top-level error type for analysis-core operations.
///
/// Provides structured error variants for all failure modes in the core
/// library, enabling precise error handling and informative messages.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Two paired sequences do not have the same length.
    ///
    /// # When This Occurs
    ///
    /// - Correlating vectors of different lengths
    /// - Extracting highlights from mismatched giving/receiving vectors
    ///
    /// Inputs are never silently truncated or padded.
    #[error("Length mismatch: left sequence has {left} values, right has {right}")]
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },

    /// An operation received an empty sequence it cannot act on.
    ///
    /// # When This Occurs
    ///
    /// - Closing a loop over an empty value sequence (no first element to
    ///   duplicate)
    /// - Extracting highlights from empty vectors
    #[error("Empty input: operation requires at least one value")]
    EmptyInput,

    /// The category count does not support the requested operation.
    ///
    /// # When This Occurs
    ///
    /// - Generating polar angles for zero categories
    #[error("Invalid category count: {count} (must be at least 1)")]
    InvalidCategoryCount {
        /// The rejected count
        count: usize,
    },

    /// A field value failed validation constraints.
    ///
    /// # When This Occurs
    ///
    /// - Profile value outside the [0, 10] semantic range
    /// - NaN or infinity in a preference vector
    /// - Blank profile name
    /// - Vector length not matching the configured category list
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Category configuration is invalid or could not be loaded.
    ///
    /// # When This Occurs
    ///
    /// - Missing or unreadable configuration file
    /// - TOML parse failure
    /// - Empty category list or blank labels
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during profile serialization or deserialization.
    ///
    /// # When This Occurs
    ///
    /// - JSON parse failure on a profile file
    /// - Unrecognized profile schema or version
    /// - Profile file I/O failure
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::SerializationError(err.to_string())
    }
}

/// Result type alias for analysis-core operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
