//! Category list configuration.
//!
//! The ordered category list defines the index correspondence between a
//! profile's preference vectors and the labels used in narrative text and
//! chart axis labels. Its length parameterizes every core operation; the
//! count is a parameter, never a hardcoded 5.
//!
//! # Loading Configuration
//!
//! ```rust,ignore
//! use affection_map_core::CategoryConfig;
//!
//! // Load from file
//! let config = CategoryConfig::from_file("categories.toml")?;
//!
//! // Or use the standard five love languages
//! let config = CategoryConfig::default();
//! ```
//!
//! # TOML Structure
//!
//! ```toml
//! categories = [
//!     "Words of Affirmation",
//!     "Acts of Service",
//!     "Receiving Gifts",
//!     "Quality Time",
//!     "Physical Touch",
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// The five standard love-language categories, in display order.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Words of Affirmation",
    "Acts of Service",
    "Receiving Gifts",
    "Quality Time",
    "Physical Touch",
];

/// Ordered, fixed set of category labels shared by all profiles.
///
/// # Invariant
///
/// The list is non-empty and contains no blank labels. This is enforced by
/// `validate()`, which runs inside `new` and `from_file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category labels in axis/narrative order.
    pub categories: Vec<String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryConfig {
    /// Create a configuration from an explicit label list.
    ///
    /// # Errors
    /// Returns `AnalysisError::ConfigError` if the list is empty or any
    /// label is blank.
    pub fn new(categories: Vec<String>) -> AnalysisResult<Self> {
        let config = Self { categories };
        config
            .validate()
            .map_err(AnalysisError::ConfigError)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `AnalysisError::ConfigError` if the file cannot be read
    /// - `AnalysisError::ConfigError` if TOML parsing or validation fails
    pub fn from_file(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| {
            AnalysisError::ConfigError(format!(
                "Failed to parse TOML in '{}': {}",
                path.display(),
                e
            ))
        })?;

        config
            .validate()
            .map_err(AnalysisError::ConfigError)?;
        Ok(config)
    }

    /// Validate the category list.
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() {
            return Err("category list must not be empty".to_string());
        }
        for (i, label) in self.categories.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(format!("category label at index {} is blank", i));
            }
        }
        Ok(())
    }

    /// Number of categories. Parameterizes angle generation and vector lengths.
    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the list holds no categories. A validated config is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Label at `index`, or `None` when out of range.
    #[inline]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }
}
