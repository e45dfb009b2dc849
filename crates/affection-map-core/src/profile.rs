//! Person profile: one individual's love-language preference vectors.

use serde::Serialize;

use crate::config::CategoryConfig;
use crate::error::{AnalysisError, AnalysisResult};

/// Inclusive lower bound of the preference scale.
pub const VALUE_MIN: f64 = 0.0;
/// Inclusive upper bound of the preference scale.
pub const VALUE_MAX: f64 = 10.0;

/// Container for an individual's love-language values.
///
/// Holds the person's display name plus two preference vectors, one entry
/// per category in the configured [`CategoryConfig`] order:
///
/// - `giving`: how strongly they like to express each category
/// - `receiving`: how strongly they enjoy receiving each category
///
/// # Invariant
///
/// Both vectors have exactly one finite value in [0, 10] per category and
/// the name is non-blank. Enforced by [`PersonProfile::new`]; fields are
/// private so a constructed profile stays valid for the duration of an
/// analysis pass. The UI layer rebuilds profiles as its live state changes.
///
/// Profiles serialize but do not deserialize directly: incoming data goes
/// through [`crate::profile_io::ProfilePayload`] and back out via
/// [`crate::profile_io::payload_to_profile`], so every profile in the
/// program has passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonProfile {
    name: String,
    giving: Vec<f64>,
    receiving: Vec<f64>,
}

impl PersonProfile {
    /// Create a validated profile.
    ///
    /// The name is trimmed before storage.
    ///
    /// # Errors
    /// Returns `AnalysisError::ValidationError` if:
    /// - the name is blank
    /// - either vector's length differs from `categories.len()`
    /// - any value is non-finite or outside [0, 10]
    pub fn new(
        name: impl Into<String>,
        giving: Vec<f64>,
        receiving: Vec<f64>,
        categories: &CategoryConfig,
    ) -> AnalysisResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::ValidationError {
                field: "name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        validate_values("giving", &giving, categories.len())?;
        validate_values("receiving", &receiving, categories.len())?;

        Ok(Self {
            name: trimmed.to_string(),
            giving,
            receiving,
        })
    }

    /// The person's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Giving-preference values, one per category.
    #[inline]
    pub fn giving(&self) -> &[f64] {
        &self.giving
    }

    /// Receiving-preference values, one per category.
    #[inline]
    pub fn receiving(&self) -> &[f64] {
        &self.receiving
    }
}

/// Check one preference vector against the category count and value range.
fn validate_values(field: &str, values: &[f64], expected_len: usize) -> AnalysisResult<()> {
    if values.len() != expected_len {
        return Err(AnalysisError::ValidationError {
            field: field.to_string(),
            message: format!(
                "must contain {} numeric values, got {}",
                expected_len,
                values.len()
            ),
        });
    }

    for &value in values {
        if !value.is_finite() {
            return Err(AnalysisError::ValidationError {
                field: field.to_string(),
                message: "contains non-finite values".to_string(),
            });
        }
        if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
            return Err(AnalysisError::ValidationError {
                field: field.to_string(),
                message: format!(
                    "values must be between {} and {}, got {}",
                    VALUE_MIN, VALUE_MAX, value
                ),
            });
        }
    }

    Ok(())
}
