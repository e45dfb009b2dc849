//! Serialization of person profiles to versioned JSON payloads.
//!
//! Payloads are tagged with a schema name and version so a file saved by a
//! different application (or a future incompatible release) is rejected
//! instead of silently misread. Missing schema/version/categories fields
//! are tolerated and treated as the expected values; present-but-wrong
//! fields fail.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::CategoryConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::profile::PersonProfile;

/// Schema tag embedded in every profile payload.
pub const PROFILE_SCHEMA: &str = "affection_map_profile";
/// Current payload version.
pub const PROFILE_VERSION: u32 = 1;

/// JSON-serializable form of a [`PersonProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// Schema tag, always [`PROFILE_SCHEMA`] when written by this crate.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Payload version, always [`PROFILE_VERSION`] when written by this crate.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Person's display name.
    pub name: String,
    /// Category labels the vectors are ordered by.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Giving-preference values.
    pub giving: Vec<f64>,
    /// Receiving-preference values.
    pub receiving: Vec<f64>,
}

fn default_schema() -> String {
    PROFILE_SCHEMA.to_string()
}

fn default_version() -> u32 {
    PROFILE_VERSION
}

/// Build a payload for `profile` under the configured category list.
pub fn profile_to_payload(profile: &PersonProfile, categories: &CategoryConfig) -> ProfilePayload {
    ProfilePayload {
        schema: default_schema(),
        version: PROFILE_VERSION,
        name: profile.name().to_string(),
        categories: categories.categories.clone(),
        giving: profile.giving().to_vec(),
        receiving: profile.receiving().to_vec(),
    }
}

/// Convert a payload back into a validated [`PersonProfile`].
///
/// # Errors
/// - `AnalysisError::SerializationError` for an unrecognized schema or an
///   unsupported version
/// - `AnalysisError::ValidationError` if the payload's category list does
///   not match the configured one, or the name/vectors fail profile
///   validation
pub fn payload_to_profile(
    payload: &ProfilePayload,
    categories: &CategoryConfig,
) -> AnalysisResult<PersonProfile> {
    if payload.schema != PROFILE_SCHEMA {
        return Err(AnalysisError::SerializationError(format!(
            "Unrecognized profile schema '{}'",
            payload.schema
        )));
    }
    if payload.version != PROFILE_VERSION {
        return Err(AnalysisError::SerializationError(format!(
            "Unsupported profile version {}",
            payload.version
        )));
    }
    if !payload.categories.is_empty() && payload.categories != categories.categories {
        return Err(AnalysisError::ValidationError {
            field: "categories".to_string(),
            message: "profile categories do not match this application".to_string(),
        });
    }

    PersonProfile::new(
        payload.name.clone(),
        payload.giving.clone(),
        payload.receiving.clone(),
        categories,
    )
}

/// Write `profile` to `path` as pretty-printed JSON with a trailing newline.
///
/// # Errors
/// Returns `AnalysisError::SerializationError` if the file cannot be written.
pub fn save_profile(
    profile: &PersonProfile,
    categories: &CategoryConfig,
    path: impl AsRef<Path>,
) -> AnalysisResult<()> {
    let path = path.as_ref();
    let payload = profile_to_payload(profile, categories);
    let mut json = serde_json::to_string_pretty(&payload)?;
    json.push('\n');

    std::fs::write(path, json).map_err(|e| {
        AnalysisError::SerializationError(format!(
            "Failed to write profile to '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a validated [`PersonProfile`] from a JSON file at `path`.
///
/// # Errors
/// - `AnalysisError::SerializationError` if the file cannot be read or is
///   not valid JSON of the expected schema/version
/// - `AnalysisError::ValidationError` for payload contents that fail
///   profile validation
pub fn load_profile(
    path: impl AsRef<Path>,
    categories: &CategoryConfig,
) -> AnalysisResult<PersonProfile> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::SerializationError(format!(
            "Failed to read profile from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let payload: ProfilePayload = serde_json::from_str(&contents)?;
    payload_to_profile(&payload, categories)
}
