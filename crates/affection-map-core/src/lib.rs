//! Affection Map Analysis Core
//!
//! Analysis core for a two-person love-language alignment application.
//! The surrounding UI gathers two [`PersonProfile`]s, calls [`pearson`]
//! once per direction (A giving vs B receiving, and the reverse), renders
//! radar charts from [`polar_angles`] / [`close_loop`], and displays the
//! text from [`build_explanation`].
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types ([`PersonProfile`], [`CategoryConfig`], [`Correlation`])
//! - Pure analysis operations (correlation, radar geometry, narrative)
//! - Profile JSON serialization ([`profile_io`])
//! - Error types and result aliases
//!
//! Every operation is a pure function of its arguments: no shared mutable
//! state, no I/O outside `config`/`profile_io`, safe to call concurrently
//! from multiple threads.
//!
//! # Example
//!
//! ```
//! use affection_map_core::{
//!     build_explanation, pearson, CategoryConfig, PersonProfile,
//! };
//!
//! let categories = CategoryConfig::default();
//! let avery = PersonProfile::new(
//!     "Avery",
//!     vec![8.0, 2.0, 5.0, 9.0, 1.0],
//!     vec![6.0, 4.0, 5.0, 7.0, 3.0],
//!     &categories,
//! )?;
//! let blair = PersonProfile::new(
//!     "Blair",
//!     vec![5.0, 5.0, 6.0, 8.0, 2.0],
//!     vec![7.0, 3.0, 4.0, 8.0, 2.0],
//!     &categories,
//! )?;
//!
//! let a_to_b = pearson(avery.giving(), blair.receiving())?;
//! let b_to_a = pearson(blair.giving(), avery.receiving())?;
//! let narrative = build_explanation(&avery, &blair, a_to_b, b_to_a, &categories)?;
//! assert_eq!(narrative.split("\n\n").count(), 5);
//! # Ok::<(), affection_map_core::AnalysisError>(())
//! ```

pub mod config;
pub mod correlation;
pub mod error;
pub mod explanation;
pub mod geometry;
pub mod profile;
pub mod profile_io;

// Re-exports for convenience
pub use config::{CategoryConfig, DEFAULT_CATEGORIES};
pub use correlation::{pearson, Correlation};
pub use error::{AnalysisError, AnalysisResult};
pub use explanation::{
    build_explanation, interpret_correlation, AlignmentDirection, CorrelationStrength,
    ProfileHighlights,
};
pub use geometry::{close_loop, polar_angles};
pub use profile::PersonProfile;
pub use profile_io::{load_profile, save_profile, ProfilePayload};
