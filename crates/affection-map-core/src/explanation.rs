//! Human-readable explanations of how two profiles align.
//!
//! Turns the two directional correlation coefficients plus the raw
//! preference vectors into narrative text: one sentence per direction
//! classifying the coefficient into a strength bucket and a direction
//! label, then three per-category highlight sentences (greatest shared
//! enthusiasm, most aligned expectations, largest gap).
//!
//! The bucket thresholds and direction rule are fixed here and nowhere
//! else; every sentence goes through [`interpret_correlation`] so callers
//! cannot end up with mixed classification schemes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CategoryConfig;
use crate::correlation::Correlation;
use crate::error::{AnalysisError, AnalysisResult};
use crate::profile::PersonProfile;

/// Qualitative strength bucket for a defined coefficient.
///
/// Classified on |r| with fixed, non-overlapping thresholds:
///
/// - `NearPerfect`: |r| in [0.90, 1.0]
/// - `Strong`: |r| in [0.70, 0.90)
/// - `Moderate`: |r| in [0.40, 0.70)
/// - `Weak`: |r| in [0.20, 0.40)
/// - `MinimalOrMixed`: |r| in [0, 0.20)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationStrength {
    /// |r| >= 0.90 - profiles move together almost exactly
    NearPerfect,
    /// |r| >= 0.70 - clear linear association
    Strong,
    /// |r| >= 0.40 - visible but partial association
    Moderate,
    /// |r| >= 0.20 - slight association
    Weak,
    /// |r| < 0.20 - no meaningful linear association
    MinimalOrMixed,
}

impl CorrelationStrength {
    /// Classify a defined coefficient into a strength bucket.
    #[inline]
    pub fn from_coefficient(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r >= 0.90 {
            Self::NearPerfect
        } else if abs_r >= 0.70 {
            Self::Strong
        } else if abs_r >= 0.40 {
            Self::Moderate
        } else if abs_r >= 0.20 {
            Self::Weak
        } else {
            Self::MinimalOrMixed
        }
    }

    /// Human-readable label as used in narrative sentences.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NearPerfect => "near perfect",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::MinimalOrMixed => "minimal or mixed",
        }
    }
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sign-based direction label for a defined coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentDirection {
    /// r >= 0: preferences move in the same direction
    Alignment,
    /// r < 0: preferences move in opposite directions
    InverseAlignment,
}

impl AlignmentDirection {
    /// Classify a defined coefficient by sign.
    #[inline]
    pub fn from_coefficient(r: f64) -> Self {
        if r >= 0.0 {
            Self::Alignment
        } else {
            Self::InverseAlignment
        }
    }

    /// Human-readable label as used in narrative sentences.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alignment => "alignment",
            Self::InverseAlignment => "inverse alignment",
        }
    }
}

impl std::fmt::Display for AlignmentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-category highlight indices extracted from one giving/receiving pair.
///
/// All three indices refer to the configured category order. Ties break to
/// the lowest index, so the result is deterministic and reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHighlights {
    /// Index maximizing `(giving[i] + receiving[i]) / 2`.
    pub shared_enthusiasm: usize,
    /// Index minimizing `|giving[i] - receiving[i]|`.
    pub aligned_expectations: usize,
    /// Index maximizing `|giving[i] - receiving[i]|`.
    pub largest_gap: usize,
}

impl ProfileHighlights {
    /// Extract highlight indices from one person's giving vector and the
    /// partner's receiving vector.
    ///
    /// # Errors
    /// - `AnalysisError::LengthMismatch` if the vectors differ in length
    /// - `AnalysisError::EmptyInput` if they are empty
    pub fn compute(giving: &[f64], receiving: &[f64]) -> AnalysisResult<Self> {
        if giving.len() != receiving.len() {
            return Err(AnalysisError::LengthMismatch {
                left: giving.len(),
                right: receiving.len(),
            });
        }
        if giving.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut shared_enthusiasm = 0;
        let mut aligned_expectations = 0;
        let mut largest_gap = 0;
        let mut best_mean = f64::NEG_INFINITY;
        let mut smallest_diff = f64::INFINITY;
        let mut biggest_diff = f64::NEG_INFINITY;

        // Strict comparisons keep the first occurrence on ties
        for (i, (&give, &recv)) in giving.iter().zip(receiving.iter()).enumerate() {
            let mean = (give + recv) / 2.0;
            let diff = (give - recv).abs();

            if mean > best_mean {
                best_mean = mean;
                shared_enthusiasm = i;
            }
            if diff < smallest_diff {
                smallest_diff = diff;
                aligned_expectations = i;
            }
            if diff > biggest_diff {
                biggest_diff = diff;
                largest_gap = i;
            }
        }

        Ok(Self {
            shared_enthusiasm,
            aligned_expectations,
            largest_gap,
        })
    }
}

/// Build one directional sentence for a coefficient.
///
/// Names the giver, the receiver, the coefficient (two decimal places, or
/// the undefined wording), the strength bucket, the direction label, and
/// the caller-supplied description of what the coefficient measures.
pub fn interpret_correlation(
    giver: &str,
    receiver: &str,
    value: Correlation,
    description: &str,
) -> String {
    match value.value() {
        None => format!(
            "{} → {}: {}. Insufficient variation to assess {}.",
            giver, receiver, value, description
        ),
        Some(r) => {
            let strength = CorrelationStrength::from_coefficient(r);
            let direction = AlignmentDirection::from_coefficient(r);
            format!(
                "{} → {}: {}. {} {} in {}.",
                giver,
                receiver,
                value,
                strength.label(),
                direction.label(),
                description
            )
        }
    }
}

/// Generate the full narrative describing how two profiles align.
///
/// Output is exactly five sentence blocks separated by blank lines, in
/// fixed order: direction A→B, direction B→A, greatest shared enthusiasm,
/// most aligned expectations, largest gap. An undefined coefficient gets
/// its "insufficient variation" sentence variant; this function never
/// fails on one.
///
/// # Errors
/// Returns `AnalysisError::ValidationError` if either profile's vector
/// length does not match the configured category list.
pub fn build_explanation(
    person_a: &PersonProfile,
    person_b: &PersonProfile,
    corr_a_to_b: Correlation,
    corr_b_to_a: Correlation,
    categories: &CategoryConfig,
) -> AnalysisResult<String> {
    check_profile_len(person_a, categories)?;
    check_profile_len(person_b, categories)?;

    let highlights = ProfileHighlights::compute(person_a.giving(), person_b.receiving())?;
    debug!(
        shared = highlights.shared_enthusiasm,
        aligned = highlights.aligned_expectations,
        gap = highlights.largest_gap,
        "extracted profile highlights"
    );

    let summary = [
        interpret_correlation(
            person_a.name(),
            person_b.name(),
            corr_a_to_b,
            "how well what they like to give matches what their partner enjoys receiving",
        ),
        interpret_correlation(
            person_b.name(),
            person_a.name(),
            corr_b_to_a,
            "how well their giving style lands for their partner",
        ),
        format!(
            "Greatest shared enthusiasm: {} - both of you score high here.",
            categories.categories[highlights.shared_enthusiasm]
        ),
        format!(
            "Most aligned expectations: {} - your giving and receiving are closest here.",
            categories.categories[highlights.aligned_expectations]
        ),
        format!(
            "Largest gap: {} - discuss preferences here to bridge differences.",
            categories.categories[highlights.largest_gap]
        ),
    ];

    Ok(summary.join("\n\n"))
}

fn check_profile_len(profile: &PersonProfile, categories: &CategoryConfig) -> AnalysisResult<()> {
    let vectors = [
        ("giving", profile.giving().len()),
        ("receiving", profile.receiving().len()),
    ];
    for (name, len) in vectors {
        if len != categories.len() {
            return Err(AnalysisError::ValidationError {
                field: format!("{}.{}", profile.name(), name),
                message: format!(
                    "expected {} values to match category list, got {}",
                    categories.len(),
                    len
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PersonProfile;

    fn profile(name: &str, giving: Vec<f64>, receiving: Vec<f64>) -> PersonProfile {
        PersonProfile::new(name, giving, receiving, &CategoryConfig::default()).unwrap()
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(
            CorrelationStrength::from_coefficient(0.95),
            CorrelationStrength::NearPerfect
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.90),
            CorrelationStrength::NearPerfect
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.89),
            CorrelationStrength::Strong
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.70),
            CorrelationStrength::Strong
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.69),
            CorrelationStrength::Moderate
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.40),
            CorrelationStrength::Moderate
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.39),
            CorrelationStrength::Weak
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.20),
            CorrelationStrength::Weak
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.19),
            CorrelationStrength::MinimalOrMixed
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.0),
            CorrelationStrength::MinimalOrMixed
        );
        println!("[PASS] Strength thresholds match the fixed bucket table");
    }

    #[test]
    fn test_strength_uses_absolute_value() {
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.95),
            CorrelationStrength::NearPerfect
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.45),
            CorrelationStrength::Moderate
        );
        println!("[PASS] Strength classification is sign-independent");
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(
            AlignmentDirection::from_coefficient(0.5),
            AlignmentDirection::Alignment
        );
        assert_eq!(
            AlignmentDirection::from_coefficient(0.0),
            AlignmentDirection::Alignment
        );
        assert_eq!(
            AlignmentDirection::from_coefficient(-0.01),
            AlignmentDirection::InverseAlignment
        );
        assert_eq!(AlignmentDirection::Alignment.label(), "alignment");
        assert_eq!(
            AlignmentDirection::InverseAlignment.label(),
            "inverse alignment"
        );
        println!("[PASS] Direction labels: r >= 0 is alignment");
    }

    #[test]
    fn test_interpret_defined() {
        let sentence = interpret_correlation(
            "Avery",
            "Blair",
            Correlation::Defined(0.83),
            "how well giving matches receiving",
        );
        assert!(sentence.contains("Avery → Blair"));
        assert!(sentence.contains("r = 0.83"));
        assert!(sentence.contains("strong alignment"));
        println!("[PASS] Defined sentence: {}", sentence);
    }

    #[test]
    fn test_interpret_negative() {
        let sentence = interpret_correlation(
            "Avery",
            "Blair",
            Correlation::Defined(-0.83),
            "how well giving matches receiving",
        );
        assert!(sentence.contains("r = -0.83"));
        assert!(sentence.contains("strong inverse alignment"));
        println!("[PASS] Negative sentence: {}", sentence);
    }

    #[test]
    fn test_interpret_undefined() {
        let sentence = interpret_correlation(
            "Avery",
            "Blair",
            Correlation::Undefined,
            "how well giving matches receiving",
        );
        assert!(sentence.contains("r is undefined"));
        assert!(sentence.contains("Insufficient variation"));
        assert!(!sentence.contains("nan"));
        println!("[PASS] Undefined sentence: {}", sentence);
    }

    #[test]
    fn test_highlights_concrete_scenario() {
        let giving = [8.0, 2.0, 5.0, 9.0, 1.0];
        let receiving = [7.0, 3.0, 4.0, 8.0, 2.0];
        let h = ProfileHighlights::compute(&giving, &receiving).unwrap();

        // Means: 7.5, 2.5, 4.5, 8.5, 1.5 -> max at 3
        // |diffs|: 1, 1, 1, 1, 1 -> all tied, first occurrence wins
        assert_eq!(h.shared_enthusiasm, 3);
        assert_eq!(h.aligned_expectations, 0);
        assert_eq!(h.largest_gap, 0);
        println!("[PASS] Concrete scenario: {:?}", h);
    }

    #[test]
    fn test_highlights_tie_breaks_to_first_index() {
        // |diffs|: 2, 3, 3, 2 - both extremes tied pairwise
        let giving = [5.0, 8.0, 1.0, 6.0];
        let receiving = [3.0, 5.0, 4.0, 4.0];
        let h = ProfileHighlights::compute(&giving, &receiving).unwrap();

        assert_eq!(h.largest_gap, 1, "first of the tied maxima");
        assert_eq!(h.aligned_expectations, 0, "first of the tied minima");
        // Means: 4, 6.5, 2.5, 5 -> unique max at 1
        assert_eq!(h.shared_enthusiasm, 1);
        println!("[PASS] Ties break to the lowest index: {:?}", h);
    }

    #[test]
    fn test_highlights_length_mismatch() {
        let result = ProfileHighlights::compute(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::LengthMismatch { left: 2, right: 1 })
        ));
        println!("[PASS] Mismatched highlight vectors rejected");
    }

    #[test]
    fn test_highlights_empty_input() {
        let result = ProfileHighlights::compute(&[], &[]);
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
        println!("[PASS] Empty highlight vectors rejected");
    }

    #[test]
    fn test_build_explanation_has_five_blocks() {
        let a = profile(
            "Avery",
            vec![8.0, 2.0, 5.0, 9.0, 1.0],
            vec![6.0, 4.0, 5.0, 7.0, 3.0],
        );
        let b = profile(
            "Blair",
            vec![5.0, 5.0, 6.0, 8.0, 2.0],
            vec![7.0, 3.0, 4.0, 8.0, 2.0],
        );

        let text = build_explanation(
            &a,
            &b,
            Correlation::Defined(0.98),
            Correlation::Defined(-0.31),
            &CategoryConfig::default(),
        )
        .unwrap();

        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("Avery → Blair"));
        assert!(blocks[1].starts_with("Blair → Avery"));
        assert!(blocks[2].starts_with("Greatest shared enthusiasm"));
        assert!(blocks[3].starts_with("Most aligned expectations"));
        assert!(blocks[4].starts_with("Largest gap"));
        println!("[PASS] Narrative has 5 blocks in fixed order:\n{}", text);
    }

    #[test]
    fn test_build_explanation_with_undefined_coefficients() {
        let a = profile("Avery", vec![5.0; 5], vec![5.0; 5]);
        let b = profile("Blair", vec![5.0; 5], vec![5.0; 5]);

        let text = build_explanation(
            &a,
            &b,
            Correlation::Undefined,
            Correlation::Undefined,
            &CategoryConfig::default(),
        )
        .unwrap();

        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].contains("r is undefined"));
        assert!(blocks[1].contains("r is undefined"));
        println!("[PASS] Undefined coefficients still yield 5 blocks");
    }

    #[test]
    fn test_build_explanation_rejects_wrong_length_profile() {
        let three = CategoryConfig::new(vec![
            "Kindness".to_string(),
            "Time".to_string(),
            "Gifts".to_string(),
        ])
        .unwrap();
        let short =
            PersonProfile::new("Avery", vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], &three).unwrap();
        let full = profile(
            "Blair",
            vec![5.0, 5.0, 6.0, 8.0, 2.0],
            vec![7.0, 3.0, 4.0, 8.0, 2.0],
        );

        // Both orders fail; the error names the offending profile's vector
        let err = build_explanation(
            &short,
            &full,
            Correlation::Defined(0.5),
            Correlation::Defined(0.5),
            &CategoryConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ValidationError { ref field, .. } if field == "Avery.giving"
        ));

        let err = build_explanation(
            &full,
            &short,
            Correlation::Defined(0.5),
            Correlation::Defined(0.5),
            &CategoryConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ValidationError { ref field, .. } if field == "Avery.giving"
        ));
        println!("[PASS] Wrong-length profiles rejected in either position");
    }

    #[test]
    fn test_build_explanation_names_category_labels() {
        let a = profile(
            "Avery",
            vec![9.0, 1.0, 1.0, 1.0, 1.0],
            vec![5.0; 5],
        );
        let b = profile(
            "Blair",
            vec![5.0; 5],
            vec![9.0, 1.0, 1.0, 1.0, 8.0],
        );

        let text = build_explanation(
            &a,
            &b,
            Correlation::Defined(0.5),
            Correlation::Defined(0.5),
            &CategoryConfig::default(),
        )
        .unwrap();

        // Shared enthusiasm at index 0, largest gap at index 4 (|1-8|=7)
        assert!(text.contains("Greatest shared enthusiasm: Words of Affirmation"));
        assert!(text.contains("Largest gap: Physical Touch"));
        println!("[PASS] Highlights name the category labels");
    }
}
