//! Pearson correlation with explicit undefined semantics.
//!
//! The correlation engine computes a linear-association coefficient between
//! two equal-length vectors. Degenerate inputs (fewer than 2 points, or a
//! vector with no variance) yield [`Correlation::Undefined`] rather than a
//! propagated division-by-zero: a constant vector has no linear
//! relationship to anything.
//!
//! Mismatched lengths are a caller bug and fail with
//! [`AnalysisError::LengthMismatch`]; inputs are never truncated or padded.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};

/// Relative tolerance below which a sample variance is treated as zero.
///
/// Scaled by the mean square of the input so floating-point noise from
/// nominally constant vectors (e.g. repeated slider values) is absorbed.
pub const VARIANCE_REL_TOLERANCE: f64 = 1e-12;

/// Outcome of a correlation computation.
///
/// `Undefined` is a valid, expected output, not an error condition. Every
/// downstream consumer branches on it explicitly; the single [`fmt::Display`]
/// impl here is the one place the "r is undefined" wording lives, so chart
/// subtitles and narrative text cannot disagree on how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Correlation {
    /// A defined Pearson coefficient in [-1.0, 1.0].
    Defined(f64),
    /// No defined linear relationship (constant vector or a single point).
    Undefined,
}

impl Correlation {
    /// The coefficient, or `None` when undefined.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(r) => Some(*r),
            Self::Undefined => None,
        }
    }

    /// True when the coefficient is defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(r) => write!(f, "r = {:.2}", r),
            Self::Undefined => write!(f, "r is undefined"),
        }
    }
}

/// Compute the Pearson product-moment correlation coefficient.
///
/// Two-pass, mean-centered: covariance of (x, y) divided by the product of
/// the standard deviations. Sample variances use the Bessel-corrected
/// divisor N-1. The result is clamped to [-1.0, 1.0] to shed rounding
/// overshoot on perfectly collinear inputs.
///
/// Returns `Ok(Correlation::Undefined)` when either input has fewer than 2
/// elements or a sample variance numerically indistinguishable from zero.
///
/// # Errors
/// Returns `AnalysisError::LengthMismatch` if `x.len() != y.len()`.
pub fn pearson(x: &[f64], y: &[f64]) -> AnalysisResult<Correlation> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let n = x.len();
    if n < 2 {
        debug!(n, "correlation undefined: fewer than 2 points");
        return Ok(Correlation::Undefined);
    }

    let nf = n as f64;
    let mean_x = x.iter().sum::<f64>() / nf;
    let mean_y = y.iter().sum::<f64>() / nf;

    let (mut sxx, mut syy, mut sxy) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let bessel = nf - 1.0;
    if variance_is_zero(sxx / bessel, x) || variance_is_zero(syy / bessel, y) {
        debug!(n, "correlation undefined: zero-variance input");
        return Ok(Correlation::Undefined);
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    debug!(n, r, "computed Pearson correlation");
    Ok(Correlation::Defined(r))
}

/// Relative zero test for a sample variance.
fn variance_is_zero(variance: f64, values: &[f64]) -> bool {
    let mean_sq = values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64;
    variance <= VARIANCE_REL_TOLERANCE * mean_sq.max(1.0)
}
