//! Radar-chart geometry helpers.
//!
//! Radar polygons are drawn in polar coordinates and must close exactly:
//! the rendering layer expects the last point to coincide with the first.
//! Both helpers here close their output by duplicating the first element,
//! never by interpolation, so there is no floating-point drift between the
//! start and end of a loop.

use std::f64::consts::TAU;

use crate::error::{AnalysisError, AnalysisResult};

/// Evenly spaced polar angles for `count` categories, loop-closed.
///
/// Returns `count + 1` angles: `count` values ascending over [0, 2π)
/// starting at 0, then a copy of the first angle so the sequence pairs
/// with a [`close_loop`]ed value sequence of the same length.
///
/// # Errors
/// Returns `AnalysisError::InvalidCategoryCount` if `count == 0`.
pub fn polar_angles(count: usize) -> AnalysisResult<Vec<f64>> {
    if count == 0 {
        return Err(AnalysisError::InvalidCategoryCount { count });
    }

    let step = TAU / count as f64;
    let mut angles: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
    angles.push(angles[0]);
    Ok(angles)
}

/// Append the first value to the end so radar polygons close properly.
///
/// The input is otherwise unchanged.
///
/// # Errors
/// Returns `AnalysisError::EmptyInput` on an empty sequence (no first
/// element to duplicate).
pub fn close_loop(values: &[f64]) -> AnalysisResult<Vec<f64>> {
    let first = *values.first().ok_or(AnalysisError::EmptyInput)?;
    let mut closed = Vec::with_capacity(values.len() + 1);
    closed.extend_from_slice(values);
    closed.push(first);
    Ok(closed)
}
