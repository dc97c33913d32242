//! Suggested initial coefficient range.
//!
//! After training, the typical coefficient magnitude is estimated as the
//! mean absolute value with the largest and smallest coefficients left out.
//! When that estimate and the configured initial range are far apart, a
//! rounded replacement range is suggested. The suggestion never feeds back
//! into training.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Fewer coefficients than this give no meaningful trimmed mean.
const MIN_COEFFICIENTS: usize = 4;

/// A suggested replacement for the configured initial range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeAdvice {
    /// Trimmed mean of the absolute coefficient values.
    pub reference: f64,
    /// `reference` rounded half-up to the nearest ten.
    pub suggested: i64,
    /// The initial range that was configured for the run.
    pub configured: f64,
}

/// Trimmed mean of `|θᵢ|`, dropping the largest and the smallest coefficient.
///
/// Returns `None` for fewer than four coefficients.
pub fn trimmed_magnitude(coefficients: ArrayView1<f64>) -> Option<f64> {
    let n = coefficients.len();
    if n < MIN_COEFFICIENTS {
        return None;
    }
    let max = coefficients.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = coefficients.iter().copied().fold(f64::INFINITY, f64::min);
    let sum_abs: f64 = coefficients.iter().map(|v| v.abs()).sum();
    Some((sum_abs - max.abs() - min.abs()) / (n - 2) as f64)
}

/// Round half-up to the nearest multiple of ten.
#[inline]
fn round_to_tens(value: f64) -> i64 {
    ((value / 10.0) + 0.5).floor() as i64 * 10
}

/// Suggest a new initial range when the trained coefficients are more than
/// `ratio` times larger or smaller than `configured`.
///
/// No suggestion is made when the rounded value equals the configured range.
pub fn recommend_initial_range(
    coefficients: ArrayView1<f64>,
    configured: f64,
    ratio: f64,
) -> Option<RangeAdvice> {
    let reference = trimmed_magnitude(coefficients)?;

    let hi = reference.max(configured);
    let lo = reference.min(configured);
    // lo == 0 yields +inf (advise) unless both are zero (NaN, no advice).
    let spread = hi / lo;
    if spread.is_nan() || spread <= ratio {
        return None;
    }

    let suggested = round_to_tens(reference);
    if suggested as f64 == configured {
        return None;
    }

    Some(RangeAdvice {
        reference,
        suggested,
        configured,
    })
}
