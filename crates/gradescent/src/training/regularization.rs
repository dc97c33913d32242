//! L2 regularization helpers.
//!
//! Coefficient `0` is the bias and is never penalized or shrunk.

use ndarray::ArrayView1;

/// L2 penalty `λ · Σ θᵢ²` over the non-bias coefficients.
///
/// Returns `0.0` without touching the coefficients when `lambda == 0`.
#[inline]
pub fn regularization_penalty(coefficients: ArrayView1<f64>, lambda: f64) -> f64 {
    if lambda == 0.0 {
        return 0.0;
    }
    let sum_sq: f64 = coefficients.iter().skip(1).map(|&w| w * w).sum();
    lambda * sum_sq
}

/// Multiplicative shrink applied to every non-bias coefficient before the
/// gradient step: `1 - learning_rate · λ / n_coefficients`.
#[inline]
pub fn shrink_factor(learning_rate: f64, lambda: f64, n_coefficients: usize) -> f64 {
    if lambda == 0.0 || n_coefficients == 0 {
        return 1.0;
    }
    1.0 - learning_rate * lambda / n_coefficients as f64
}

/// Cost with the penalty share `penalty / (2m)` removed.
#[inline]
pub fn unregularized_cost(
    cost: f64,
    coefficients: ArrayView1<f64>,
    lambda: f64,
    n_samples: usize,
) -> f64 {
    cost - regularization_penalty(coefficients, lambda) / 2.0 / n_samples as f64
}
