//! Regularized batch gradient updates.
//!
//! One update turns the current coefficients into a candidate:
//!
//! ```text
//! step   = (Xᵀ(h - y)) · α / m
//! θ'ᵢ    = θᵢ · (1 - α·λ/n) - stepᵢ     for i ≥ 1
//! θ'₀    = θ₀ - step₀                   (bias is never shrunk)
//! ```
//!
//! The current coefficients are only read; the candidate is a fresh vector,
//! so a rejected candidate leaves nothing to undo.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::training::regularization::shrink_factor;

/// Unregularized gradient step `(Xᵀ(h - y)) · learning_rate / m`.
///
/// # Arguments
///
/// * `features` - Design matrix `[n_samples, n_coefficients]`
/// * `targets` - Observed values `[n_samples]`
/// * `hypothesis` - Predictions for the current coefficients `[n_samples]`
/// * `learning_rate` - Current step size
pub fn gradient_step(
    features: ArrayView2<f64>,
    targets: ArrayView1<f64>,
    hypothesis: ArrayView1<f64>,
    learning_rate: f64,
) -> Array1<f64> {
    let n_samples = targets.len() as f64;
    let residuals = &hypothesis - &targets;
    let mut step = features.t().dot(&residuals);
    step *= learning_rate / n_samples;
    step
}

/// Candidate coefficients after shrinking and subtracting `step`.
pub fn regularized_candidate(
    coefficients: ArrayView1<f64>,
    step: ArrayView1<f64>,
    learning_rate: f64,
    lambda: f64,
) -> Array1<f64> {
    debug_assert_eq!(coefficients.len(), step.len());

    let shrink = shrink_factor(learning_rate, lambda, coefficients.len());
    let mut candidate = &coefficients * shrink - &step;
    if !candidate.is_empty() {
        candidate[0] = coefficients[0] - step[0];
    }
    candidate
}

/// Produces candidate coefficient vectors for the trainer.
#[derive(Debug, Clone, Copy)]
pub struct Updater {
    lambda: f64,
}

impl Updater {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Compute the candidate for one step at `learning_rate`.
    pub fn propose(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        coefficients: ArrayView1<f64>,
        hypothesis: ArrayView1<f64>,
        learning_rate: f64,
    ) -> Array1<f64> {
        let step = gradient_step(features, targets, hypothesis, learning_rate);
        regularized_candidate(coefficients, step.view(), learning_rate, self.lambda)
    }
}
