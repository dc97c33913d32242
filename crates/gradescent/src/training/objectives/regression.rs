//! Regression objective functions.

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::{ObjectiveFn, TaskKind};
use crate::training::regularization::regularization_penalty;

// =============================================================================
// Squared Loss
// =============================================================================

/// Squared error loss for ordinary least squares.
///
/// - Hypothesis: `X·θ`
/// - Cost: `(Σ(h - y)² + λΣθᵢ²) / 2m`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquaredLoss;

impl ObjectiveFn for SquaredLoss {
    fn hypothesis(&self, features: ArrayView2<f64>, coefficients: ArrayView1<f64>) -> Array1<f64> {
        features.dot(&coefficients)
    }

    fn cost(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        coefficients: ArrayView1<f64>,
        lambda: f64,
    ) -> f64 {
        let n_samples = targets.len() as f64;
        let predictions = self.hypothesis(features, coefficients);
        let sum_sq: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&h, &y)| (h - y) * (h - y))
            .sum();
        (sum_sq + regularization_penalty(coefficients, lambda)) / (2.0 * n_samples)
    }

    fn name(&self) -> &'static str {
        "squared"
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::Regression
    }
}
