//! Classification objective functions.

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::{ObjectiveFn, TaskKind};
use crate::training::regularization::regularization_penalty;

/// Probabilities are kept this far from 0 and 1 so the log loss stays finite.
const PROB_EPSILON: f64 = 1e-15;

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// =============================================================================
// Logistic Loss
// =============================================================================

/// Logistic loss (cross-entropy) for binary classification.
///
/// Targets are expected in `{0, 1}`.
///
/// - Hypothesis: `sigmoid(X·θ)`
/// - Cost: `-(1/m) Σ [y ln h + (1 - y) ln(1 - h)] + λΣθᵢ² / 2m`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticLoss;

impl ObjectiveFn for LogisticLoss {
    fn hypothesis(&self, features: ArrayView2<f64>, coefficients: ArrayView1<f64>) -> Array1<f64> {
        features.dot(&coefficients).mapv_into(sigmoid)
    }

    fn cost(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        coefficients: ArrayView1<f64>,
        lambda: f64,
    ) -> f64 {
        let n_samples = targets.len() as f64;
        let probs = self.hypothesis(features, coefficients);
        let log_loss: f64 = probs
            .iter()
            .zip(targets.iter())
            .map(|(&p, &y)| {
                let p = p.clamp(PROB_EPSILON, 1.0 - PROB_EPSILON);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum();
        log_loss / n_samples + regularization_penalty(coefficients, lambda) / (2.0 * n_samples)
    }

    fn name(&self) -> &'static str {
        "logistic"
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::BinaryClassification
    }
}
