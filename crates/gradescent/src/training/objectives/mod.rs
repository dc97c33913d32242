//! Cost/hypothesis strategies for gradient descent.
//!
//! Each objective supplies exactly two things to the optimizer:
//!
//! - `hypothesis(X, θ)`: the model's prediction for every sample
//! - `cost(X, y, θ, λ)`: the unregularized loss plus the L2 penalty share
//!   `λΣθᵢ² / 2m` (bias excluded)
//!
//! The optimizer only talks to [`ObjectiveFn`]; it never inspects which
//! variant of [`Objective`] is active.
//!
//! # Available Objectives
//!
//! - [`SquaredLoss`]: ordinary least squares regression
//! - [`LogisticLoss`]: binary classification (cross-entropy)

mod classification;
mod regression;

pub use classification::LogisticLoss;
pub use regression::SquaredLoss;

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Type of task an objective fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskKind {
    /// Continuous target.
    #[default]
    Regression,
    /// Targets in `{0, 1}`; predictions are probabilities.
    BinaryClassification,
}

// =============================================================================
// Objective Trait
// =============================================================================

/// A cost/hypothesis pair driven by the gradient descent trainer.
///
/// Layout:
/// - `features`: `[n_samples, n_coefficients]`, column 0 is the bias column
/// - `targets`: `[n_samples]`
/// - `coefficients`: `[n_coefficients]`, index 0 is the bias
///
/// Both methods are pure: the same inputs always produce the same value.
pub trait ObjectiveFn: Send + Sync {
    /// Predicted value for every sample.
    fn hypothesis(&self, features: ArrayView2<f64>, coefficients: ArrayView1<f64>) -> Array1<f64>;

    /// Regularized cost of `coefficients` on the given data.
    fn cost(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        coefficients: ArrayView1<f64>,
        lambda: f64,
    ) -> f64;

    /// Name of the objective (for logging).
    fn name(&self) -> &'static str;

    /// Task implied by this objective.
    fn task_kind(&self) -> TaskKind;
}

// =============================================================================
// Objective Enum
// =============================================================================

/// Closed set of supported objectives.
///
/// Implements [`ObjectiveFn`] by delegating to the wrapped loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Squared error loss for regression.
    SquaredLoss(SquaredLoss),
    /// Logistic loss for binary classification.
    LogisticLoss(LogisticLoss),
}

impl Objective {
    /// Squared error loss for regression.
    pub fn squared() -> Self {
        Self::SquaredLoss(SquaredLoss)
    }

    /// Logistic loss for binary classification.
    pub fn logistic() -> Self {
        Self::LogisticLoss(LogisticLoss)
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::squared()
    }
}

impl ObjectiveFn for Objective {
    fn hypothesis(&self, features: ArrayView2<f64>, coefficients: ArrayView1<f64>) -> Array1<f64> {
        match self {
            Self::SquaredLoss(inner) => inner.hypothesis(features, coefficients),
            Self::LogisticLoss(inner) => inner.hypothesis(features, coefficients),
        }
    }

    fn cost(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        coefficients: ArrayView1<f64>,
        lambda: f64,
    ) -> f64 {
        match self {
            Self::SquaredLoss(inner) => inner.cost(features, targets, coefficients, lambda),
            Self::LogisticLoss(inner) => inner.cost(features, targets, coefficients, lambda),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SquaredLoss(inner) => inner.name(),
            Self::LogisticLoss(inner) => inner.name(),
        }
    }

    fn task_kind(&self) -> TaskKind {
        match self {
            Self::SquaredLoss(inner) => inner.task_kind(),
            Self::LogisticLoss(inner) => inner.task_kind(),
        }
    }
}
