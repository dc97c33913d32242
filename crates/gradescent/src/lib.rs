//! gradescent: regularized batch gradient descent for linear models.
//!
//! Fits a coefficient vector θ (θ₀ = bias) to a feature matrix and a target
//! vector by minimizing an L2-regularized cost. The learning rate shrinks
//! whenever a step would raise the cost, and training stops once an accepted
//! step improves the cost by less than the convergence threshold or the
//! iteration cap is reached.
//!
//! # Key Types
//!
//! - [`RegressionModel`] / [`RegressionConfig`] - Train from raw rows, predict new rows
//! - [`GradientDescentTrainer`] - The optimizer, for callers with prepared matrices
//! - [`Objective`] - Squared (linear) or logistic cost/hypothesis
//! - [`TrainingReport`] / [`StopReason`] - Final coefficients and diagnostics
//!
//! # Training
//!
//! Use `RegressionConfig::builder()` to configure, then `RegressionModel::train()`.
//! See the [`model`] module for details.

// Re-export approx traits for users who want to compare coefficients
pub use approx;

pub mod data;
pub mod model;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use model::{ConfigError, RangeAdvice, RegressionConfig, RegressionModel};

pub use training::{
    GradientDescentParams, GradientDescentTrainer, LogisticLoss, Objective, ObjectiveFn,
    SquaredLoss, StopReason, TaskKind, TrainingReport, Verbosity,
};

pub use data::{DatasetError, FeatureScaler, NormalizationFailure};
