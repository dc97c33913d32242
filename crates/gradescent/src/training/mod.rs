//! Training infrastructure.
//!
//! ## Shared Infrastructure
//!
//! - [`ObjectiveFn`] / [`Objective`]: cost and hypothesis per regression flavor
//! - [`regularization_penalty`], [`shrink_factor`], [`unregularized_cost`]: L2 helpers
//! - [`TrainingLogger`], [`Verbosity`]: verbosity-gated logging
//!
//! ## Optimizer
//!
//! - [`gradient_descent`]: batch gradient descent with an adaptive learning rate
//!
//! ## Objectives
//!
//! - [`SquaredLoss`]: ordinary least squares
//! - [`LogisticLoss`]: binary cross-entropy

pub mod gradient_descent;
mod logger;
mod objectives;
mod regularization;

pub use logger::{TrainingLogger, Verbosity};
pub use objectives::{LogisticLoss, Objective, ObjectiveFn, SquaredLoss, TaskKind};
pub use regularization::{regularization_penalty, shrink_factor, unregularized_cost};

pub use gradient_descent::{
    GradientDescentParams, GradientDescentTrainer, StepRecord, StopReason, TrainingReport,
};
