//! Regularized batch gradient descent.
//!
//! - [`GradientDescentTrainer`]: the convergence loop
//! - [`Updater`]: builds candidate coefficients (L2 shrink, bias exempt)
//! - [`TrainingReport`]: final coefficients plus stop reason and costs

mod report;
mod trainer;
mod updater;

pub use report::{StepRecord, StopReason, TrainingReport};
pub use trainer::{GradientDescentParams, GradientDescentTrainer};
pub use updater::{gradient_step, regularized_candidate, Updater};
