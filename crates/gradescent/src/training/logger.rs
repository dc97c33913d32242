//! Verbosity-gated training output.
//!
//! Messages go through the [`log`] facade; the host application decides
//! where they end up by installing a logger. [`Verbosity`] filters on top of
//! that so a quiet trainer never formats anything.

use serde::{Deserialize, Serialize};

/// Verbosity level for training output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Errors and warnings only.
    Warning,
    /// Progress and important information.
    Info,
    /// Per-step details.
    Debug,
}

/// Logger used by trainers and the model entry point.
#[derive(Debug, Clone, Copy)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn start_training(&self, n_coefficients: usize, n_samples: usize, max_iterations: usize) {
        if self.enabled(Verbosity::Info) {
            log::info!(
                "gradient descent: {} coefficients, {} samples, max {} iterations",
                n_coefficients,
                n_samples,
                max_iterations
            );
        }
    }

    pub fn log_accepted(&self, iteration: usize, previous_cost: f64, current_cost: f64) {
        if self.enabled(Verbosity::Debug) {
            log::debug!(
                "[{}] cost {:.6e} -> {:.6e}",
                iteration,
                previous_cost,
                current_cost
            );
        }
    }

    pub fn log_rejected(&self, iteration: usize, candidate_cost: f64, learning_rate: f64) {
        if self.enabled(Verbosity::Debug) {
            log::debug!(
                "[{}] cost rose to {:.6e}, learning rate shrunk to {:.6e}",
                iteration,
                candidate_cost,
                learning_rate
            );
        }
    }

    pub fn log_converged(&self, iteration: usize, unregularized_cost: f64) {
        if self.enabled(Verbosity::Info) {
            log::info!(
                "converged after {} iterations, unregularized cost {:.6e}",
                iteration,
                unregularized_cost
            );
        }
    }

    pub fn log_max_iterations(&self, max_iterations: usize, unregularized_cost: f64) {
        if self.enabled(Verbosity::Info) {
            log::info!(
                "reached max iterations ({}), unregularized cost {:.6e}",
                max_iterations,
                unregularized_cost
            );
        }
    }

    pub fn info(&self, message: std::fmt::Arguments<'_>) {
        if self.enabled(Verbosity::Info) {
            log::info!("{}", message);
        }
    }

    pub fn warn(&self, message: std::fmt::Arguments<'_>) {
        if self.enabled(Verbosity::Warning) {
            log::warn!("{}", message);
        }
    }
}
