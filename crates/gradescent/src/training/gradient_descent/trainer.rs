//! Batch gradient descent trainer.
//!
//! Runs the regularized update until the cost stops improving or the
//! iteration cap is hit. A candidate that raises the cost is discarded and
//! the learning rate is shrunk for the rest of the run.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::training::regularization::unregularized_cost;
use crate::training::{ObjectiveFn, TrainingLogger, Verbosity};

use super::report::{StepRecord, StopReason, TrainingReport};
use super::updater::Updater;

// ============================================================================
// GradientDescentParams
// ============================================================================

/// Parameters for gradient descent training.
#[derive(Clone, Debug)]
pub struct GradientDescentParams {
    /// Initial step size. Only ever shrinks during a run.
    pub learning_rate: f64,

    /// L2 regularization strength (lambda). `0.0` disables regularization.
    pub lambda: f64,

    /// Stop once an accepted step improves the cost by less than this.
    pub convergence: f64,

    /// Iteration counter value at which an accepted step ends the run.
    pub max_iterations: usize,

    /// Factor applied to the learning rate after a rejected step, in `(0, 1)`.
    pub learning_rate_decay: f64,

    /// Record every step in [`TrainingReport::history`].
    pub track_history: bool,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            lambda: 0.0,
            convergence: 1e-6,
            max_iterations: 10_000,
            learning_rate_decay: 0.5,
            track_history: false,
            verbosity: Verbosity::default(),
        }
    }
}

impl GradientDescentParams {
    /// True when the learning rate is positive and finite and every rejected
    /// step strictly shrinks it.
    pub fn has_shrinking_learning_rate(&self) -> bool {
        let decay = self.learning_rate_decay;
        self.learning_rate.is_finite()
            && self.learning_rate > 0.0
            && decay > 0.0
            && decay < 1.0
    }
}

// ============================================================================
// GradientDescentTrainer
// ============================================================================

/// Regularized batch gradient descent trainer.
///
/// Holds no per-run state: the working coefficients and the shrinking
/// learning rate live inside [`train`](Self::train), so one trainer can be
/// shared between independent runs.
#[derive(Clone, Debug)]
pub struct GradientDescentTrainer<O: ObjectiveFn> {
    objective: O,
    params: GradientDescentParams,
}

impl<O: ObjectiveFn> GradientDescentTrainer<O> {
    /// Create a new trainer with the given objective and parameters.
    pub fn new(objective: O, params: GradientDescentParams) -> Self {
        Self { objective, params }
    }

    /// Get the objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Get the training parameters.
    pub fn params(&self) -> &GradientDescentParams {
        &self.params
    }

    /// Train from `initial` coefficients.
    ///
    /// # Arguments
    ///
    /// * `features` - Design matrix `[n_samples, n_coefficients]` with the bias column first
    /// * `targets` - Observed values `[n_samples]`
    /// * `initial` - Seed coefficients `[n_coefficients]`
    ///
    /// # Returns
    ///
    /// Returns `None` if:
    /// - There are no samples
    /// - `targets` length differs from the number of rows
    /// - `initial` length differs from the number of columns
    /// - `learning_rate` is not positive and finite
    /// - `learning_rate_decay` is outside `(0, 1)`
    pub fn train(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        initial: Array1<f64>,
    ) -> Option<TrainingReport> {
        let (n_samples, n_coefficients) = features.dim();
        if n_samples == 0 || targets.len() != n_samples || initial.len() != n_coefficients {
            return None;
        }
        if !self.params.has_shrinking_learning_rate() {
            return None;
        }

        let lambda = self.params.lambda;
        let max_iterations = self.params.max_iterations;
        let updater = Updater::new(lambda);
        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_coefficients, n_samples, max_iterations);

        let mut coefficients = initial;
        let mut learning_rate = self.params.learning_rate;
        let mut iteration = 0usize;
        let mut rejected_steps = 0usize;
        let mut history = Vec::new();

        loop {
            let previous_cost = self
                .objective
                .cost(features, targets, coefficients.view(), lambda);
            let hypothesis = self.objective.hypothesis(features, coefficients.view());
            let candidate = updater.propose(
                features,
                targets,
                coefficients.view(),
                hypothesis.view(),
                learning_rate,
            );
            let current_cost = self
                .objective
                .cost(features, targets, candidate.view(), lambda);

            let cost_increased = current_cost > previous_cost;
            let accepted = !cost_increased;
            if self.params.track_history {
                history.push(StepRecord {
                    iteration,
                    learning_rate,
                    previous_cost,
                    candidate_cost: current_cost,
                    accepted,
                });
            }

            if !accepted {
                // Keep the current coefficients; the counter does not advance.
                learning_rate *= self.params.learning_rate_decay;
                rejected_steps += 1;
                logger.log_rejected(iteration, current_cost, learning_rate);
                continue;
            }

            logger.log_accepted(iteration, previous_cost, current_cost);

            let stop_reason = if previous_cost - current_cost < self.params.convergence {
                Some(StopReason::Converged)
            } else if iteration == max_iterations {
                Some(StopReason::MaxIterationsReached)
            } else {
                None
            };

            if let Some(stop_reason) = stop_reason {
                let unregularized =
                    unregularized_cost(current_cost, candidate.view(), lambda, n_samples);
                match stop_reason {
                    StopReason::Converged => logger.log_converged(iteration, unregularized),
                    StopReason::MaxIterationsReached => {
                        logger.log_max_iterations(max_iterations, unregularized)
                    }
                }
                return Some(TrainingReport {
                    coefficients: candidate,
                    stop_reason,
                    iterations: iteration,
                    rejected_steps,
                    final_learning_rate: learning_rate,
                    cost: current_cost,
                    unregularized_cost: unregularized,
                    history,
                });
            }

            coefficients = candidate;
            iteration += 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
