//! Outcome of a gradient descent run.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Why the optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// An accepted step improved the cost by less than the convergence threshold.
    Converged,
    /// The iteration counter reached the configured maximum on an accepted step.
    MaxIterationsReached,
}

/// One optimizer step, accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Iteration counter when the step was taken.
    pub iteration: usize,
    /// Learning rate used to build the candidate.
    pub learning_rate: f64,
    /// Cost of the coefficients the step started from.
    pub previous_cost: f64,
    /// Cost of the candidate coefficients.
    pub candidate_cost: f64,
    /// Whether the candidate replaced the coefficients.
    pub accepted: bool,
}

/// Final coefficients and diagnostics of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Final coefficient vector, index 0 is the bias.
    pub coefficients: Array1<f64>,
    /// Terminal state.
    pub stop_reason: StopReason,
    /// Iteration counter at termination. Rejected steps never advance it.
    pub iterations: usize,
    /// Number of rejected (cost-increasing) steps.
    pub rejected_steps: usize,
    /// Learning rate after all shrinking.
    pub final_learning_rate: f64,
    /// Regularized cost of the final coefficients.
    pub cost: f64,
    /// Cost with the regularization share removed.
    pub unregularized_cost: f64,
    /// Per-step records, only filled when history tracking is enabled.
    pub history: Vec<StepRecord>,
}

impl TrainingReport {
    /// Returns true if the run stopped on the convergence threshold.
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Converged
    }

    /// Total number of steps taken, accepted and rejected.
    pub fn total_steps(&self) -> usize {
        self.iterations + 1 + self.rejected_steps
    }
}
