//! Training configuration with builder pattern.
//!
//! [`RegressionConfig`] is immutable once built. The learning rate stored
//! here is only the starting value: the trainer carries its own shrinking
//! copy for the duration of a run.
//!
//! # Example
//!
//! ```
//! use gradescent::model::RegressionConfig;
//! use gradescent::training::Objective;
//!
//! // All defaults
//! let config = RegressionConfig::builder().build().unwrap();
//!
//! // Regularized logistic regression
//! let config = RegressionConfig::builder()
//!     .objective(Objective::logistic())
//!     .learning_rate(0.5)
//!     .lambda(1.0)
//!     .max_iterations(5_000)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.lambda, 1.0);
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::training::{GradientDescentParams, Objective, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("learning_rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    #[error("lambda must be non-negative and finite, got {0}")]
    InvalidLambda(f64),

    #[error("convergence must be positive, got {0}")]
    InvalidConvergence(f64),

    #[error("learning_rate_decay must be in (0, 1), got {0}")]
    InvalidDecay(f64),

    #[error("initial_range must be non-negative and finite, got {0}")]
    InvalidInitialRange(f64),

    #[error("advisory_ratio must be greater than 1, got {0}")]
    InvalidAdvisoryRatio(f64),
}

// =============================================================================
// RegressionConfig
// =============================================================================

/// Configuration for training a [`RegressionModel`](super::RegressionModel).
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct RegressionConfig {
    /// Cost/hypothesis pair. Default: squared loss.
    #[builder(default)]
    pub objective: Objective,

    /// Starting learning rate. Default: 0.1.
    #[builder(default = 0.1)]
    pub learning_rate: f64,

    /// L2 regularization strength. Default: 0.0 (disabled).
    #[builder(default = 0.0)]
    pub lambda: f64,

    /// Minimum cost improvement per accepted step to keep going. Default: 1e-6.
    #[builder(default = 1e-6)]
    pub convergence: f64,

    /// Iteration cap, counted on accepted steps only. Default: 10 000.
    #[builder(default = 10_000)]
    pub max_iterations: usize,

    /// Learning rate multiplier applied after a cost increase. Default: 0.5.
    #[builder(default = 0.5)]
    pub learning_rate_decay: f64,

    /// Coefficients start uniform in `[-initial_range, initial_range]`.
    /// Default: 0.0 (all zeros).
    #[builder(default = 0.0)]
    pub initial_range: f64,

    /// Seed for coefficient initialization. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Ratio between the configured and the observed coefficient magnitude
    /// above which a new initial range is suggested. Default: 5.0.
    #[builder(default = 5.0)]
    pub advisory_ratio: f64,

    /// Record every optimizer step in the report. Default: false.
    #[builder(default = false)]
    pub track_history: bool,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: regression_config_builder::IsComplete> RegressionConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any hyperparameter is out of range.
    pub fn build(self) -> Result<RegressionConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl RegressionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(ConfigError::InvalidLambda(self.lambda));
        }
        if self.convergence.is_nan() || self.convergence <= 0.0 {
            return Err(ConfigError::InvalidConvergence(self.convergence));
        }
        let decay = self.learning_rate_decay;
        if decay.is_nan() || decay <= 0.0 || decay >= 1.0 {
            return Err(ConfigError::InvalidDecay(self.learning_rate_decay));
        }
        if !self.initial_range.is_finite() || self.initial_range < 0.0 {
            return Err(ConfigError::InvalidInitialRange(self.initial_range));
        }
        if self.advisory_ratio.is_nan() || self.advisory_ratio <= 1.0 {
            return Err(ConfigError::InvalidAdvisoryRatio(self.advisory_ratio));
        }
        Ok(())
    }

    /// Convert to the trainer's parameter set.
    pub fn to_trainer_params(&self) -> GradientDescentParams {
        GradientDescentParams {
            learning_rate: self.learning_rate,
            lambda: self.lambda,
            convergence: self.convergence,
            max_iterations: self.max_iterations,
            learning_rate_decay: self.learning_rate_decay,
            track_history: self.track_history,
            verbosity: self.verbosity,
        }
    }
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================
