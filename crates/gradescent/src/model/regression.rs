//! Regression model trained by gradient descent.
//!
//! High-level wrapper that prepares raw rows, runs the trainer, and keeps the
//! fitted scaler so new rows can be predicted on the same scale.

use ndarray::{s, Array1, ArrayView1};

use crate::data::{
    build_feature_matrix, column_vector, init_coefficients, normalize, DatasetError,
    FeatureScaler, NormalizationFailure,
};
use crate::training::{
    GradientDescentTrainer, ObjectiveFn, TaskKind, TrainingLogger, TrainingReport,
};

use super::advisory::{recommend_initial_range, RangeAdvice};
use super::RegressionConfig;

/// Linear (or logistic) regression model with its training diagnostics.
///
/// # Example
///
/// ```
/// use gradescent::model::{RegressionConfig, RegressionModel};
///
/// let rows = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
/// let targets = vec![3.0, 5.0, 7.0, 9.0];
///
/// let config = RegressionConfig::builder().learning_rate(0.5).build().unwrap();
/// let model = RegressionModel::train(&rows, &targets, config, true)
///     .unwrap()
///     .unwrap();
///
/// let pred = model.predict_row(&[5.0]).unwrap();
/// assert!((pred - 11.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct RegressionModel {
    report: TrainingReport,
    scaler: FeatureScaler,
    config: RegressionConfig,
    advice: Option<RangeAdvice>,
}

impl RegressionModel {
    /// Train a model on row-major observations.
    ///
    /// # Arguments
    ///
    /// * `feature_rows` - One row of raw feature values per observation
    /// * `targets` - One observed value per row
    /// * `config` - Training configuration
    /// * `compute` - When `false`, stop after validating and normalizing the
    ///   input and return `Ok(None)`
    ///
    /// # Errors
    ///
    /// - [`DatasetError::InvalidConfig`] if `config` fails validation
    /// - [`DatasetError::ShapeMismatch`] if row and target counts differ
    /// - [`DatasetError::NonFiniteTarget`] if a target is NaN or infinite
    /// - [`DatasetError::NormalizationFailure`] if the rows cannot be normalized
    ///
    /// All are checked before any matrix is built.
    pub fn train<R: AsRef<[f64]>>(
        feature_rows: &[R],
        targets: &[f64],
        config: RegressionConfig,
        compute: bool,
    ) -> Result<Option<Self>, DatasetError> {
        let logger = TrainingLogger::new(config.verbosity);

        config.validate().map_err(|e| {
            let err = DatasetError::from(e);
            logger.warn(format_args!("training skipped: {}", err));
            err
        })?;

        if feature_rows.len() != targets.len() {
            let err = DatasetError::ShapeMismatch {
                rows: feature_rows.len(),
                targets: targets.len(),
            };
            logger.warn(format_args!("training skipped: {}", err));
            return Err(err);
        }

        if let Some((row, &value)) = targets.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            let err = DatasetError::NonFiniteTarget { row, value };
            logger.warn(format_args!("training skipped: {}", err));
            return Err(err);
        }

        let (scaled, scaler) = normalize(feature_rows).map_err(|e| {
            let err = DatasetError::from(e);
            logger.warn(format_args!("training skipped: {}", err));
            err
        })?;

        if !compute {
            logger.info(format_args!(
                "input validated ({} rows, {} features), training not requested",
                scaled.len(),
                scaler.n_features()
            ));
            return Ok(None);
        }

        let features = build_feature_matrix(&scaled);
        let target_vec = column_vector(targets);
        let initial = init_coefficients(features.ncols(), config.initial_range, config.seed);

        let trainer = GradientDescentTrainer::new(config.objective, config.to_trainer_params());
        let report = trainer
            .train(features.view(), target_vec.view(), initial)
            .ok_or(DatasetError::ShapeMismatch {
                rows: features.nrows(),
                targets: target_vec.len(),
            })?;

        let advice = recommend_initial_range(
            report.coefficients.view(),
            config.initial_range,
            config.advisory_ratio,
        );
        if let Some(advice) = &advice {
            logger.info(format_args!(
                "suggested initial coefficient range: {} (configured {})",
                advice.suggested, advice.configured
            ));
        }

        Ok(Some(Self {
            report,
            scaler,
            config,
            advice,
        }))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All coefficients, index 0 is the bias.
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.report.coefficients.view()
    }

    /// Bias coefficient θ₀.
    pub fn bias(&self) -> f64 {
        self.report.coefficients[0]
    }

    /// Feature weights θ₁..θₙ (on the normalized scale).
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.report.coefficients.slice(s![1..])
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    /// Task implied by the configured objective.
    pub fn task(&self) -> TaskKind {
        self.config.objective.task_kind()
    }

    /// Training diagnostics.
    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// Suggested initial range, if the trained coefficients warrant one.
    pub fn advice(&self) -> Option<&RangeAdvice> {
        self.advice.as_ref()
    }

    /// Configuration the model was trained with.
    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Scaler fitted on the training rows.
    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Predict raw feature rows.
    ///
    /// Returns values for squared loss and probabilities for logistic loss.
    pub fn predict<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Array1<f64>, NormalizationFailure> {
        let scaled = self.scaler.transform(rows)?;
        let features = build_feature_matrix(&scaled);
        Ok(self
            .config
            .objective
            .hypothesis(features.view(), self.coefficients()))
    }

    /// Predict a single raw feature row.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, NormalizationFailure> {
        let scaled = self.scaler.transform_row(row)?;
        let features = build_feature_matrix(&[scaled]);
        let prediction = self
            .config
            .objective
            .hypothesis(features.view(), self.coefficients());
        Ok(prediction[0])
    }
}

// =============================================================================
// Tests
// =============================================================================
