//! Errors raised while preparing training data.

use crate::model::ConfigError;

/// Reasons the feature scaler could not produce a usable result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationFailure {
    #[error("no observations to normalize")]
    NoRows,

    #[error("observations have no feature columns")]
    NoFeatures,

    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("non-finite value {value} at row {row}, feature {feature}")]
    NonFinite { row: usize, feature: usize, value: f64 },
}

/// Dataset conversion/validation errors.
///
/// Returned by the training entry point before any matrix is built,
/// including configurations that were not created through the builder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("number of feature rows ({rows}) does not match number of targets ({targets})")]
    ShapeMismatch { rows: usize, targets: usize },

    #[error("feature normalization failed: {0}")]
    NormalizationFailure(#[from] NormalizationFailure),

    #[error("non-finite target {value} at row {row}")]
    NonFiniteTarget { row: usize, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
