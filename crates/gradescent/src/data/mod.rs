//! Data preparation for training.
//!
//! Turns raw row-major observations into the matrices the optimizer consumes:
//!
//! - [`FeatureScaler`] / [`normalize`]: mean normalization of feature columns
//! - [`build_feature_matrix`]: design matrix with a leading bias column
//! - [`column_vector`]: target vector from plain values
//! - [`init_coefficients`]: seed coefficient vector (zeros or seeded uniform)

mod error;
mod matrix;
mod scaler;

pub use error::{DatasetError, NormalizationFailure};
pub use matrix::{build_feature_matrix, column_vector, init_coefficients};
pub use scaler::{normalize, FeatureScaler};
