//! High-level model wrappers.
//!
//! - [`RegressionModel`]: trains from raw rows, predicts on the same scale
//! - [`RegressionConfig`]: validated, immutable training configuration
//! - [`RangeAdvice`]: optional suggestion for a better initial coefficient range
//!
//! # Example
//!
//! ```
//! use gradescent::model::{RegressionConfig, RegressionModel};
//!
//! let rows = vec![vec![1.0, 0.5], vec![2.0, 0.1], vec![3.0, 0.9], vec![4.0, 0.3]];
//! let targets = vec![1.0, 2.0, 3.0, 4.0];
//!
//! // Validation only: nothing is trained.
//! let checked = RegressionModel::train(&rows, &targets, RegressionConfig::default(), false);
//! assert!(matches!(checked, Ok(None)));
//!
//! let model = RegressionModel::train(&rows, &targets, RegressionConfig::default(), true)
//!     .unwrap()
//!     .unwrap();
//! println!("{:?} after {} iterations", model.coefficients(), model.report().iterations);
//! ```

mod advisory;
mod config;
mod regression;

pub use advisory::{recommend_initial_range, trimmed_magnitude, RangeAdvice};
pub use config::{ConfigError, RegressionConfig};
pub use regression::RegressionModel;
