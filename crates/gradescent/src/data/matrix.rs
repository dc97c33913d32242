//! Matrix construction from plain numeric rows.
//!
//! Training data is stored sample-major:
//!
//! ```text
//! features[[row, 0]]       → 1.0 (bias column)
//! features[[row, 1 + f]]   → value of feature f
//! ```

use ndarray::{Array1, Array2};
use rand::prelude::*;

/// Build the `[n_rows, n_features + 1]` design matrix, prepending the bias column.
///
/// All rows are expected to have the same width (see
/// [`FeatureScaler::fit`](super::FeatureScaler::fit), which enforces this).
/// Missing trailing values in a shorter row are left at `0.0`.
pub fn build_feature_matrix<R: AsRef<[f64]>>(rows: &[R]) -> Array2<f64> {
    let n_rows = rows.len();
    let n_features = rows.first().map_or(0, |r| r.as_ref().len());

    let mut matrix = Array2::zeros((n_rows, n_features + 1));
    for (mut out, row) in matrix.rows_mut().into_iter().zip(rows.iter()) {
        out[0] = 1.0;
        for (dst, &src) in out.iter_mut().skip(1).zip(row.as_ref().iter()) {
            *dst = src;
        }
    }
    matrix
}

/// Build a column vector from plain values.
#[inline]
pub fn column_vector(values: &[f64]) -> Array1<f64> {
    Array1::from(values.to_vec())
}

/// Seed coefficient vector of length `count`.
///
/// With `range == 0.0` every coefficient starts at zero. Otherwise each
/// coefficient is drawn uniformly from `[-range, range]`; the same `seed`
/// always yields the same vector.
pub fn init_coefficients(count: usize, range: f64, seed: u64) -> Array1<f64> {
    if range <= 0.0 {
        return Array1::zeros(count);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-range..=range)).collect()
}
