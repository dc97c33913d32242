//! Mean normalization of raw feature rows.
//!
//! Each feature column is centred on its mean and divided by its span:
//!
//! ```text
//! x' = (x - mean) / (max - min)
//! ```
//!
//! A constant column has a span of zero; it is scaled by `1.0` instead, so
//! every value maps to `0.0`.

use super::error::NormalizationFailure;

/// Per-feature statistics fitted on the training rows.
///
/// The same statistics must be applied to any row that is later fed to a
/// model trained on the normalized data.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    means: Vec<f64>,
    spans: Vec<f64>,
}

impl FeatureScaler {
    /// Fit scaling statistics on row-major observations.
    ///
    /// # Errors
    ///
    /// Fails when there are no rows, no feature columns, rows of differing
    /// width, or any non-finite value.
    pub fn fit<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, NormalizationFailure> {
        let first = rows.first().ok_or(NormalizationFailure::NoRows)?;
        let n_features = first.as_ref().len();
        if n_features == 0 {
            return Err(NormalizationFailure::NoFeatures);
        }

        let mut sums = vec![0.0f64; n_features];
        let mut mins = vec![f64::INFINITY; n_features];
        let mut maxs = vec![f64::NEG_INFINITY; n_features];

        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_features {
                return Err(NormalizationFailure::RaggedRow {
                    row: row_idx,
                    expected: n_features,
                    got: row.len(),
                });
            }
            for (feature, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(NormalizationFailure::NonFinite {
                        row: row_idx,
                        feature,
                        value,
                    });
                }
                sums[feature] += value;
                mins[feature] = mins[feature].min(value);
                maxs[feature] = maxs[feature].max(value);
            }
        }

        let n_rows = rows.len() as f64;
        let means = sums.iter().map(|&s| s / n_rows).collect();
        let spans = mins
            .iter()
            .zip(maxs.iter())
            .map(|(&lo, &hi)| if hi > lo { hi - lo } else { 1.0 })
            .collect();

        Ok(Self { means, spans })
    }

    /// Number of feature columns the scaler was fitted on.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Fitted column means.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Fitted column spans (`max - min`, or `1.0` for constant columns).
    pub fn spans(&self) -> &[f64] {
        &self.spans
    }

    /// Scale a single row with the fitted statistics.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, NormalizationFailure> {
        if row.len() != self.n_features() {
            return Err(NormalizationFailure::RaggedRow {
                row: 0,
                expected: self.n_features(),
                got: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(self.means.iter().zip(self.spans.iter()))
            .map(|(&x, (&mean, &span))| (x - mean) / span)
            .collect())
    }

    /// Scale many rows with the fitted statistics.
    pub fn transform<R: AsRef<[f64]>>(
        &self,
        rows: &[R],
    ) -> Result<Vec<Vec<f64>>, NormalizationFailure> {
        rows.iter()
            .enumerate()
            .map(|(row_idx, row)| {
                self.transform_row(row.as_ref()).map_err(|e| match e {
                    NormalizationFailure::RaggedRow { expected, got, .. } => {
                        NormalizationFailure::RaggedRow {
                            row: row_idx,
                            expected,
                            got,
                        }
                    }
                    other => other,
                })
            })
            .collect()
    }
}

/// Fit a [`FeatureScaler`] on `rows` and return the scaled rows with it.
pub fn normalize<R: AsRef<[f64]>>(
    rows: &[R],
) -> Result<(Vec<Vec<f64>>, FeatureScaler), NormalizationFailure> {
    let scaler = FeatureScaler::fit(rows)?;
    let scaled = scaler.transform(rows)?;
    Ok((scaled, scaler))
}

// ============================================================================
// Tests
// ============================================================================
