//! Synthetic data for tests and benchmarks.

use rand::prelude::*;

/// Random row-major observations, values uniform in `[min, max]`.
pub fn random_rows(rows: usize, cols: usize, seed: u64, min: f64, max: f64) -> Vec<Vec<f64>> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(min..=max)).collect())
        .collect()
}

/// Targets from a random linear model of `rows` plus uniform noise.
///
/// Returns `(targets, weights, bias)`.
pub fn synthetic_linear_targets(
    rows: &[Vec<f64>],
    seed: u64,
    noise_amplitude: f64,
) -> (Vec<f64>, Vec<f64>, f64) {
    let cols = rows.first().map_or(0, Vec::len);
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: Vec<f64> = (0..cols).map(|_| rng.gen_range(-1.0..=1.0)).collect();
    let bias: f64 = rng.gen_range(-0.25..=0.25);

    let targets = rows
        .iter()
        .map(|row| {
            let mut y = bias + row.iter().zip(&weights).map(|(x, w)| x * w).sum::<f64>();
            if noise_amplitude > 0.0 {
                y += rng.gen_range(-1.0..=1.0) * noise_amplitude;
            }
            y
        })
        .collect();

    (targets, weights, bias)
}

/// Binary `{0, 1}` targets from thresholding a noisy linear score at 0.
pub fn synthetic_binary_targets(rows: &[Vec<f64>], seed: u64, noise_amplitude: f64) -> Vec<f64> {
    let (score, _, _) = synthetic_linear_targets(rows, seed, noise_amplitude);
    score
        .into_iter()
        .map(|s| if s > 0.0 { 1.0 } else { 0.0 })
        .collect()
}
