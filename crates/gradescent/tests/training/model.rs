//! End-to-end tests through [`RegressionModel`].

use approx::assert_abs_diff_eq;
use gradescent::model::{ConfigError, RegressionConfig, RegressionModel};
use gradescent::testing::{random_rows, synthetic_binary_targets, synthetic_linear_targets};
use gradescent::{DatasetError, NormalizationFailure, Objective, StopReason, TaskKind};
use rstest::rstest;

fn train(rows: &[Vec<f64>], targets: &[f64], config: RegressionConfig) -> RegressionModel {
    RegressionModel::train(rows, targets, config, true)
        .expect("valid dataset")
        .expect("training requested")
}

// =============================================================================
// Regression
// =============================================================================

#[rstest]
#[case(1, 11)]
#[case(3, 12)]
#[case(5, 13)]
fn noiseless_linear_data_is_fitted(#[case] n_features: usize, #[case] seed: u64) {
    let rows = random_rows(200, n_features, seed, -5.0, 5.0);
    let (targets, weights, bias) = synthetic_linear_targets(&rows, seed + 100, 0.0);

    let config = RegressionConfig::builder()
        .learning_rate(1.0)
        .convergence(1e-12)
        .max_iterations(100_000)
        .build()
        .unwrap();
    let model = train(&rows, &targets, config);

    assert_eq!(model.task(), TaskKind::Regression);
    assert_eq!(model.n_features(), n_features);
    assert_eq!(model.coefficients().len(), n_features + 1);

    let preds = model.predict(&rows).unwrap();
    let mae: f64 = preds
        .iter()
        .zip(&targets)
        .map(|(p, t)| (p - t).abs())
        .sum::<f64>()
        / targets.len() as f64;
    assert!(mae < 1e-3, "mean absolute error {mae}");

    // Normalized weights map back to the generating weights through the spans.
    for ((w, span), truth) in model
        .weights()
        .iter()
        .zip(model.scaler().spans())
        .zip(&weights)
    {
        assert_abs_diff_eq!(w / span, *truth, epsilon = 1e-2);
    }

    // The bias absorbs the column means.
    let raw_bias = model.bias()
        - model
            .weights()
            .iter()
            .zip(model.scaler().spans())
            .zip(model.scaler().means())
            .map(|((w, span), mean)| w / span * mean)
            .sum::<f64>();
    assert_abs_diff_eq!(raw_bias, bias, epsilon = 1e-2);
}

#[test]
fn regularization_lowers_fit_quality_on_training_data() {
    let rows = random_rows(100, 3, 7, 0.0, 10.0);
    let (targets, _, _) = synthetic_linear_targets(&rows, 8, 0.1);

    let fit = |lambda: f64| {
        let config = RegressionConfig::builder()
            .learning_rate(1.0)
            .lambda(lambda)
            .build()
            .unwrap();
        train(&rows, &targets, config)
    };

    let plain = fit(0.0);
    let ridge = fit(50.0);

    assert!(ridge.report().unregularized_cost > plain.report().unregularized_cost);
    let plain_norm: f64 = plain.weights().iter().map(|w| w * w).sum();
    let ridge_norm: f64 = ridge.weights().iter().map(|w| w * w).sum();
    assert!(ridge_norm < plain_norm);
}

#[test]
fn history_is_carried_through_the_model() {
    let rows: Vec<Vec<f64>> = (1..=8).map(|x| vec![x as f64]).collect();
    let targets: Vec<f64> = (1..=8).map(|x| 3.0 * x as f64 - 1.0).collect();

    let config = RegressionConfig::builder()
        .learning_rate(4.0)
        .track_history(true)
        .build()
        .unwrap();
    let model = train(&rows, &targets, config);

    let report = model.report();
    assert!(report.rejected_steps > 0);
    assert_eq!(report.history.len(), report.total_steps());
    assert!(report.final_learning_rate < 4.0);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn logistic_model_separates_synthetic_classes() {
    let rows = random_rows(200, 3, 21, -1.0, 1.0);
    let targets = synthetic_binary_targets(&rows, 22, 0.0);

    let config = RegressionConfig::builder()
        .objective(Objective::logistic())
        .learning_rate(1.0)
        .build()
        .unwrap();
    let model = train(&rows, &targets, config);
    assert_eq!(model.task(), TaskKind::BinaryClassification);

    let probs = model.predict(&rows).unwrap();
    assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));

    let correct = probs
        .iter()
        .zip(&targets)
        .filter(|&(&p, &t)| (p >= 0.5) == (t == 1.0))
        .count();
    let accuracy = correct as f64 / targets.len() as f64;
    assert!(accuracy > 0.9, "accuracy {accuracy}");
}

// =============================================================================
// Initialization and advisory
// =============================================================================

#[test]
fn seeded_initialization_is_reproducible() {
    let rows = random_rows(50, 2, 3, 0.0, 1.0);
    let (targets, _, _) = synthetic_linear_targets(&rows, 4, 0.0);

    let run = |seed: u64| {
        let config = RegressionConfig::builder()
            .initial_range(5.0)
            .seed(seed)
            .max_iterations(2)
            .build()
            .unwrap();
        train(&rows, &targets, config).coefficients().to_owned()
    };

    assert_eq!(run(1), run(1));
    assert_ne!(run(1), run(2));
}

#[test]
fn large_coefficients_produce_range_advice() {
    let rows = random_rows(100, 3, 5, 0.0, 1.0);
    let targets: Vec<f64> = rows.iter().map(|r| 1000.0 * r.iter().sum::<f64>()).collect();

    let config = RegressionConfig::builder()
        .learning_rate(1.0)
        .build()
        .unwrap();
    let model = train(&rows, &targets, config);

    let advice = model.advice().expect("coefficients far from the configured range");
    assert_eq!(advice.configured, 0.0);
    assert_eq!(advice.suggested % 10, 0);
    assert!((advice.suggested - 1000).abs() <= 100, "suggested {}", advice.suggested);
}

#[test]
fn too_few_coefficients_produce_no_advice() {
    let rows: Vec<Vec<f64>> = (1..=8).map(|x| vec![x as f64]).collect();
    let targets: Vec<f64> = rows.iter().map(|r| 500.0 * r[0]).collect();

    let model = train(&rows, &targets, RegressionConfig::default());
    assert!(model.advice().is_none());
}

// =============================================================================
// Validation and errors
// =============================================================================

#[test]
fn validation_only_run_trains_nothing() {
    let rows = random_rows(10, 2, 1, 0.0, 1.0);
    let targets = vec![0.0; 10];
    let result = RegressionModel::train(&rows, &targets, RegressionConfig::default(), false);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn validation_only_run_still_reports_errors() {
    let rows = vec![vec![1.0, 2.0], vec![3.0]];
    let targets = vec![1.0, 2.0];
    let err = RegressionModel::train(&rows, &targets, RegressionConfig::default(), false)
        .unwrap_err();
    assert_eq!(
        err,
        DatasetError::NormalizationFailure(NormalizationFailure::RaggedRow {
            row: 1,
            expected: 2,
            got: 1
        })
    );
}

#[rstest]
#[case(vec![vec![1.0], vec![2.0], vec![3.0]], vec![1.0, 2.0])]
#[case(vec![vec![1.0]], vec![1.0, 2.0, 3.0])]
fn mismatched_targets_are_rejected(#[case] rows: Vec<Vec<f64>>, #[case] targets: Vec<f64>) {
    let err = RegressionModel::train(&rows, &targets, RegressionConfig::default(), true)
        .unwrap_err();
    assert_eq!(
        err,
        DatasetError::ShapeMismatch {
            rows: rows.len(),
            targets: targets.len()
        }
    );
}

#[test]
fn non_finite_feature_is_rejected() {
    let rows = vec![vec![1.0, 2.0], vec![f64::INFINITY, 0.0]];
    let targets = vec![1.0, 2.0];
    let err = RegressionModel::train(&rows, &targets, RegressionConfig::default(), true)
        .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::NormalizationFailure(NormalizationFailure::NonFinite { row: 1, feature: 0, .. })
    ));
    assert!(err.to_string().contains("non-finite"));
}

#[test]
fn invalid_configuration_never_reaches_training() {
    assert_eq!(
        RegressionConfig::builder().learning_rate(-1.0).build(),
        Err(ConfigError::InvalidLearningRate(-1.0))
    );
}

#[test]
fn stop_reason_is_max_iterations_when_cap_is_tiny() {
    let rows = random_rows(30, 2, 9, 0.0, 1.0);
    let (targets, _, _) = synthetic_linear_targets(&rows, 10, 0.0);
    let config = RegressionConfig::builder()
        .max_iterations(1)
        .build()
        .unwrap();
    let model = train(&rows, &targets, config);
    assert_eq!(model.report().stop_reason, StopReason::MaxIterationsReached);
    assert_eq!(model.report().iterations, 1);
}

#[test]
fn growing_learning_rate_config_is_rejected() {
    let rows: Vec<Vec<f64>> = (1..=8).map(|x| vec![x as f64]).collect();
    let targets: Vec<f64> = (1..=8).map(|x| 3.0 * x as f64 - 1.0).collect();

    let mut json = serde_json::to_value(RegressionConfig::default()).unwrap();
    json["learning_rate"] = serde_json::json!(4.0);
    json["learning_rate_decay"] = serde_json::json!(2.0);
    let config: RegressionConfig = serde_json::from_value(json).unwrap();
    assert_eq!(config.validate(), Err(ConfigError::InvalidDecay(2.0)));

    let err = RegressionModel::train(&rows, &targets, config, true).unwrap_err();
    assert_eq!(err, DatasetError::InvalidConfig(ConfigError::InvalidDecay(2.0)));
    assert!(err.to_string().contains("learning_rate_decay"));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn non_finite_target_is_rejected(#[case] bad: f64) {
    let rows = random_rows(20, 2, 30, 0.0, 1.0);
    let (mut targets, _, _) = synthetic_linear_targets(&rows, 31, 0.0);
    targets[17] = bad;

    let err = RegressionModel::train(&rows, &targets, RegressionConfig::default(), true)
        .unwrap_err();
    assert!(matches!(err, DatasetError::NonFiniteTarget { row: 17, .. }));
}
