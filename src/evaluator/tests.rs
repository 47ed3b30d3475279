use ndarray::{array, Array2};

use super::*;
use crate::datasets::FeatureMatrix;
use crate::error::{DataError, PipelineError, SchemaError};
use crate::linear_regression::train;

fn fitted() -> (crate::linear_regression::LinearRegression<f64>, FeatureMatrix<f64>) {
    let x = FeatureMatrix::new(vec!["a"], array![[0.], [1.], [2.], [3.]]).unwrap();
    let y = TargetVector::new("y", array![1., 3., 5., 7.]);
    let model = train(&x, &y).unwrap();
    (model, x)
}

#[test]
fn test_evaluate_reports_all_metrics_in_order() {
    let (model, _) = fitted();
    let x_test = FeatureMatrix::new(vec!["a"], array![[4.], [5.], [6.]]).unwrap();
    let y_test = TargetVector::new("y", array![9., 12., 13.]);

    let mut events = Vec::new();
    let metrics = Evaluator::new(|event: &MetricEvent<f64>| events.push(*event))
        .evaluate(&model, &x_test, &y_test)
        .unwrap();

    // Predictions are 9, 11, 13.
    assert!((metrics.mae - 1. / 3.).abs() < 1e-9);
    assert!((metrics.max_error - 1.).abs() < 1e-9);
    assert!((metrics.r2_score - (1. - 3. / 26.)).abs() < 1e-9);

    let kinds: Vec<MetricKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, MetricKind::ALL);
    for event in &events {
        assert_eq!(event.value, metrics.get(event.kind));
    }
}

#[test]
fn test_run_returns_predictions() {
    let (model, x) = fitted();
    let y = TargetVector::new("y", array![1., 3., 5., 7.]);
    let evaluation = Evaluator::new(NoopObserver).run(&model, &x, &y).unwrap();
    assert_eq!(evaluation.predictions.n_samples(), 4);
    assert!((evaluation.metrics.r2_score - 1.).abs() < 1e-12);
}

#[test]
fn test_empty_test_set_fails_without_events() {
    let (model, _) = fitted();
    let x_test = FeatureMatrix::new(vec!["a"], Array2::zeros((0, 1))).unwrap();
    let y_test = TargetVector::new("y", ndarray::Array1::zeros(0));

    let mut count = 0;
    let result = Evaluator::new(|_: &MetricEvent<f64>| count += 1).evaluate(&model, &x_test, &y_test);
    assert_eq!(result, Err(PipelineError::Data(DataError::EmptyInput)));
    assert_eq!(count, 0);
}

#[test]
fn test_failing_metric_fails_the_whole_run() {
    let (model, _) = fitted();
    // Constant targets with inexact predictions make the R^2 undefined.
    let x_test = FeatureMatrix::new(vec!["a"], array![[0.], [1.]]).unwrap();
    let y_test = TargetVector::new("y", array![2., 2.]);

    let mut count = 0;
    let result = Evaluator::new(|_: &MetricEvent<f64>| count += 1).evaluate(&model, &x_test, &y_test);
    assert_eq!(result, Err(PipelineError::Data(DataError::ConstantTarget)));
    assert_eq!(count, 0);
}

#[test]
fn test_schema_mismatch() {
    let (model, _) = fitted();
    let x_test = FeatureMatrix::new(vec!["b"], array![[1.]]).unwrap();
    let y_test = TargetVector::new("y", array![1.]);
    assert_eq!(
        evaluate(&model, &x_test, &y_test),
        Err(PipelineError::Schema(SchemaError::MissingColumn(
            "a".to_string()
        )))
    );
}

#[test]
fn test_length_mismatch() {
    let (model, x) = fitted();
    let y_test = TargetVector::new("y", array![1., 3.]);
    assert_eq!(
        Evaluator::new(NoopObserver).evaluate(&model, &x, &y_test),
        Err(PipelineError::Data(DataError::LengthMismatch {
            expected: 2,
            found: 4
        }))
    );
}

#[test]
fn test_log_lines() {
    let event = MetricEvent {
        kind: MetricKind::R2Score,
        value: 0.987654,
    };
    assert_eq!(
        event.to_string(),
        "Model has a coefficient R^2 of 0.988 on test data."
    );
    let event = MetricEvent {
        kind: MetricKind::Mae,
        value: 1234.5,
    };
    assert_eq!(
        event.to_string(),
        "Model has a Mean Absolute Error (MAE) of 1234.500."
    );
    let event = MetricEvent {
        kind: MetricKind::MaxError,
        value: 2.0,
    };
    assert_eq!(event.to_string(), "Model has a Maximum Error of 2.000.");
}
