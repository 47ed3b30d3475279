use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use super::*;
use crate::error::{DataError, PipelineError};

#[test]
fn test_perfect_predictions() {
    let y = array![3.2, -1.5, 0.4, 12.9];
    assert_eq!(r2_score(y.view(), y.view()).unwrap(), 1.);
    assert_eq!(mae(y.view(), y.view()).unwrap(), 0.);
    assert_eq!(max_error(y.view(), y.view()).unwrap(), 0.);
}

#[test]
fn test_known_values() {
    // Same values as the scikit-learn documentation examples.
    let y_true = array![3., -0.5, 2., 7.];
    let y_pred = array![2.5, 0.0, 2., 8.];
    assert_abs_diff_eq!(r2_score(y_true.view(), y_pred.view()).unwrap(), 0.948_608_137_044_967_9, epsilon = 1e-12);
    assert_abs_diff_eq!(mae(y_true.view(), y_pred.view()).unwrap(), 0.5, epsilon = 1e-12);

    let y_true = array![3., 2., 7., 1.];
    let y_pred = array![4., 2., 7., 1.];
    assert_eq!(max_error(y_true.view(), y_pred.view()).unwrap(), 1.);
}

#[test]
fn test_r2_can_be_negative() {
    let y_true = array![1., 2., 3.];
    let y_pred = array![3., 2., 1.];
    // SSR = 8, SST = 2
    assert_abs_diff_eq!(r2_score(y_true.view(), y_pred.view()).unwrap(), -3., epsilon = 1e-12);
}

#[test]
fn test_r2_constant_target() {
    let y_true = array![5., 5., 5.];
    assert_eq!(r2_score(y_true.view(), y_true.view()).unwrap(), 1.);

    let y_pred = array![5., 5., 5.5];
    assert_eq!(
        r2_score(y_true.view(), y_pred.view()),
        Err(PipelineError::Data(DataError::ConstantTarget))
    );

    // A single sample has no variance either.
    let one = array![2.];
    assert_eq!(r2_score(one.view(), one.view()).unwrap(), 1.);
}

#[test]
fn test_length_mismatch() {
    let y_true = array![1., 2., 3.];
    let y_pred = array![1., 2.];
    let expected = Err(PipelineError::Data(DataError::LengthMismatch {
        expected: 3,
        found: 2,
    }));
    for kind in MetricKind::ALL {
        assert_eq!(kind.compute(y_true.view(), y_pred.view()), expected);
    }
}

#[test]
fn test_empty_input() {
    let empty = Array1::<f64>::zeros(0);
    for kind in MetricKind::ALL {
        assert_eq!(
            kind.compute(empty.view(), empty.view()),
            Err(PipelineError::Data(DataError::EmptyInput))
        );
    }
}

#[test]
fn test_nan_predictions_propagate() {
    let y_true = array![1., 2., 3.];
    let y_pred = array![1., f64::NAN, 10.];
    assert!(max_error(y_true.view(), y_pred.view()).unwrap().is_nan());
    assert!(mae(y_true.view(), y_pred.view()).unwrap().is_nan());
    assert!(r2_score(y_true.view(), y_pred.view()).unwrap().is_nan());
}

#[test]
fn test_f32_metrics() {
    let y_true = array![1f32, 2., 4.];
    let y_pred = array![1.5f32, 2., 3.];
    assert_abs_diff_eq!(mae(y_true.view(), y_pred.view()).unwrap(), 0.5, epsilon = 1e-6);
    assert_eq!(max_error(y_true.view(), y_pred.view()).unwrap(), 1.);
}

#[test]
fn test_metrics_mapping() {
    let metrics = Metrics {
        r2_score: 0.9,
        mae: 1.5,
        max_error: 4.,
    };
    let names: Vec<&str> = metrics.iter().map(|(kind, _)| kind.name()).collect();
    assert_eq!(names, ["r2_score", "mae", "max_error"]);

    let map = metrics.to_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map["mae"], 1.5);

    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"r2_score": 0.9, "mae": 1.5, "max_error": 4.0})
    );
    assert_eq!(MetricKind::MaxError.to_string(), "max_error");
}
