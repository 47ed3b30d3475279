use tracing::{debug, debug_span};

use crate::datasets::{Dataset, TargetVector, TrainTestSplit};
use crate::error::Result;
use crate::evaluator::{Evaluation, EvaluationObserver, Evaluator, LogObserver};
use crate::linear_regression::{LinearRegression, LinearRegressionParams};
use crate::metrics::Metrics;
use crate::split::{split, SplitParams};
use crate::traits::Fit;
use crate::Float;


/// Everything produced by one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<F> {
    pub split: TrainTestSplit<F>,
    pub model: LinearRegression<F>,
    pub predictions: TargetVector<F>,
    pub metrics: Metrics<F>,
}

/// Split, fit and evaluate, in that order.
///
/// Each node consumes the typed output of the previous one:
/// ```ignore
/// dataset -> split_data -> (X_train, y_train) -> train_model -> model
///                       -> (X_test, y_test) -----------------> evaluate_model -> metrics
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<F, O> {
    split: SplitParams,
    regression: LinearRegressionParams<F>,
    evaluator: Evaluator<O>,
}

impl<F: Float> Pipeline<F, LogObserver> {
    /// A pipeline fitting ordinary least squares with an intercept and logging
    /// its metrics.
    pub fn new(split: SplitParams) -> Pipeline<F, LogObserver> {
        Pipeline {
            split,
            regression: LinearRegressionParams::new(),
            evaluator: Evaluator::new(LogObserver),
        }
    }
}

impl<F: Float, O: EvaluationObserver<F>> Pipeline<F, O> {
    /// Set the hyperparameters of the regressor.
    pub fn regression(mut self, regression: LinearRegressionParams<F>) -> Self {
        self.regression = regression;
        self
    }

    /// Set the observer receiving the metrics.
    pub fn observer<O2: EvaluationObserver<F>>(self, observer: O2) -> Pipeline<F, O2> {
        Pipeline {
            split: self.split,
            regression: self.regression,
            evaluator: Evaluator::new(observer),
        }
    }

    pub fn split_params(&self) -> &SplitParams {
        &self.split
    }

    pub fn evaluator(&self) -> &Evaluator<O> {
        &self.evaluator
    }

    /// Runs every node once on `dataset`.
    pub fn run(&mut self, dataset: &Dataset<F>) -> Result<PipelineOutput<F>> {
        let parts = debug_span!("split_data").in_scope(|| split(dataset, &self.split))?;

        let model = debug_span!("train_model").in_scope(|| -> Result<LinearRegression<F>> {
            self.regression.fit(&parts.x_train, &parts.y_train)
        })?;

        let Evaluation {
            predictions,
            metrics,
        } = debug_span!("evaluate_model")
            .in_scope(|| self.evaluator.run(&model, &parts.x_test, &parts.y_test))?;

        debug!(
            r2_score = %metrics.r2_score,
            mae = %metrics.mae,
            max_error = %metrics.max_error,
            "pipeline finished"
        );

        Ok(PipelineOutput {
            split: parts,
            model,
            predictions,
            metrics,
        })
    }
}

/// Runs the pipeline with default regressor hyperparameters, reporting the
/// metrics to `observer`.
pub fn run<F: Float, O: EvaluationObserver<F>>(
    dataset: &Dataset<F>,
    params: &SplitParams,
    observer: O,
) -> Result<PipelineOutput<F>> {
    Pipeline::new(params.clone()).observer(observer).run(dataset)
}
