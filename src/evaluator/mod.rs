use std::fmt;

use tracing::info;

use crate::datasets::{FeatureMatrix, TargetVector};
use crate::error::Result;
use crate::metrics::{mae, max_error, r2_score, MetricKind, Metrics};
use crate::traits::Predict;
use crate::Float;

#[cfg(test)]
mod tests;

/// A single metric computed during an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricEvent<F> {
    pub kind: MetricKind,
    pub value: F,
}

impl<F: Float> fmt::Display for MetricEvent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MetricKind::R2Score => write!(
                f,
                "Model has a coefficient R^2 of {:.3} on test data.",
                self.value
            ),
            MetricKind::Mae => write!(
                f,
                "Model has a Mean Absolute Error (MAE) of {:.3}.",
                self.value
            ),
            MetricKind::MaxError => write!(f, "Model has a Maximum Error of {:.3}.", self.value),
        }
    }
}

/// Receives the metrics of successful evaluation runs.
pub trait EvaluationObserver<F> {
    fn on_metric(&mut self, event: &MetricEvent<F>);
}

/// Reports every metric as an informational `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<F: Float> EvaluationObserver<F> for LogObserver {
    fn on_metric(&mut self, event: &MetricEvent<F>) {
        info!(metric = event.kind.name(), "{}", event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<F> EvaluationObserver<F> for NoopObserver {
    fn on_metric(&mut self, _event: &MetricEvent<F>) {}
}

impl<F, T: FnMut(&MetricEvent<F>)> EvaluationObserver<F> for T {
    fn on_metric(&mut self, event: &MetricEvent<F>) {
        self(event)
    }
}

/// Predictions on held-out data together with their metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<F> {
    pub predictions: TargetVector<F>,
    pub metrics: Metrics<F>,
}

/// Scores a fitted model on held-out data and reports the scores to an
/// observer.
#[derive(Debug, Clone, Default)]
pub struct Evaluator<O> {
    observer: O,
}

impl<O> Evaluator<O> {
    pub fn new(observer: O) -> Evaluator<O> {
        Evaluator { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Predicts once, then computes every metric on the same predictions.
    ///
    /// The observer is notified only once all metrics are computed, so a
    /// failed run emits nothing.
    pub fn run<F, M>(
        &mut self,
        model: &M,
        x_test: &FeatureMatrix<F>,
        y_test: &TargetVector<F>,
    ) -> Result<Evaluation<F>>
    where
        F: Float,
        M: Predict<F>,
        O: EvaluationObserver<F>,
    {
        let predictions = model.predict(x_test)?;
        let (y_true, y_pred) = (y_test.values(), predictions.values());

        let metrics = Metrics {
            r2_score: r2_score(y_true, y_pred)?,
            mae: mae(y_true, y_pred)?,
            max_error: max_error(y_true, y_pred)?,
        };

        for (kind, value) in metrics.iter() {
            self.observer.on_metric(&MetricEvent { kind, value });
        }

        Ok(Evaluation {
            predictions,
            metrics,
        })
    }

    /// Same as [`Evaluator::run`], keeping only the metrics.
    pub fn evaluate<F, M>(
        &mut self,
        model: &M,
        x_test: &FeatureMatrix<F>,
        y_test: &TargetVector<F>,
    ) -> Result<Metrics<F>>
    where
        F: Float,
        M: Predict<F>,
        O: EvaluationObserver<F>,
    {
        self.run(model, x_test, y_test)
            .map(|evaluation| evaluation.metrics)
    }
}

/// Evaluates a model and logs its metrics through [`LogObserver`].
pub fn evaluate<F: Float, M: Predict<F>>(
    model: &M,
    x_test: &FeatureMatrix<F>,
    y_test: &TargetVector<F>,
) -> Result<Metrics<F>> {
    Evaluator::new(LogObserver).evaluate(model, x_test, y_test)
}
