use ndarray::{Array1, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datasets::{FeatureMatrix, TargetVector};
use crate::error::{DataError, PipelineError, Result, SchemaError};
use crate::helpers::cholesky::solve_by_cholesky;
use crate::traits::{Fit, Predict};
use crate::Float;


pub mod hyperparams;

pub use hyperparams::{LinearRegressionParams, LinearRegressionValidParams};

/// Ordinary least squares
///
/// A fitted affine model `y = X w + b`. The coefficients follow the order of
/// the feature columns it was trained on. The model is immutable once fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression<F> {
    coefficients: Array1<F>,
    intercept: F,
    features: Vec<String>,
    target: String,
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates ordinary least squares with default
    /// parameters.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// The feature columns seen during fitting.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The name of the target column seen during fitting.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Maps each trained feature to its column in `x`.
    fn feature_indices(&self, x: &FeatureMatrix<F>) -> Result<Vec<usize>> {
        let indices = self
            .features
            .iter()
            .map(|name| {
                x.column_index(name)
                    .ok_or_else(|| SchemaError::MissingColumn(name.clone()))
            })
            .collect::<std::result::Result<Vec<usize>, SchemaError>>()?;

        if x.n_features() > indices.len() {
            if let Some(extra) = x.columns().iter().find(|c| !self.features.contains(c)) {
                return Err(SchemaError::UnexpectedColumn(extra.clone()).into());
            }
        }
        Ok(indices)
    }
}

/// Fits ordinary least squares with default parameters.
pub fn train<F: Float>(x: &FeatureMatrix<F>, y: &TargetVector<F>) -> Result<LinearRegression<F>> {
    LinearRegression::<F>::params().fit(x, y)
}

/// Applies a fitted model to a feature matrix.
pub fn predict<F: Float, M: Predict<F>>(model: &M, x: &FeatureMatrix<F>) -> Result<TargetVector<F>> {
    model.predict(x)
}

impl<F: Float> Fit<F, PipelineError> for LinearRegressionValidParams<F> {
    type Object = LinearRegression<F>;

    /// Solves the normal equations of the centered problem through a Cholesky
    /// factorization, then recovers the intercept from the column means.
    fn fit(&self, x: &FeatureMatrix<F>, y: &TargetVector<F>) -> Result<Self::Object> {
        let n_samples = x.n_samples();
        if y.n_samples() != n_samples {
            return Err(DataError::ShapeMismatch {
                expected: n_samples,
                found: y.n_samples(),
            }
            .into());
        }
        if x.n_features() == 0 {
            return Err(DataError::NoFeatures.into());
        }
        if n_samples == 0 {
            return Err(DataError::EmptyInput.into());
        }

        let X = x.records();
        let y_values = y.values();

        let (X_offset, y_offset) = if self.fit_intercept() {
            let X_offset = X.mean_axis(Axis(0)).ok_or(DataError::EmptyInput)?;
            let y_offset = y_values.mean().ok_or(DataError::EmptyInput)?;
            (X_offset, y_offset)
        } else {
            (Array1::zeros(x.n_features()), F::zero())
        };

        let Xc = &X - &X_offset;
        let yc = &y_values - y_offset;

        let gram = Xc.t().dot(&Xc);
        let Xty = Xc.t().dot(&yc);
        let coefficients = solve_by_cholesky(gram.view(), Xty.view())?;
        let intercept = y_offset - X_offset.dot(&coefficients);

        debug!(
            n_samples,
            coefficients = ?coefficients,
            intercept = %intercept,
            "fitted linear regression"
        );

        Ok(LinearRegression {
            coefficients,
            intercept,
            features: x.columns().to_vec(),
            target: y.name().to_string(),
        })
    }
}

impl<F: Float> Predict<F> for LinearRegression<F> {
    /// Computes `X w + b` row by row. Columns of `x` are matched to the
    /// trained features by name.
    fn predict(&self, x: &FeatureMatrix<F>) -> Result<TargetVector<F>> {
        let indices = self.feature_indices(x)?;
        let X = x.records();
        let values = Array1::from_iter(X.rows().into_iter().map(|row| {
            indices
                .iter()
                .zip(self.coefficients.iter())
                .map(|(&j, &w)| row[j] * w)
                .sum::<F>()
                + self.intercept
        }));
        Ok(TargetVector::new(self.target.clone(), values))
    }
}
