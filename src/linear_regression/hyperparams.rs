use std::marker::PhantomData;

use crate::error::ConfigError;
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of an ordinary least
/// squares model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    fit_intercept: bool,
    marker: PhantomData<F>,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// ||y - Xw - b||^2_2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an ordinary least squares model
impl<F: Float> LinearRegressionParams<F> {
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            fit_intercept: true,
            marker: PhantomData,
        })
    }

    /// Whether to estimate an intercept. When disabled the data is assumed
    /// to be centered and the intercept is fixed at zero.
    ///
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = ConfigError;

    fn check_ref(&self) -> Result<&Self::Checked, ConfigError> {
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, ConfigError> {
        self.check_ref()?;
        Ok(self.0)
    }
}
