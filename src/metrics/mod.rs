use std::collections::BTreeMap;
use std::fmt;

use ndarray::ArrayView1;
use ndarray_stats::DeviationExt;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// The regression metrics reported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    R2Score,
    Mae,
    MaxError,
}

impl MetricKind {
    /// Every metric, in reporting order.
    pub const ALL: [MetricKind; 3] = [MetricKind::R2Score, MetricKind::Mae, MetricKind::MaxError];

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::R2Score => "r2_score",
            MetricKind::Mae => "mae",
            MetricKind::MaxError => "max_error",
        }
    }

    /// Computes this metric between observed and predicted targets.
    pub fn compute<'a, F: Float>(&self, y_true: ArrayView1<'a, F>, y_pred: ArrayView1<'a, F>) -> Result<F> {
        match self {
            MetricKind::R2Score => r2_score(y_true, y_pred),
            MetricKind::Mae => mae(y_true, y_pred),
            MetricKind::MaxError => max_error(y_true, y_pred),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of one evaluation run. Always holds exactly one value per
/// [`MetricKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics<F> {
    pub r2_score: F,
    pub mae: F,
    pub max_error: F,
}

impl<F: Float> Metrics<F> {
    pub fn get(&self, kind: MetricKind) -> F {
        match kind {
            MetricKind::R2Score => self.r2_score,
            MetricKind::Mae => self.mae,
            MetricKind::MaxError => self.max_error,
        }
    }

    /// Iterates over `(metric, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, F)> + '_ {
        MetricKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// The metrics keyed by name.
    pub fn to_map(&self) -> BTreeMap<&'static str, F> {
        self.iter().map(|(kind, value)| (kind.name(), value)).collect()
    }
}

fn check_inputs<F>(y_true: &ArrayView1<F>, y_pred: &ArrayView1<F>) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(DataError::LengthMismatch {
            expected: y_true.len(),
            found: y_pred.len(),
        }
        .into());
    }
    if y_true.is_empty() {
        return Err(DataError::EmptyInput.into());
    }
    Ok(())
}

/// Coefficient of determination `1 - SSR / SST`, where `SST` is the sum of
/// squares of `y_true` about its mean.
///
/// Constant targets make `SST` zero: the score is then `1` when predictions
/// are exact and [`DataError::ConstantTarget`] otherwise.
pub fn r2_score<'a, F: Float>(y_true: ArrayView1<'a, F>, y_pred: ArrayView1<'a, F>) -> Result<F> {
    check_inputs(&y_true, &y_pred)?;
    let ssr = y_true.sq_l2_dist(&y_pred)?;
    let mean = y_true.mean().ok_or(DataError::EmptyInput)?;
    let sst = y_true.fold(F::zero(), |acc, &y| acc + (y - mean) * (y - mean));

    if sst == F::zero() {
        return if ssr == F::zero() {
            Ok(F::one())
        } else {
            Err(DataError::ConstantTarget.into())
        };
    }
    Ok(F::one() - ssr / sst)
}

/// Mean absolute error.
pub fn mae<'a, F: Float>(y_true: ArrayView1<'a, F>, y_pred: ArrayView1<'a, F>) -> Result<F> {
    check_inputs(&y_true, &y_pred)?;
    let err = y_true.mean_abs_err(&y_pred)?;
    Ok(F::cast(err))
}

/// Largest absolute residual.
///
/// A NaN in either input makes the result NaN, as it does for [`mae`] and
/// [`r2_score`].
pub fn max_error<'a, F: Float>(y_true: ArrayView1<'a, F>, y_pred: ArrayView1<'a, F>) -> Result<F> {
    check_inputs(&y_true, &y_pred)?;
    // linf_dist skips NaN residuals
    if y_true.iter().chain(y_pred.iter()).any(|v| v.is_nan()) {
        return Ok(F::nan());
    }
    Ok(y_true.linf_dist(&y_pred)?)
}
