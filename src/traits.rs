use crate::datasets::{Dataset, FeatureMatrix, TargetVector, TrainTestSplit};
use crate::Float;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a feature matrix and
/// its targets. More formally, the model estimates coefficients that minimize
/// an empirical risk (loss function).
pub trait Fit<F: Float, E: std::error::Error> {
    type Object;

    fn fit(&self, x: &FeatureMatrix<F>, y: &TargetVector<F>) -> Result<Self::Object, E>;
}

/// Partition trait
///
/// Splits a labeled dataset into disjoint train and test partitions.
pub trait Partition<F: Float, E: std::error::Error> {
    fn partition(&self, dataset: &Dataset<F>) -> Result<TrainTestSplit<F>, E>;
}

/// Predict trait
///
/// A fitted model maps a feature matrix to predicted targets.
pub trait Predict<F: Float> {
    fn predict(&self, x: &FeatureMatrix<F>) -> crate::Result<TargetVector<F>>;
}
