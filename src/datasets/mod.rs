extern crate ndarray;

use ndarray::{Array1, Array2};

#[cfg(test)]
mod tests;

mod impl_datasets;
mod impl_targets;

/// An immutable table of observations with named columns.
///
/// Each row is an observation and each column a variable. Every row holds a
/// value for every column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    columns: Vec<String>,
    records: Array2<F>,
}

/// The feature columns of a subset of rows of a [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix<F> {
    columns: Vec<String>,
    records: Array2<F>,
}

/// The target column of a subset of rows of a [`Dataset`], or the
/// predictions of a model for that column.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetVector<F> {
    name: String,
    values: Array1<F>,
}

/// The four outputs of a train/test split, along with the row indices of the
/// original dataset that landed in each partition.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<F> {
    pub x_train: FeatureMatrix<F>,
    pub x_test: FeatureMatrix<F>,
    pub y_train: TargetVector<F>,
    pub y_test: TargetVector<F>,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}
