use super::impl_datasets::check_unique_columns;
use super::{FeatureMatrix, TargetVector};
use crate::error::{Result, SchemaError};
use crate::Float;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

impl<F: Float> FeatureMatrix<F> {
    /// This method instantiates a feature matrix from its column names and
    /// records.
    pub fn new<S: Into<String>>(columns: Vec<S>, records: Array2<F>) -> Result<FeatureMatrix<F>> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != records.ncols() {
            return Err(SchemaError::ColumnCount {
                expected: records.ncols(),
                found: columns.len(),
            }
            .into());
        }
        check_unique_columns(&columns)?;
        Ok(FeatureMatrix { columns, records })
    }

    pub fn n_samples(&self) -> usize {
        self.records.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.records.ncols()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> ArrayView2<F> {
        self.records.view()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

impl<F: Float> TargetVector<F> {
    pub fn new<S: Into<String>>(name: S, values: Array1<F>) -> TargetVector<F> {
        TargetVector {
            name: name.into(),
            values,
        }
    }

    pub fn n_samples(&self) -> usize {
        self.values.len()
    }

    /// This method is a getter for the name of the target column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This method is a getter for the target values.
    pub fn values(&self) -> ArrayView1<F> {
        self.values.view()
    }

    pub fn into_values(self) -> Array1<F> {
        self.values
    }
}
