use super::{Dataset, FeatureMatrix, TargetVector};
use crate::error::{DataError, Result, SchemaError};
use crate::Float;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Checks that no column name is declared twice.
pub(crate) fn check_unique_columns(columns: &[String]) -> std::result::Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(SchemaError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}

/// This implementation block provides methods for the creation of datasets
/// and the extraction of feature and target subsets.
impl<F: Float> Dataset<F> {
    /// This method instantiates a new dataset from column names and a record
    /// matrix whose columns follow the order of `columns`.
    pub fn new<S: Into<String>>(columns: Vec<S>, records: Array2<F>) -> Result<Dataset<F>> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != records.ncols() {
            return Err(SchemaError::ColumnCount {
                expected: records.ncols(),
                found: columns.len(),
            }
            .into());
        }
        check_unique_columns(&columns)?;
        Ok(Dataset { columns, records })
    }

    /// Reads a dataset from CSV data with a header row. Every field must parse
    /// as a floating point number.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Dataset<F>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut values = Vec::new();
        let mut n_rows = 0;
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (field, column) in record.iter().zip(&columns) {
                let value = field
                    .parse::<f64>()
                    .ok()
                    .and_then(F::from_f64)
                    .ok_or_else(|| DataError::Parse {
                        row,
                        column: column.clone(),
                    })?;
                values.push(value);
            }
            n_rows += 1;
        }

        let records = Array2::from_shape_vec((n_rows, columns.len()), values).map_err(|_| {
            DataError::ShapeMismatch {
                expected: n_rows * columns.len(),
                found: n_rows,
            }
        })?;
        Dataset::new(columns, records)
    }

    /// Reads a dataset from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Dataset<F>> {
        let file = File::open(path).map_err(|err| DataError::Csv(err.to_string()))?;
        Dataset::from_csv_reader(file)
    }

    pub fn n_rows(&self) -> usize {
        self.records.nrows()
    }

    pub fn n_columns(&self) -> usize {
        self.records.ncols()
    }

    /// This method is a getter for the column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// This method is a getter for the record matrix.
    pub fn records(&self) -> ArrayView2<F> {
        self.records.view()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the values of a single column.
    pub fn column(&self, name: &str) -> Result<ArrayView1<F>> {
        let j = self
            .column_index(name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))?;
        Ok(self.records.column(j))
    }

    fn check_rows(&self, rows: &[usize]) -> Result<()> {
        let n_rows = self.n_rows();
        match rows.iter().find(|&&row| row >= n_rows) {
            Some(&row) => Err(DataError::RowOutOfBounds { row, n_rows }.into()),
            None => Ok(()),
        }
    }

    /// Restricts the dataset to the given rows and feature columns, keeping
    /// the order of both.
    pub fn select_features(&self, features: &[String], rows: &[usize]) -> Result<FeatureMatrix<F>> {
        self.check_rows(rows)?;
        let indices = features
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| SchemaError::MissingColumn(name.clone()))
            })
            .collect::<std::result::Result<Vec<usize>, SchemaError>>()?;
        let records = Array2::from_shape_fn((rows.len(), indices.len()), |(i, j)| {
            self.records[[rows[i], indices[j]]]
        });
        FeatureMatrix::new(features.to_vec(), records)
    }

    /// Restricts the target column to the given rows.
    pub fn select_target(&self, target: &str, rows: &[usize]) -> Result<TargetVector<F>> {
        let column = self.column(target)?;
        self.check_rows(rows)?;
        let values = rows.iter().map(|&i| column[i]).collect::<Array1<F>>();
        Ok(TargetVector::new(target, values))
    }
}
