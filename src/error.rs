use thiserror::Error;

/// Simplified `Result` using [`PipelineError`](crate::PipelineError) as error type
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Invalid hyperparameters supplied to a pipeline node
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid test_size {0}, expected a fraction in [0, 1)")]
    TestSize(f64),
    #[error("at least one feature column must be selected")]
    NoFeatures,
    #[error("feature {0} is selected more than once")]
    DuplicateFeature(String),
    #[error("target column {0} cannot also be a feature")]
    TargetAsFeature(String),
    #[error("could not parse parameters: {0}")]
    Parse(String),
}

/// Missing or mismatched columns
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("column {0} is missing")]
    MissingColumn(String),
    #[error("column {0} was not seen during fitting")]
    UnexpectedColumn(String),
    #[error("column {0} is declared more than once")]
    DuplicateColumn(String),
    #[error("expected {expected} column names, found {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Shape mismatches and degenerate numerical cases
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("input is empty")]
    EmptyInput,
    #[error("expected {expected} samples, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("targets and predictions differ in length: {expected} != {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("row {row} is out of bounds for {n_rows} rows")]
    RowOutOfBounds { row: usize, n_rows: usize },
    #[error("design matrix has no feature")]
    NoFeatures,
    #[error("design matrix is rank deficient")]
    RankDeficient,
    #[error("targets are constant and predictions do not match them")]
    ConstantTarget,
    #[error("could not parse a number at row {row}, column {column}")]
    Parse { row: usize, column: String },
    #[error("csv: {0}")]
    Csv(String),
}

/// Error variants from hyperparameter checking, dataset handling, model
/// estimation and evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Data(#[from] DataError),
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Data(DataError::Csv(err.to_string()))
    }
}

impl From<ndarray_stats::errors::MultiInputError> for PipelineError {
    fn from(err: ndarray_stats::errors::MultiInputError) -> Self {
        use ndarray_stats::errors::MultiInputError;
        match err {
            MultiInputError::EmptyInput => PipelineError::Data(DataError::EmptyInput),
            MultiInputError::ShapeMismatch(shapes) => {
                PipelineError::Data(DataError::LengthMismatch {
                    expected: shapes.first_shape.iter().product(),
                    found: shapes.second_shape.iter().product(),
                })
            }
        }
    }
}
