use ndarray::{array, Array2};

use super::*;
use crate::error::{DataError, PipelineError, SchemaError};

#[test]
fn test_dataset_creation() {
    let dataset = Dataset::new(
        vec!["sqft", "bedrooms", "price"],
        array![[1200., 2., 120100.], [800., 1., 80050.]],
    )
    .unwrap();
    assert_eq!(dataset.n_rows(), 2);
    assert_eq!(dataset.n_columns(), 3);
    assert_eq!(dataset.column_index("price"), Some(2));
    assert_eq!(dataset.column("bedrooms").unwrap(), array![2., 1.]);
}

#[test]
fn test_dataset_rejects_bad_columns() {
    let records = Array2::<f64>::zeros((2, 2));
    assert_eq!(
        Dataset::new(vec!["a"], records.clone()),
        Err(PipelineError::Schema(SchemaError::ColumnCount {
            expected: 2,
            found: 1
        }))
    );
    assert_eq!(
        Dataset::new(vec!["a", "a"], records),
        Err(PipelineError::Schema(SchemaError::DuplicateColumn(
            "a".to_string()
        )))
    );
}

#[test]
fn test_select_features_and_target() {
    let dataset = Dataset::new(
        vec!["a", "b", "c"],
        array![[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]],
    )
    .unwrap();
    let features = vec!["c".to_string(), "a".to_string()];
    let x = dataset.select_features(&features, &[2, 0]).unwrap();
    assert_eq!(x.columns(), &["c", "a"]);
    assert_eq!(x.records(), array![[9., 7.], [3., 1.]]);

    let y = dataset.select_target("b", &[2, 0]).unwrap();
    assert_eq!(y.name(), "b");
    assert_eq!(y.values(), array![8., 2.]);

    let empty = dataset.select_features(&features, &[]).unwrap();
    assert_eq!(empty.n_samples(), 0);
    assert_eq!(empty.n_features(), 2);

    assert_eq!(
        dataset.select_target("d", &[0]),
        Err(PipelineError::Schema(SchemaError::MissingColumn(
            "d".to_string()
        )))
    );
}

#[test]
fn test_select_rejects_out_of_bounds_rows() {
    let dataset = Dataset::new(vec!["a", "b"], array![[1., 2.], [3., 4.]]).unwrap();
    let features = vec!["a".to_string()];
    let err = PipelineError::Data(DataError::RowOutOfBounds { row: 2, n_rows: 2 });
    assert_eq!(dataset.select_features(&features, &[0, 2]), Err(err.clone()));
    assert_eq!(dataset.select_target("b", &[2]), Err(err));
}

#[test]
fn test_from_csv_reader() {
    let data = "sqft, bedrooms, price\n1000, 2, 100100\n1500, 3, 150150.5\n";
    let dataset = Dataset::<f64>::from_csv_reader(data.as_bytes()).unwrap();
    assert_eq!(dataset.columns(), &["sqft", "bedrooms", "price"]);
    assert_eq!(
        dataset.records(),
        array![[1000., 2., 100100.], [1500., 3., 150150.5]]
    );
}

#[test]
fn test_from_csv_reader_rejects_non_numeric_fields() {
    let data = "sqft,price\n1000,100000\nlarge,150000\n";
    assert_eq!(
        Dataset::<f64>::from_csv_reader(data.as_bytes()),
        Err(PipelineError::Data(DataError::Parse {
            row: 1,
            column: "sqft".to_string()
        }))
    );
}

#[test]
fn test_from_csv_reader_rejects_ragged_rows() {
    let data = "sqft,price\n1000,100000\n1500\n";
    match Dataset::<f64>::from_csv_reader(data.as_bytes()) {
        Err(PipelineError::Data(DataError::Csv(_))) => println!("Good"),
        other => panic!("Should return a csv error, got {:?}", other),
    }
}

#[test]
fn test_feature_matrix_checks_columns() {
    assert!(FeatureMatrix::new(vec!["a", "b"], Array2::<f64>::zeros((3, 2))).is_ok());
    assert_eq!(
        FeatureMatrix::new(vec!["a"], Array2::<f64>::zeros((3, 2))),
        Err(PipelineError::Schema(SchemaError::ColumnCount {
            expected: 2,
            found: 1
        }))
    );
}
