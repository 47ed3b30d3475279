use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::datasets::{Dataset, TrainTestSplit};
use crate::error::{PipelineError, Result, SchemaError};
use crate::traits::Partition;
use crate::Float;


pub mod hyperparams;

pub use hyperparams::{SplitParams, SplitValidParams};

/// Number of rows held out for a given test fraction, rounded up.
pub fn n_test_rows(n_rows: usize, test_size: f64) -> usize {
    let n_test = (test_size * n_rows as f64).ceil() as usize;
    n_test.min(n_rows)
}

/// Splits `dataset` into train and test partitions according to `params`.
///
/// Both checked and unchecked hyperparameters are accepted; the latter are
/// validated first.
pub fn split<F: Float, P: Partition<F, PipelineError>>(
    dataset: &Dataset<F>,
    params: &P,
) -> Result<TrainTestSplit<F>> {
    params.partition(dataset)
}

impl<F: Float> Partition<F, PipelineError> for SplitValidParams {
    /// Shuffles the row indices with a generator seeded by `random_state`, then
    /// assigns the first `ceil(test_size * n_rows)` shuffled rows to the test
    /// partition and the remaining rows to the train partition.
    fn partition(&self, dataset: &Dataset<F>) -> Result<TrainTestSplit<F>> {
        for name in self.features().iter().map(String::as_str).chain([self.target()]) {
            if dataset.column_index(name).is_none() {
                return Err(SchemaError::MissingColumn(name.to_string()).into());
            }
        }

        let n_rows = dataset.n_rows();
        let n_test = n_test_rows(n_rows, self.test_size());

        let mut indices: Vec<usize> = (0..n_rows).collect();
        let mut rng = StdRng::seed_from_u64(self.random_state());
        indices.shuffle(&mut rng);
        let (test_indices, train_indices) = indices.split_at(n_test);

        let x_train = dataset.select_features(self.features(), train_indices)?;
        let x_test = dataset.select_features(self.features(), test_indices)?;
        let y_train = dataset.select_target(self.target(), train_indices)?;
        let y_test = dataset.select_target(self.target(), test_indices)?;

        debug!(
            n_train = train_indices.len(),
            n_test = test_indices.len(),
            random_state = self.random_state(),
            "split dataset"
        );

        Ok(TrainTestSplit {
            x_train,
            x_test,
            y_train,
            y_test,
            train_indices: train_indices.to_vec(),
            test_indices: test_indices.to_vec(),
        })
    }
}
