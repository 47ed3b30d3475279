use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::param_guard::ParamGuard;

fn default_target() -> String {
    "price".to_string()
}

/// A verified hyperparameter set ready for splitting a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitValidParams {
    features: Vec<String>,
    target: String,
    test_size: f64,
    random_state: u64,
}

/// The serialized form of [`SplitParams`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSplitParams {
    features: Vec<String>,
    #[serde(default = "default_target")]
    target: String,
    test_size: f64,
    random_state: u64,
}

impl SplitValidParams {
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn test_size(&self) -> f64 {
        self.test_size
    }

    pub fn random_state(&self) -> u64 {
        self.random_state
    }
}

/// A hyper-parameter set during construction
///
/// Selects the feature and target columns of a dataset, the fraction of rows
/// held out for testing and the seed of the row shuffle.
///
/// ```ignore
/// let params = SplitParams::new()
///     .features(["sqft", "bedrooms"])
///     .test_size(0.2)
///     .random_state(42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SplitParams(SplitValidParams);

impl<'de> Deserialize<'de> for SplitParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSplitParams::deserialize(deserializer)?;
        Ok(Self(SplitValidParams {
            features: raw.features,
            target: raw.target,
            test_size: raw.test_size,
            random_state: raw.random_state,
        }))
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure the train/test split
impl SplitParams {
    /// Create default split hyper parameters. No feature is selected.
    pub fn new() -> SplitParams {
        Self(SplitValidParams {
            features: Vec::new(),
            target: default_target(),
            test_size: 0.2,
            random_state: 42,
        })
    }

    /// Parses the parameters from a JSON object. Unknown keys are rejected, and
    /// so are missing keys except `target`.
    pub fn from_json(json: &str) -> Result<SplitParams, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Set the feature columns, in the order the model will see them.
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the target column.
    ///
    /// Defaults to `price` if not set.
    pub fn target<S: Into<String>>(mut self, target: S) -> Self {
        self.0.target = target.into();
        self
    }

    /// Set the fraction of rows held out for testing.
    ///
    /// Defaults to `0.2` if not set.
    pub fn test_size(mut self, test_size: f64) -> Self {
        self.0.test_size = test_size;
        self
    }

    /// Set the seed of the row shuffle.
    ///
    /// Defaults to `42` if not set.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.0.random_state = random_state;
        self
    }
}

impl ParamGuard for SplitParams {
    type Checked = SplitValidParams;
    type Error = ConfigError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, ConfigError> {
        let params = &self.0;
        if !(0.0..1.0).contains(&params.test_size) {
            return Err(ConfigError::TestSize(params.test_size));
        }
        if params.features.is_empty() {
            return Err(ConfigError::NoFeatures);
        }
        let mut seen = HashSet::with_capacity(params.features.len());
        for feature in &params.features {
            if *feature == params.target {
                return Err(ConfigError::TargetAsFeature(feature.clone()));
            }
            if !seen.insert(feature.as_str()) {
                return Err(ConfigError::DuplicateFeature(feature.clone()));
            }
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, ConfigError> {
        self.check_ref()?;
        Ok(self.0)
    }
}
