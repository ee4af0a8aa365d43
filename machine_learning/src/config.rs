use serde::{Deserialize, Serialize};

use crate::{MlErr, Result};

/// Seed used when none is configured. Keeps every run reproducible by default.
pub const DEFAULT_SEED: u64 = 40;

/// Parameters of a training run: how much data to generate and how to train on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerceptronConfig {
    /// Amount of samples generated per class.
    pub class_size: usize,
    /// Step size of the perceptron learning rule.
    pub learning_rate: f64,
    /// Amount of full passes over the dataset.
    pub num_training_epochs: usize,
    /// Seed of the pseudorandom stream the dataset is drawn from.
    pub seed: u64,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            class_size: 100,
            learning_rate: 0.01,
            num_training_epochs: 4,
            seed: DEFAULT_SEED,
        }
    }
}

impl PerceptronConfig {
    /// Checks the configuration before any data is generated.
    ///
    /// # Returns
    /// An error if the learning rate is not a finite positive number.
    pub fn validate(&self) -> Result<()> {
        validate_learning_rate(self.learning_rate)
    }
}

/// Rejects learning rates that would make the update rule meaningless.
pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(MlErr::InvalidLearningRate { got: learning_rate });
    }

    Ok(())
}
