mod model_trainer;
mod trajectory;

pub use model_trainer::ModelTrainer;
pub use trajectory::{Snapshot, Trajectory};

use log::debug;

use crate::{Result, arch::Perceptron, dataset::Dataset, optimization::ErrorCorrection};

/// Trains a zero-initialized perceptron on `dataset` with the perceptron learning rule.
///
/// Samples are visited in dataset order on every epoch and the loop always runs the full
/// amount of epochs, whether or not the data ends up separated.
///
/// # Arguments
/// * `dataset` - The labeled input patterns.
/// * `learning_rate` - The step size of the learning rule.
/// * `num_training_epochs` - The amount of passes over the dataset.
///
/// # Returns
/// One snapshot of the weights and bias per epoch, or an error if the learning rate is not a
/// finite positive number.
pub fn train_model(
    dataset: &Dataset,
    learning_rate: f64,
    num_training_epochs: usize,
) -> Result<Trajectory> {
    let optimizer = ErrorCorrection::new(learning_rate)?;
    debug!(learning_rate = optimizer.learning_rate(); "using the error correction rule");
    let model = Perceptron::new(dataset.dim());

    ModelTrainer::new(model, optimizer, num_training_epochs).train(dataset)
}
