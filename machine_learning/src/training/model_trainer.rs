use log::{debug, info};

use super::{Snapshot, Trajectory};
use crate::{
    MlErr, Result,
    arch::{Model, Perceptron},
    dataset::Dataset,
    optimization::Optimizer,
};

/// Runs the epoch loop of a single perceptron. The model is owned by the trainer for the
/// whole run and is only observable through the returned `Trajectory`.
pub struct ModelTrainer<O: Optimizer> {
    model: Perceptron,
    optimizer: O,
    epochs: usize,
}

impl<O: Optimizer> ModelTrainer<O> {
    /// Returns a new `ModelTrainer`.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - The rule used to update the model after each sample.
    /// * `epochs` - The amount of passes over the dataset.
    pub fn new(model: Perceptron, optimizer: O, epochs: usize) -> Self {
        Self {
            model,
            optimizer,
            epochs,
        }
    }

    /// Performs `epochs` epochs of training, snapshotting the parameters after each one.
    ///
    /// # Returns
    /// The trajectory of the parameters, or an error if the dataset's inputs don't have the
    /// dimension the model expects.
    pub fn train(mut self, dataset: &Dataset) -> Result<Trajectory> {
        if dataset.dim() != self.model.input_dim() {
            return Err(MlErr::SizeMismatch {
                a: "model",
                b: "dataset",
                got: dataset.dim(),
                expected: self.model.input_dim(),
            });
        }

        debug!(params = self.model.size(), samples = dataset.len(); "training started");
        let mut snapshots = Vec::with_capacity(self.epochs);

        for epoch in 0..self.epochs {
            let errors = self.run_epoch(dataset);

            debug!(epoch = epoch + 1, errors = errors, bias = self.model.bias(); "epoch finished");
            snapshots.push(Snapshot::new(
                self.model.weights().to_owned(),
                self.model.bias(),
                errors,
            ));
        }

        info!(epochs = self.epochs, samples = dataset.len(); "training finished");
        Ok(Trajectory::new(snapshots))
    }

    /// Presents every sample once, in dataset order.
    ///
    /// # Returns
    /// The amount of samples that produced a non-zero error.
    fn run_epoch(&mut self, dataset: &Dataset) -> usize {
        let mut errors = 0;

        for (x, target) in dataset.samples() {
            let error = self.model.error(x, target);
            if error != 0. {
                errors += 1;
            }

            self.optimizer.update_params(self.model.params_mut(), x, error);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{ArrayView1, ArrayViewMut1, array};

    use super::*;

    /// Records every error it is handed without touching the parameters.
    #[derive(Default)]
    struct Recorder {
        errors: Vec<f64>,
    }

    impl Optimizer for &mut Recorder {
        fn update_params(&mut self, _: ArrayViewMut1<f64>, _: ArrayView1<f64>, error: f64) {
            self.errors.push(error);
        }
    }

    #[test]
    fn updates_every_sample_including_zero_errors() {
        let dataset =
            Dataset::new(array![[1., 1.], [2., 0.], [0., 3.]], array![1., -1., 1.]).unwrap();
        let model = Perceptron::from_parts(array![1., 0.].view(), 0.);

        let mut recorder = Recorder::default();
        let trajectory = ModelTrainer::new(model, &mut recorder, 2)
            .train(&dataset)
            .unwrap();

        // responses: 1, 1, 0 -> errors 0, -2, 1, identical on both epochs
        assert_eq!(recorder.errors, [0., -2., 1., 0., -2., 1.]);
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.snapshots()[0].errors(), 2);
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let dataset = Dataset::new(array![[1., 1., 1.]], array![1.]).unwrap();
        let mut recorder = Recorder::default();

        let err = ModelTrainer::new(Perceptron::new(2), &mut recorder, 1)
            .train(&dataset)
            .unwrap_err();

        assert!(matches!(err, MlErr::SizeMismatch { got: 3, expected: 2, .. }));
        assert!(recorder.errors.is_empty());
    }
}
