use ndarray::{Array1, ArrayView1};

use crate::arch::Perceptron;

/// The parameters of the model at the end of an epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    weights: Array1<f64>,
    bias: f64,
    errors: usize,
}

impl Snapshot {
    pub(crate) fn new(weights: Array1<f64>, bias: f64, errors: usize) -> Self {
        Self {
            weights,
            bias,
            errors,
        }
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The amount of samples that produced a non-zero error during the epoch.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Rebuilds a model with this snapshot's parameters, e.g. to evaluate it.
    pub fn model(&self) -> Perceptron {
        Perceptron::from_parts(self.weights.view(), self.bias)
    }
}

/// The history of a training run, one `Snapshot` per completed epoch in epoch order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    snapshots: Vec<Snapshot>,
}

impl Trajectory {
    pub(crate) fn new(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The state after the last epoch, `None` if no epoch was run.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
