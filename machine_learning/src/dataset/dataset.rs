use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};

use super::{make_inputs, make_targets};
use crate::{MlErr, PerceptronConfig, Result};

/// An ordered sequence of labeled input patterns.
///
/// Row `i` of the inputs is labeled by the `i`-th target. The order is the order training
/// visits the samples in, it is never shuffled.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Array2<f64>,
    targets: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `inputs` - One input pattern per row.
    /// * `targets` - One label per input pattern.
    ///
    /// # Returns
    /// An error if the amount of rows and labels differ.
    pub fn new(inputs: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        if inputs.nrows() != targets.len() {
            return Err(MlErr::SizeMismatch {
                a: "inputs",
                b: "targets",
                got: targets.len(),
                expected: inputs.nrows(),
            });
        }

        Ok(Self { inputs, targets })
    }

    /// Generates the two class Gaussian dataset.
    ///
    /// # Arguments
    /// * `class_size` - The amount of samples per class.
    /// * `seed` - The seed of the pseudorandom stream.
    pub fn generate(class_size: usize, seed: u64) -> Self {
        Self {
            inputs: make_inputs(class_size, seed),
            targets: make_targets(class_size),
        }
    }

    /// Generates the dataset described by `config`.
    pub fn from_config(config: &PerceptronConfig) -> Self {
        Self::generate(config.class_size, config.seed)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The dimension of every input pattern.
    pub fn dim(&self) -> usize {
        self.inputs.ncols()
    }

    pub fn inputs(&self) -> ArrayView2<'_, f64> {
        self.inputs.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }

    /// Iterates over the `(input, target)` pairs in dataset order.
    pub fn samples(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> {
        self.inputs.outer_iter().zip(self.targets.iter().copied())
    }

    /// Returns the same samples visited back to front.
    pub fn reversed(&self) -> Self {
        Self {
            inputs: self.inputs.slice(s![..;-1, ..]).to_owned(),
            targets: self.targets.slice(s![..;-1]).to_owned(),
        }
    }

    /// Collects the inputs labeled with `label`, keeping their relative order.
    pub fn class_inputs(&self, label: f64) -> Array2<f64> {
        let rows: Vec<usize> = self
            .targets
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == label)
            .map(|(i, _)| i)
            .collect();

        self.inputs.select(Axis(0), &rows)
    }

    /// The smallest and largest value of the first feature, `None` if there are no samples.
    pub fn x1_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() || self.dim() == 0 {
            return None;
        }

        let range = self
            .inputs
            .column(0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Some(range)
    }
}
