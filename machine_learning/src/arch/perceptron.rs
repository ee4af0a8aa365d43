use ndarray::{Array1, ArrayView1, ArrayViewMut1, s};

use super::{Model, activations::ActFn};

/// A single neuron: a linear combiner `w·x + b` followed by an activation function.
///
/// The parameters live in one flat vector, the weights first and the bias last, so optimizers
/// can treat them as a single slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    dim: usize,
    params: Array1<f64>,
    act_fn: ActFn,
}

impl Perceptron {
    /// Creates a new `Perceptron` with every parameter set to zero.
    ///
    /// # Arguments
    /// * `dim` - The dimension of the input patterns.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            params: Array1::zeros(dim + 1),
            act_fn: ActFn::signum(),
        }
    }

    /// Creates a new `Perceptron` with the given weights and bias.
    pub fn from_parts(weights: ArrayView1<f64>, bias: f64) -> Self {
        let dim = weights.len();
        let mut params = Array1::zeros(dim + 1);
        params.slice_mut(s![..dim]).assign(&weights);
        params[dim] = bias;

        Self {
            dim,
            params,
            act_fn: ActFn::signum(),
        }
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.params.slice(s![..self.dim])
    }

    pub fn bias(&self) -> f64 {
        self.params[self.dim]
    }

    /// Gives mutable access to the flat parameter vector, weights followed by the bias.
    pub fn params_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.params.view_mut()
    }

    /// Computes the affine score `w·x + b`.
    pub fn linear_combiner(&self, x: ArrayView1<f64>) -> f64 {
        self.weights().dot(&x) + self.bias()
    }

    /// Computes `target - y`, where `y` is the quantized response to `x`.
    pub fn error(&self, x: ArrayView1<f64>, target: f64) -> f64 {
        target - self.forward(x)
    }
}

impl Model for Perceptron {
    fn size(&self) -> usize {
        self.dim + 1
    }

    fn input_dim(&self) -> usize {
        self.dim
    }

    fn forward(&self, x: ArrayView1<f64>) -> f64 {
        self.act_fn.f(self.linear_combiner(x))
    }
}
