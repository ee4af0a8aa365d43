use ndarray::{ArrayView1, ArrayViewMut1, Axis};

use super::Optimizer;
use crate::{Result, config::validate_learning_rate};

/// The perceptron learning rule: `w <- w + lr * e * x` and `b <- b + lr * e`.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCorrection {
    learning_rate: f64,
}

impl ErrorCorrection {
    /// Returns a new `ErrorCorrection`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    ///
    /// # Returns
    /// An error if the learning rate is not a finite positive number.
    pub fn new(learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        Ok(Self { learning_rate })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for ErrorCorrection {
    /// Moves the parameters towards the target by `learning_rate * error` along the input.
    ///
    /// The step is always applied, a zero error simply adds zero.
    fn update_params(&mut self, params: ArrayViewMut1<f64>, x: ArrayView1<f64>, error: f64) {
        let step = self.learning_rate * error;
        let (mut w, mut b) = params.split_at(Axis(0), x.len());

        w.scaled_add(step, &x);
        b[0] += step;
    }
}
