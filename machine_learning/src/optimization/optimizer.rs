use ndarray::{ArrayView1, ArrayViewMut1};

pub trait Optimizer {
    /// Applies one learning step after the model produced `error` for the input `x`.
    ///
    /// # Arguments
    /// * `params` - The model's weights followed by its bias.
    /// * `x` - The input pattern that was presented.
    /// * `error` - The difference between the target and the model's response.
    fn update_params(&mut self, params: ArrayViewMut1<f64>, x: ArrayView1<f64>, error: f64);
}
