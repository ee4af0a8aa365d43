use ndarray::ArrayView1;

pub trait Model {
    /// Returns the amount of parameters in the model.
    fn size(&self) -> usize;

    /// Returns the dimension of the input patterns the model accepts.
    fn input_dim(&self) -> usize;

    /// Computes the model's response to a single input pattern.
    ///
    /// # Arguments
    /// * `x` - An input pattern of `input_dim` elements.
    ///
    /// # Returns
    /// The quantized output of the model.
    fn forward(&self, x: ArrayView1<f64>) -> f64;
}
