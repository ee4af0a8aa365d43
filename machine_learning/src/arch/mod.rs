pub mod activations;
mod model;
mod perceptron;

pub use model::Model;
pub use perceptron::Perceptron;
