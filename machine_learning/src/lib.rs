//! Single-layer perceptron trained with the classical error-correction rule on two synthetic
//! Gaussian clusters. Training records the model parameters after every epoch so the
//! evolution of the decision boundary can be inspected afterwards.

pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod optimization;
pub mod training;

pub use config::PerceptronConfig;
pub use dataset::{Dataset, make_inputs, make_targets};
pub use error::{MlErr, Result};
pub use training::{Snapshot, Trajectory, train_model};
