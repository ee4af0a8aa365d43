//! Command line front end of the perceptron trainer: configuration loading and the per-epoch
//! decision boundary report.

pub mod config;
pub mod report;

pub use config::{Args, load_config};
pub use report::{DecisionBoundary, TrainingReport};
