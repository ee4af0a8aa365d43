mod error_correction;
mod optimizer;

pub use error_correction::ErrorCorrection;
pub use optimizer::Optimizer;
