mod dataset;
mod generator;

pub use dataset::Dataset;
pub use generator::{
    CLASS_A_CENTER, CLASS_A_LABEL, CLASS_B_CENTER, CLASS_B_LABEL, make_inputs, make_targets,
};
