mod act_fn;
mod signum;

pub use act_fn::ActFn;
pub use signum::Signum;
