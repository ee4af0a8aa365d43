use super::Signum;

/// The activation functions a neuron can quantize its linear output with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Signum(Signum),
}

impl ActFn {
    pub fn signum() -> Self {
        Self::Signum(Signum::new())
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Signum(a) => a.f(x),
        }
    }
}

impl Default for ActFn {
    fn default() -> Self {
        Self::signum()
    }
}
