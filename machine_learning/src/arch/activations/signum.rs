/// The mathematical sign function.
///
/// Unlike `f64::signum`, a zero score (of either sign) maps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Signum;

impl Signum {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f64) -> f64 {
        if z > 0. {
            1.
        } else if z < 0. {
            -1.
        } else {
            0.
        }
    }
}
