use crate::traits::FloatScalar;

/// On/off controller: full effort toward the setpoint, nothing inside the
/// deadband.
///
/// ```
/// use sigsim::control::BangBang;
///
/// let mut c = BangBang::new(3.0_f64).with_deadband(0.1);
/// assert_eq!(c.tick(1.0, 0.0), 3.0);
/// assert_eq!(c.tick(0.0, 1.0), -3.0);
/// assert_eq!(c.tick(1.0, 0.95), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BangBang<T> {
    max_output: T,
    deadband: T,
}

impl<T: FloatScalar> BangBang<T> {
    pub fn new(max_output: T) -> Self {
        Self {
            max_output,
            deadband: T::zero(),
        }
    }

    /// No output while `|error| <= deadband`. Returns `self` for chaining.
    pub fn with_deadband(mut self, deadband: T) -> Self {
        self.deadband = deadband.abs();
        self
    }

    #[inline]
    pub fn tick(&self, setpoint: T, measurement: T) -> T {
        let error = setpoint - measurement;
        if error.abs() <= self.deadband {
            T::zero()
        } else if error > T::zero() {
            self.max_output
        } else {
            -self.max_output
        }
    }
}
