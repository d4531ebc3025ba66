//! Feedback controllers: PID with output and integral clamping, bang-bang.
//!
//! Both implement [`Controller`], which is what the plants in
//! [`crate::sim`] are driven by.
//!
//! # Examples
//!
//! ```
//! use sigsim::control::Pid;
//!
//! // motor position loop, torque limited to ±2 N·m
//! let mut pid = Pid::new(8.0_f64, 1.0, 0.5).with_output_limit(2.0);
//! let u = pid.tick(1.0, 0.0, 1.0 / 60.0);
//! assert_eq!(u, 2.0); // saturated
//! ```

mod bang_bang;
mod pid;

#[cfg(test)]
mod tests;

pub use bang_bang::BangBang;
pub use pid::{Pid, PidTerms};

use crate::traits::FloatScalar;

/// A discrete-time feedback controller.
pub trait Controller<T: FloatScalar> {
    /// Compute the control effort for one step of length `dt`.
    fn control(&mut self, setpoint: T, measurement: T, dt: T) -> T;

    /// Return to the initial state. Configuration is kept.
    fn reset(&mut self);
}

impl<T: FloatScalar> Controller<T> for Pid<T> {
    fn control(&mut self, setpoint: T, measurement: T, dt: T) -> T {
        self.tick(setpoint, measurement, dt)
    }

    fn reset(&mut self) {
        Pid::reset(self);
    }
}

impl<T: FloatScalar> Controller<T> for BangBang<T> {
    fn control(&mut self, setpoint: T, measurement: T, _dt: T) -> T {
        self.tick(setpoint, measurement)
    }

    fn reset(&mut self) {}
}
