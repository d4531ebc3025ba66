//! Fixed-step physical plants and closed-loop simulation.
//!
//! Each plant integrates a handful of scalars with one explicit-Euler step
//! per call. [`ClosedLoop`] ties a plant to a [`Controller`] and feeds the
//! controller output back in as the forcing term.
//!
//! # Example
//!
//! ```
//! use sigsim::control::Pid;
//! use sigsim::sim::{ClosedLoop, DcMotor, Plant};
//!
//! let motor = DcMotor::new(0.01_f64, 0.1, 0.02, 2.0);
//! let pid = Pid::new(5.0, 1.0, 0.3);
//! let mut lp = ClosedLoop::new(motor, pid, 1.0);
//! for _ in 0..600 {
//!     lp.step(1.0 / 60.0);
//! }
//! assert!((lp.plant().output() - 1.0).abs() < 0.01);
//! ```

mod cart_pole;
mod motor;


pub use cart_pole::CartPole;
pub use motor::DcMotor;

use crate::control::Controller;
use crate::traits::FloatScalar;

/// A dynamic system advanced in fixed steps by an external input.
pub trait Plant<T: FloatScalar> {
    /// Apply `input` for `dt` seconds.
    fn step(&mut self, input: T, dt: T);

    /// The measured quantity a controller regulates.
    fn output(&self) -> T;

    /// Restore the initial state.
    fn reset(&mut self);
}

/// A plant under feedback control.
#[derive(Debug, Clone)]
pub struct ClosedLoop<P, C, T> {
    plant: P,
    controller: C,
    setpoint: T,
    input_gain: T,
    last_input: T,
}

impl<T: FloatScalar, P: Plant<T>, C: Controller<T>> ClosedLoop<P, C, T> {
    pub fn new(plant: P, controller: C, setpoint: T) -> Self {
        Self {
            plant,
            controller,
            setpoint,
            input_gain: T::one(),
            last_input: T::zero(),
        }
    }

    /// Scale the controller output before it reaches the plant, e.g. `-1`
    /// when positive error needs negative force. Returns `self` for chaining.
    pub fn with_input_gain(mut self, gain: T) -> Self {
        self.input_gain = gain;
        self
    }

    /// Run the controller on the current output, drive the plant for `dt`,
    /// and return the input that was applied.
    pub fn step(&mut self, dt: T) -> T {
        let u = self.controller.control(self.setpoint, self.plant.output(), dt);
        let input = self.input_gain * u;
        self.plant.step(input, dt);
        self.last_input = input;
        input
    }

    /// Reset both plant and controller. The setpoint is kept.
    pub fn reset(&mut self) {
        log::debug!("closed loop reset");
        self.plant.reset();
        self.controller.reset();
        self.last_input = T::zero();
    }

    pub fn setpoint(&self) -> T {
        self.setpoint
    }

    /// Move the target (drag-to-set in the motor demos).
    pub fn set_setpoint(&mut self, setpoint: T) {
        self.setpoint = setpoint;
    }

    /// Tracking error `setpoint - output`.
    pub fn error(&self) -> T {
        self.setpoint - self.plant.output()
    }

    pub fn last_input(&self) -> T {
        self.last_input
    }

    pub fn plant(&self) -> &P {
        &self.plant
    }

    pub fn plant_mut(&mut self) -> &mut P {
        &mut self.plant
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }
}
