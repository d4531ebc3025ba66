use crate::ode::euler_step;
use crate::traits::{clamp, FloatScalar};

use super::Plant;

/// DC motor shaft with viscous and Coulomb friction.
///
/// ```text
/// J·ω' = τ - b·ω - τc·sign(ω),   θ' = ω
/// ```
///
/// The commanded torque is clamped to `±max_torque`. Output is the shaft
/// angle in radians.
#[derive(Debug, Clone, Copy)]
pub struct DcMotor<T> {
    inertia: T,
    viscous: T,
    coulomb: T,
    max_torque: T,

    initial: [T; 2],
    state: [T; 2], // [angle, velocity]
    torque: T,
}

impl<T: FloatScalar> DcMotor<T> {
    /// Motor at rest at angle zero.
    pub fn new(inertia: T, viscous: T, coulomb: T, max_torque: T) -> Self {
        Self {
            inertia,
            viscous,
            coulomb,
            max_torque,
            initial: [T::zero(); 2],
            state: [T::zero(); 2],
            torque: T::zero(),
        }
    }

    /// Start (and reset) at `angle`. Returns `self` for chaining.
    pub fn with_initial_angle(mut self, angle: T) -> Self {
        self.initial[0] = angle;
        self.state[0] = angle;
        self
    }

    pub fn angle(&self) -> T {
        self.state[0]
    }

    pub fn velocity(&self) -> T {
        self.state[1]
    }

    /// Torque actually applied on the last step, after clamping.
    pub fn torque(&self) -> T {
        self.torque
    }

    pub fn max_torque(&self) -> T {
        self.max_torque
    }

    /// Net angular acceleration for a given torque and velocity.
    fn acceleration(&self, torque: T, velocity: T) -> T {
        let sign = if velocity > T::zero() {
            T::one()
        } else if velocity < T::zero() {
            -T::one()
        } else {
            T::zero()
        };
        (torque - self.viscous * velocity - self.coulomb * sign) / self.inertia
    }
}

impl<T: FloatScalar> Plant<T> for DcMotor<T> {
    fn step(&mut self, input: T, dt: T) {
        let torque = clamp(input, -self.max_torque, self.max_torque);
        self.torque = torque;
        self.state = euler_step(T::zero(), &self.state, dt, |_t, y| {
            [y[1], self.acceleration(torque, y[1])]
        });
    }

    fn output(&self) -> T {
        self.state[0]
    }

    fn reset(&mut self) {
        self.state = self.initial;
        self.torque = T::zero();
    }
}
