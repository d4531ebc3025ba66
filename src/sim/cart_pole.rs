use crate::ode::euler_step;
use crate::traits::{clamp, FloatScalar};

use super::Plant;

/// Inverted pendulum on a cart, integrated with explicit Euler.
///
/// State `[x, ẋ, θ, θ̇]` with `θ = 0` upright and positive `θ` leaning toward
/// positive `x`. Dynamics follow the classic cart-pole model with a
/// uniform pole of half-length `l`:
///
/// ```text
/// tmp = (F + m·l·θ̇²·sin θ) / (M + m)
/// θ̈  = (g·sin θ - cos θ·tmp) / (l·(4/3 - m·cos²θ / (M + m)))
/// ẍ  = tmp - m·l·θ̈·cos θ / (M + m)
/// ```
///
/// The cart stops dead at `±track_limit`. Once `|θ|` exceeds the fall angle
/// the pole is down and further steps are ignored until [`Plant::reset`].
/// Output is `θ`.
#[derive(Debug, Clone, Copy)]
pub struct CartPole<T> {
    gravity: T,
    cart_mass: T,
    pole_mass: T,
    half_length: T,
    max_force: T,
    track_limit: T,
    fall_angle: T,

    initial: [T; 4],
    state: [T; 4],
    fallen: bool,
}

impl<T: FloatScalar> CartPole<T> {
    /// Cart-pole with the given masses (kg) and pole half-length (m),
    /// standard gravity, a ±10 N actuator, a ±2.4 m track, and a fall
    /// angle of 90°.
    pub fn new(cart_mass: T, pole_mass: T, half_length: T) -> Self {
        Self {
            gravity: T::lit(9.81),
            cart_mass,
            pole_mass,
            half_length,
            max_force: T::lit(10.0),
            track_limit: T::lit(2.4),
            fall_angle: T::lit(core::f64::consts::FRAC_PI_2),
            initial: [T::zero(); 4],
            state: [T::zero(); 4],
            fallen: false,
        }
    }

    /// Start (and reset) with the pole tilted by `theta` radians.
    pub fn with_initial_angle(mut self, theta: T) -> Self {
        self.initial[2] = theta;
        self.state[2] = theta;
        self
    }

    pub fn with_max_force(mut self, max_force: T) -> Self {
        self.max_force = max_force;
        self
    }

    pub fn with_track_limit(mut self, limit: T) -> Self {
        self.track_limit = limit;
        self
    }

    pub fn with_fall_angle(mut self, angle: T) -> Self {
        self.fall_angle = angle;
        self
    }

    pub fn with_gravity(mut self, g: T) -> Self {
        self.gravity = g;
        self
    }

    pub fn position(&self) -> T {
        self.state[0]
    }

    pub fn velocity(&self) -> T {
        self.state[1]
    }

    pub fn angle(&self) -> T {
        self.state[2]
    }

    pub fn angular_velocity(&self) -> T {
        self.state[3]
    }

    pub fn has_fallen(&self) -> bool {
        self.fallen
    }

    pub fn track_limit(&self) -> T {
        self.track_limit
    }

    /// Nudge the pole, e.g. from a click on the canvas.
    pub fn push_pole(&mut self, angular_velocity: T) {
        self.state[3] = self.state[3] + angular_velocity;
    }

    fn derivatives(&self, force: T, y: &[T; 4]) -> [T; 4] {
        let (theta, theta_dot) = (y[2], y[3]);
        let (s, c) = (theta.sin(), theta.cos());
        let total = self.cart_mass + self.pole_mass;
        let ml = self.pole_mass * self.half_length;

        let tmp = (force + ml * theta_dot * theta_dot * s) / total;
        let theta_acc = (self.gravity * s - c * tmp)
            / (self.half_length * (T::lit(4.0 / 3.0) - self.pole_mass * c * c / total));
        let x_acc = tmp - ml * theta_acc * c / total;

        [y[1], x_acc, theta_dot, theta_acc]
    }
}

impl<T: FloatScalar> Plant<T> for CartPole<T> {
    fn step(&mut self, input: T, dt: T) {
        if self.fallen {
            return;
        }
        let force = clamp(input, -self.max_force, self.max_force);
        let mut next = euler_step(T::zero(), &self.state, dt, |_t, y| self.derivatives(force, y));

        if next[0].abs() > self.track_limit {
            next[0] = if next[0] > T::zero() {
                self.track_limit
            } else {
                -self.track_limit
            };
            next[1] = T::zero();
        }
        self.state = next;

        if self.state[2].abs() > self.fall_angle {
            self.fallen = true;
            log::debug!("pole fell at angle {:?}", self.state[2]);
        }
    }

    fn output(&self) -> T {
        self.state[2]
    }

    fn reset(&mut self) {
        self.state = self.initial;
        self.fallen = false;
    }
}
