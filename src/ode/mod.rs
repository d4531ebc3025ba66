//! Fixed-step ODE integration on small array states.
//!
//! The plants in [`crate::sim`] advance one explicit-Euler step per frame.
//! Classic RK4 is provided alongside as the accuracy reference.
//!
//! # Example
//!
//! ```
//! use sigsim::ode::{euler, rk4};
//!
//! // dy/dt = -y over one second
//! let f = |_t: f64, y: &[f64; 1]| [-y[0]];
//! let exact = (-1.0_f64).exp();
//! let ye = euler(0.0, 1.0, 0.01, &[1.0], f);
//! let yr = rk4(0.0, 1.0, 0.01, &[1.0], f);
//! assert!((yr[0] - exact).abs() < (ye[0] - exact).abs());
//! ```

mod euler;
mod rk4;


pub use euler::{euler, euler_step};
pub use rk4::{rk4, rk4_step};

use crate::traits::FloatScalar;

/// `y + h·k`, element-wise.
#[inline]
pub(crate) fn axpy<T: FloatScalar, const S: usize>(y: &[T; S], h: T, k: &[T; S]) -> [T; S] {
    let mut out = *y;
    for (o, &ki) in out.iter_mut().zip(k) {
        *o = *o + h * ki;
    }
    out
}

/// Drive a fixed-step integrator from `t0` to `tf`, shortening the last
/// step to land exactly on `tf`. Works forwards or backwards in time.
///
/// A zero or NaN step size, or a non-finite endpoint, cannot make progress
/// and returns `y0` unchanged.
pub(crate) fn integrate_fixed<T: FloatScalar, const S: usize, F>(
    t0: T,
    tf: T,
    dt: T,
    y0: &[T; S],
    mut f: F,
    mut step: impl FnMut(T, &[T; S], T, &mut F) -> [T; S],
) -> [T; S] {
    let mut t = t0;
    let mut y = *y0;
    if tf == t0 || dt.is_nan() || dt == T::zero() || !t0.is_finite() || !tf.is_finite() {
        return y;
    }
    let tdir = if tf > t0 { T::one() } else { -T::one() };
    let mut h = dt.abs() * tdir;

    loop {
        // Clamp last step
        if (tdir > T::zero() && t + h > tf) || (tdir < T::zero() && t + h < tf) {
            h = tf - t;
        }

        y = step(t, &y, h, &mut f);
        t = t + h;

        if (tdir > T::zero() && t >= tf) || (tdir < T::zero() && t <= tf) {
            break;
        }
    }

    y
}
