use crate::traits::FloatScalar;

use super::{axpy, integrate_fixed};

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using `f(t, y) -> dy/dt`.
///
/// ```
/// use sigsim::ode::rk4_step;
///
/// // dy/dt = -y (exponential decay)
/// let y1 = rk4_step(0.0, &[1.0_f64], 0.01, |_t, y| [-y[0]]);
/// assert!((y1[0] - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar, const S: usize>(
    t: T,
    y: &[T; S],
    h: T,
    mut f: impl FnMut(T, &[T; S]) -> [T; S],
) -> [T; S] {
    let half = T::half();
    let sixth = T::lit(1.0 / 6.0);
    let third = T::lit(1.0 / 3.0);

    let k1 = f(t, y);
    let k2 = f(t + h * half, &axpy(y, h * half, &k1));
    let k3 = f(t + h * half, &axpy(y, h * half, &k2));
    let k4 = f(t + h, &axpy(y, h, &k3));

    let mut out = *y;
    for i in 0..S {
        out[i] = out[i] + h * (k1[i] * sixth + k2[i] * third + k3[i] * third + k4[i] * sixth);
    }
    out
}

/// Integrate from `t0` to `tf` with fixed-step RK4.
///
/// ```
/// use sigsim::ode::rk4;
///
/// // Harmonic oscillator: y'' = -y  →  [y, y']
/// let yf = rk4(0.0, std::f64::consts::TAU, 0.001, &[1.0_f64, 0.0],
///     |_t, y| [y[1], -y[0]],
/// );
/// assert!((yf[0] - 1.0).abs() < 1e-8);
/// assert!(yf[1].abs() < 1e-8);
/// ```
pub fn rk4<T: FloatScalar, const S: usize>(
    t0: T,
    tf: T,
    dt: T,
    y0: &[T; S],
    f: impl FnMut(T, &[T; S]) -> [T; S],
) -> [T; S] {
    integrate_fixed(t0, tf, dt, y0, f, |t, y, h, f| rk4_step(t, y, h, &mut *f))
}
