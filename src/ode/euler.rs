use crate::traits::FloatScalar;

use super::{axpy, integrate_fixed};

/// Single explicit-Euler step: `y + h·f(t, y)`.
///
/// ```
/// use sigsim::ode::euler_step;
///
/// // falling body: [height, velocity]
/// let y = euler_step(0.0, &[10.0_f64, 0.0], 0.1, |_t, y| [y[1], -9.81]);
/// assert_eq!(y[0], 10.0);
/// assert!((y[1] + 0.981).abs() < 1e-12);
/// ```
#[inline]
pub fn euler_step<T: FloatScalar, const S: usize>(
    t: T,
    y: &[T; S],
    h: T,
    mut f: impl FnMut(T, &[T; S]) -> [T; S],
) -> [T; S] {
    let k = f(t, y);
    axpy(y, h, &k)
}

/// Integrate from `t0` to `tf` with fixed-step explicit Euler.
pub fn euler<T: FloatScalar, const S: usize>(
    t0: T,
    tf: T,
    dt: T,
    y0: &[T; S],
    f: impl FnMut(T, &[T; S]) -> [T; S],
) -> [T; S] {
    integrate_fixed(t0, tf, dt, y0, f, |t, y, h, f| euler_step(t, y, h, &mut *f))
}
