use crate::traits::FloatScalar;

/// One-dimensional Kalman filter with a random-walk motion model.
///
/// Predict: `x⁻ = x + u`, `P⁻ = P + Q`.
/// Update: `K = P⁻ / (P⁻ + R)`, `x = x⁻ + K·(z - x⁻)`, `P = (1 - K)·P⁻`.
///
/// The control input `u` is a plain additive displacement; there is no
/// state-transition gain.
#[derive(Debug, Clone, Copy)]
pub struct ScalarKalman<T> {
    // Configuration
    q: T,
    r: T,
    x0: T,
    p0: T,

    // State
    x: T,
    p: T,
    gain: T,
}

impl<T: FloatScalar> ScalarKalman<T> {
    /// Filter starting at estimate `x0` with uncertainty `p0`, process noise
    /// `q`, and measurement noise `r` (both variances).
    pub fn new(x0: T, p0: T, q: T, r: T) -> Self {
        Self {
            q,
            r,
            x0,
            p0,
            x: x0,
            p: p0,
            gain: T::zero(),
        }
    }

    /// Time update with displacement `u`.
    #[inline]
    pub fn predict(&mut self, u: T) {
        self.x = self.x + u;
        self.p = self.p + self.q;
    }

    /// Measurement update with observation `z`. Returns the Kalman gain.
    #[inline]
    pub fn update(&mut self, z: T) -> T {
        let k = self.p / (self.p + self.r);
        self.x = self.x + k * (z - self.x);
        self.p = (T::one() - k) * self.p;
        self.gain = k;
        k
    }

    /// `predict(u)` followed by `update(z)`; returns the new estimate.
    #[inline]
    pub fn step(&mut self, u: T, z: T) -> T {
        self.predict(u);
        self.update(z);
        self.x
    }

    pub fn estimate(&self) -> T {
        self.x
    }

    pub fn uncertainty(&self) -> T {
        self.p
    }

    /// Gain from the most recent update (0 before the first).
    pub fn gain(&self) -> T {
        self.gain
    }

    pub fn noise(&self) -> (T, T) {
        (self.q, self.r)
    }

    /// Change `Q` and `R` at runtime; the state is kept.
    pub fn set_noise(&mut self, q: T, r: T) {
        self.q = q;
        self.r = r;
    }

    /// Steady-state uncertainty after update, the positive root of
    /// `P² + Q·P - Q·R = 0`.
    pub fn steady_state_uncertainty(&self) -> T {
        let (q, r) = (self.q, self.r);
        (-q + (q * q + T::lit(4.0) * q * r).sqrt()) / T::two()
    }

    pub fn reset(&mut self) {
        self.x = self.x0;
        self.p = self.p0;
        self.gain = T::zero();
    }
}
