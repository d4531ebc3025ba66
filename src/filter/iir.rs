use crate::traits::FloatScalar;

/// Single-pole lowpass (exponential smoothing).
///
/// `y[n] = α·x[n] + (1 - α)·y[n-1]`, with one retained state value.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnePole<T> {
    alpha: T,
    initial: T,
    y_prev: T,
}

impl<T: FloatScalar> OnePole<T> {
    /// Smoothing filter with blend factor `alpha`, starting from zero.
    pub fn new(alpha: T) -> Self {
        Self {
            alpha,
            initial: T::zero(),
            y_prev: T::zero(),
        }
    }

    /// Filter with cutoff `cutoff` Hz at `sample_rate` Hz.
    ///
    /// Uses the RC approximation `α = dt / (RC + dt)` with
    /// `RC = 1 / (2π·cutoff)` rather than an exact bilinear mapping.
    ///
    /// ```
    /// use sigsim::filter::OnePole;
    ///
    /// let lp = OnePole::from_cutoff(1.0_f64, 100.0);
    /// let rc = 1.0 / (2.0 * std::f64::consts::PI);
    /// assert!((lp.alpha() - 0.01 / (rc + 0.01)).abs() < 1e-15);
    /// ```
    pub fn from_cutoff(cutoff: T, sample_rate: T) -> Self {
        Self::new(Self::alpha_for(cutoff, sample_rate))
    }

    /// The `α` that [`from_cutoff`](Self::from_cutoff) would use.
    pub fn alpha_for(cutoff: T, sample_rate: T) -> T {
        let dt = T::one() / sample_rate;
        let rc = T::one() / (T::tau() * cutoff);
        dt / (rc + dt)
    }

    /// Start (and reset) from `y0` instead of zero. Returns `self` for chaining.
    pub fn with_initial(mut self, y0: T) -> Self {
        self.initial = y0;
        self.y_prev = y0;
        self
    }

    /// Process one sample.
    #[inline]
    pub fn tick(&mut self, x: T) -> T {
        let y = self.alpha * x + (T::one() - self.alpha) * self.y_prev;
        self.y_prev = y;
        y
    }

    /// Restore the initial output.
    pub fn reset(&mut self) {
        self.y_prev = self.initial;
    }

    /// Process a slice of samples in-place.
    pub fn process_inplace(&mut self, data: &mut [T]) {
        for sample in data.iter_mut() {
            *sample = self.tick(*sample);
        }
    }

    /// Last output.
    pub fn output(&self) -> T {
        self.y_prev
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Change `α` without touching the state.
    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha;
    }

    /// Pole location `1 - α` of `H(z) = α / (1 - (1-α)·z⁻¹)`.
    pub fn pole(&self) -> T {
        T::one() - self.alpha
    }

    /// `|pole| < 1`. Reported for display; nothing stops an unstable α.
    pub fn is_stable(&self) -> bool {
        self.pole().abs() < T::one()
    }
}
