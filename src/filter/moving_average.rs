use crate::signal::Signal;
use crate::traits::FloatScalar;

use super::FilterError;

/// Mean of `window` samples of `signal` at `t, t - dt, …, t - (window-1)·dt`.
///
/// The samples are regenerated from the signal on every call, so this is a
/// windowed mean of the underlying function rather than a streaming state.
///
/// ```
/// use sigsim::filter::moving_average;
///
/// let ramp = |t: f64| t;
/// let m = moving_average(&ramp, 10.0, 1.0, 5).unwrap();
/// assert!((m - 8.0).abs() < 1e-12); // mean of 6..=10
/// ```
pub fn moving_average<T: FloatScalar, S: Signal<T> + ?Sized>(
    signal: &S,
    t: T,
    dt: T,
    window: usize,
) -> Result<T, FilterError> {
    if window == 0 {
        return Err(FilterError::EmptyWindow);
    }
    let mut sum = T::zero();
    for i in 0..window {
        sum = sum + signal.value(t - T::from_usize(i) * dt);
    }
    Ok(sum / T::from_usize(window))
}

/// Streaming mean over the last `N` pushed values.
///
/// While fewer than `N` values have been pushed the mean is over what is
/// there. With `N == 0` every tick returns the input unchanged.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverage<T, const N: usize> {
    buf: [T; N],
    pos: usize,
    len: usize,
    sum: T,
}

impl<T: FloatScalar, const N: usize> MovingAverage<T, N> {
    pub fn new() -> Self {
        Self {
            buf: [T::zero(); N],
            pos: 0,
            len: 0,
            sum: T::zero(),
        }
    }

    /// Push `x` and return the current mean.
    #[inline]
    pub fn tick(&mut self, x: T) -> T {
        if N == 0 {
            return x;
        }
        if self.len == N {
            self.sum = self.sum - self.buf[self.pos];
        } else {
            self.len += 1;
        }
        self.buf[self.pos] = x;
        self.sum = self.sum + x;
        self.pos = (self.pos + 1) % N;
        self.sum / T::from_usize(self.len)
    }

    /// Current mean, `None` before the first push.
    pub fn mean(&self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.sum / T::from_usize(self.len))
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<T: FloatScalar, const N: usize> Default for MovingAverage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
