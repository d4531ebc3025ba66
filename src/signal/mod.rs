//! Time-driven sample generation: synthetic signals and sample sequences.
//!
//! A [`Signal`] is a pure function of time. Widgets regenerate a finite
//! [`Sample`] sequence from it every frame, either lazily through
//! [`samples`] or into a caller-owned slice with [`fill_samples`].
//! [`Noisy`] adds seeded pseudo-random noise on top of any signal.
//!
//! # Example
//!
//! ```
//! use sigsim::signal::{samples, Sine};
//!
//! // 1 Hz sine, 8 samples per second
//! let sine = Sine::new(1.0_f64, 1.0);
//! let seq: Vec<_> = samples(&sine, 0.0, 0.125, 8).collect();
//! assert_eq!(seq.len(), 8);
//! assert!((seq[2].value - 1.0).abs() < 1e-12); // peak at t = 0.25
//! ```

mod generators;


pub use generators::{Chirp, Noisy, Sine, SineMix, Square, Step};

use crate::traits::FloatScalar;

/// A single point of a discretized signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    pub t: T,
    pub value: T,
}

impl<T> Sample<T> {
    pub fn new(t: T, value: T) -> Self {
        Self { t, value }
    }
}

/// A synthetic physical quantity as a pure function of time.
///
/// Implemented for the built-in generators and for any `Fn(T) -> T`.
pub trait Signal<T: FloatScalar> {
    /// Value of the signal at time `t`.
    fn value(&self, t: T) -> T;
}

impl<T: FloatScalar, F: Fn(T) -> T> Signal<T> for F {
    #[inline]
    fn value(&self, t: T) -> T {
        self(t)
    }
}

/// Iterator over `t0, t0 + dt, …, t0 + (n-1)·dt`.
///
/// Times are computed from the index, never accumulated, so they stay
/// strictly increasing for `dt > 0` without drift.
#[derive(Debug, Clone)]
pub struct SampleTimes<T> {
    t0: T,
    dt: T,
    i: usize,
    n: usize,
}

impl<T: FloatScalar> Iterator for SampleTimes<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.i >= self.n {
            return None;
        }
        let t = self.t0 + T::from_usize(self.i) * self.dt;
        self.i += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.n - self.i;
        (rem, Some(rem))
    }
}

impl<T: FloatScalar> ExactSizeIterator for SampleTimes<T> {}

/// Sample instants `t0 + i·dt` for `i in 0..n`.
pub fn sample_times<T: FloatScalar>(t0: T, dt: T, n: usize) -> SampleTimes<T> {
    SampleTimes { t0, dt, i: 0, n }
}

/// Lazily evaluated sample sequence of a signal.
#[derive(Debug, Clone)]
pub struct Samples<'a, T, S: ?Sized> {
    signal: &'a S,
    times: SampleTimes<T>,
}

impl<T: FloatScalar, S: Signal<T> + ?Sized> Iterator for Samples<'_, T, S> {
    type Item = Sample<T>;

    #[inline]
    fn next(&mut self) -> Option<Sample<T>> {
        let t = self.times.next()?;
        Some(Sample::new(t, self.signal.value(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.times.size_hint()
    }
}

impl<T: FloatScalar, S: Signal<T> + ?Sized> ExactSizeIterator for Samples<'_, T, S> {}

/// Evaluate `signal` at `n` instants starting at `t0`, spaced by `dt`.
pub fn samples<T: FloatScalar, S: Signal<T> + ?Sized>(
    signal: &S,
    t0: T,
    dt: T,
    n: usize,
) -> Samples<'_, T, S> {
    Samples {
        signal,
        times: sample_times(t0, dt, n),
    }
}

/// Fill `out` with samples of `signal` starting at `t0`, spaced by `dt`.
///
/// Writes exactly `out.len()` samples.
pub fn fill_samples<T: FloatScalar, S: Signal<T> + ?Sized>(
    signal: &S,
    t0: T,
    dt: T,
    out: &mut [Sample<T>],
) {
    for (slot, s) in out.iter_mut().zip(samples(signal, t0, dt, usize::MAX)) {
        *slot = s;
    }
}

/// Copy the values of a sample sequence into a plain slice.
///
/// Copies `min(samples.len(), out.len())` values. Handy for feeding a
/// sequence to the slice-based kernels in [`crate::filter`] and
/// [`crate::spectrum`].
pub fn values_into<T: Copy>(samples: &[Sample<T>], out: &mut [T]) {
    for (slot, s) in out.iter_mut().zip(samples) {
        *slot = s.value;
    }
}
