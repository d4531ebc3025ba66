//! Sampling and reconstruction: zero-order hold, linear, and windowed sinc
//! interpolation of uniformly spaced samples, plus the aliasing fold.
//!
//! Samples are taken to sit at `t = k·period` for `k = 0, 1, …`.
//!
//! # Example
//!
//! ```
//! use sigsim::resample::{aliased_frequency, reconstruct, Reconstruction};
//!
//! // 7 Hz sampled at 10 Hz shows up at 3 Hz
//! assert!((aliased_frequency(7.0_f64, 10.0) - 3.0).abs() < 1e-12);
//!
//! let xs = [0.0_f64, 1.0, 0.0, -1.0];
//! let y = reconstruct(&xs, 0.25, 0.125, Reconstruction::Linear).unwrap();
//! assert!((y - 0.5).abs() < 1e-12);
//! ```

#[cfg(test)]
mod tests;

use crate::traits::{sinc, FloatScalar};

/// Half-width of the sinc interpolation window, in sample periods.
pub const SINC_HALF_WIDTH: usize = 10;

/// Errors from reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResampleError {
    /// No samples to reconstruct from.
    NoSamples,
    /// Sample period is not positive and finite.
    InvalidPeriod,
}

impl core::fmt::Display for ResampleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResampleError::NoSamples => write!(f, "no samples to reconstruct from"),
            ResampleError::InvalidPeriod => {
                write!(f, "sample period must be positive and finite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResampleError {}

/// Reconstruction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reconstruction {
    /// Hold the most recent sample.
    ZeroOrderHold,
    /// Straight line between the bracketing samples.
    #[default]
    Linear,
    /// Whittaker-Shannon sum truncated to ±[`SINC_HALF_WIDTH`] periods.
    Sinc,
}

/// Sample position `t / period`, snapped onto an integer when it lies
/// within 1e-9 of one so sample instants reproduce exactly.
fn snapped_position<T: FloatScalar>(t: T, period: T) -> T {
    let pos = t / period;
    let nearest = pos.round();
    if (pos - nearest).abs() < T::lit(1e-9) {
        nearest
    } else {
        pos
    }
}

/// Value at time `t` reconstructed from `samples` spaced by `period`.
///
/// Before the first sample ZOH and linear return `samples[0]`; after the
/// last they return the last sample. The sinc sum simply runs out of terms.
pub fn reconstruct<T: FloatScalar>(
    samples: &[T],
    period: T,
    t: T,
    method: Reconstruction,
) -> Result<T, ResampleError> {
    if samples.is_empty() {
        return Err(ResampleError::NoSamples);
    }
    if !period.is_finite() || period <= T::zero() {
        return Err(ResampleError::InvalidPeriod);
    }
    let pos = snapped_position(t, period);
    let last = samples.len() - 1;
    let y = match method {
        Reconstruction::ZeroOrderHold => samples[index_floor(pos, last)],
        Reconstruction::Linear => {
            if pos <= T::zero() {
                samples[0]
            } else if pos >= T::from_usize(last) {
                samples[last]
            } else {
                let i = index_floor(pos, last);
                let frac = pos - T::from_usize(i);
                samples[i] + frac * (samples[i + 1] - samples[i])
            }
        }
        Reconstruction::Sinc => {
            let half = T::from_usize(SINC_HALF_WIDTH);
            let lo = (pos - half).ceil().max(T::zero());
            let hi = (pos + half).floor().min(T::from_usize(last));
            let mut acc = T::zero();
            if lo <= hi {
                let (lo, hi) = (index_floor(lo, last), index_floor(hi, last));
                for (k, &x) in samples.iter().enumerate().take(hi + 1).skip(lo) {
                    acc = acc + x * sinc(pos - T::from_usize(k));
                }
            }
            acc
        }
    };
    Ok(y)
}

/// Reconstruct a dense curve: `out[i] = reconstruct(t0 + i·dt)`.
pub fn reconstruct_into<T: FloatScalar>(
    samples: &[T],
    period: T,
    t0: T,
    dt: T,
    method: Reconstruction,
    out: &mut [T],
) -> Result<(), ResampleError> {
    for (i, y) in out.iter_mut().enumerate() {
        *y = reconstruct(samples, period, t0 + T::from_usize(i) * dt, method)?;
    }
    Ok(())
}

/// `floor(pos)` as an index clamped to `[0, last]`.
fn index_floor<T: FloatScalar>(pos: T, last: usize) -> usize {
    if pos.is_nan() || pos <= T::zero() {
        return 0;
    }
    let k = pos.floor().to_usize().unwrap_or(last);
    k.min(last)
}

/// Half the sampling rate.
pub fn nyquist<T: FloatScalar>(sample_rate: T) -> T {
    sample_rate / T::two()
}

/// `true` when `freq` lies above the Nyquist frequency of `sample_rate`.
pub fn is_aliased<T: FloatScalar>(freq: T, sample_rate: T) -> bool {
    freq.abs() > nyquist(sample_rate)
}

/// Frequency perceived after sampling `freq` at `sample_rate`.
///
/// Folds `freq` into `[0, fs)` and then mirrors anything above `fs/2`:
/// `a = freq mod fs; if a > fs/2 { a = fs - a }`.
///
/// ```
/// use sigsim::resample::aliased_frequency;
///
/// assert_eq!(aliased_frequency(3.0_f64, 10.0), 3.0);
/// assert_eq!(aliased_frequency(7.0_f64, 10.0), 3.0);
/// assert_eq!(aliased_frequency(12.0_f64, 10.0), 2.0);
/// ```
pub fn aliased_frequency<T: FloatScalar>(freq: T, sample_rate: T) -> T {
    let a = freq.abs() % sample_rate;
    if a > nyquist(sample_rate) {
        sample_rate - a
    } else {
        a
    }
}
