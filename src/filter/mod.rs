//! Digital filters: windowed-sinc FIR, single-pole and biquad IIR, moving
//! averages.
//!
//! Design functions validate their parameters and return [`FilterError`];
//! the per-sample `tick` paths are infallible and let NaN through.
//!
//! # Examples
//!
//! ```
//! use sigsim::filter::{fir_lowpass, FirFilter, Window};
//!
//! // 7-tap Hamming lowpass at a quarter of the sample rate
//! let h: [f64; 7] = fir_lowpass(0.25, Window::Hamming).unwrap();
//! assert!((h.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//!
//! let mut lpf = FirFilter::new(h);
//! let y = lpf.tick(1.0);
//! ```
//!
//! ```
//! use sigsim::filter::OnePole;
//!
//! // Exponential smoothing, 10 Hz cutoff at 60 frames per second
//! let mut lp = OnePole::from_cutoff(10.0_f64, 60.0);
//! let y = lp.tick(1.0);
//! assert!(y > 0.0 && y < 1.0);
//! ```

mod biquad;
mod fir;
mod iir;
mod moving_average;


pub use biquad::Biquad;
#[cfg(feature = "alloc")]
pub use fir::fir_coefficients;
pub use fir::{convolve, fir_lowpass, fir_lowpass_into, fir_response, FirFilter};
pub use iir::OnePole;
pub use moving_average::{moving_average, MovingAverage};

use crate::traits::FloatScalar;

/// Errors from filter design functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Zero taps requested, or a tap count that disagrees with the record
    /// it was built from.
    InvalidTaps,
    /// Cutoff outside `(0, 0.5)` (normalized) or `(0, sample_rate/2)` (Hz).
    InvalidCutoff,
    /// Quality factor is not positive.
    InvalidQ,
    /// Averaging window of length zero.
    EmptyWindow,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterError::InvalidTaps => write!(f, "invalid filter tap count"),
            FilterError::InvalidCutoff => {
                write!(f, "cutoff frequency must be in (0, nyquist)")
            }
            FilterError::InvalidQ => write!(f, "quality factor must be positive"),
            FilterError::EmptyWindow => write!(f, "averaging window must not be empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}

/// Taper applied to a windowed-sinc design or to a block before a DFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Window {
    Rectangular,
    #[default]
    Hamming,
    Blackman,
}

impl Window {
    /// Window weight for index `n` of a `len`-point window.
    ///
    /// A single-point window is `1` for every shape.
    pub fn weight<T: FloatScalar>(self, n: usize, len: usize) -> T {
        if len <= 1 {
            return T::one();
        }
        let x = T::tau() * T::from_usize(n) / T::from_usize(len - 1);
        match self {
            Window::Rectangular => T::one(),
            Window::Hamming => T::lit(0.54) - T::lit(0.46) * x.cos(),
            Window::Blackman => {
                T::lit(0.42) - T::lit(0.5) * x.cos() + T::lit(0.08) * (x + x).cos()
            }
        }
    }
}

/// Check a cutoff normalized to the sample rate lies in `(0, 0.5)`.
pub(super) fn validate_normalized_cutoff<T: FloatScalar>(cutoff: T) -> Result<(), FilterError> {
    if !cutoff.is_finite() || cutoff <= T::zero() || cutoff >= T::half() {
        return Err(FilterError::InvalidCutoff);
    }
    Ok(())
}
