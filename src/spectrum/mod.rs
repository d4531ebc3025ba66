//! Discrete Fourier magnitude spectrum by direct summation.
//!
//! Frames hold a few hundred samples and only the first handful of bins are
//! plotted, so the O(N·K) correlation is computed directly.
//!
//! ```
//! use sigsim::spectrum::{dft_magnitude, peak_bin};
//!
//! // 4 cycles over 64 samples lands in bin 4
//! let x: Vec<f64> = (0..64)
//!     .map(|n| (std::f64::consts::TAU * 4.0 * n as f64 / 64.0).sin())
//!     .collect();
//! let mut mags = [0.0; 16];
//! dft_magnitude(&x, &mut mags).unwrap();
//! assert_eq!(peak_bin(&mags), Some(4));
//! assert!((mags[4] - 0.5).abs() < 1e-12);
//! ```


use crate::filter::Window;
use crate::traits::FloatScalar;

/// Errors from spectrum computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpectrumError {
    /// Input block is empty.
    EmptyInput,
}

impl core::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpectrumError::EmptyInput => write!(f, "cannot take the spectrum of an empty block"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpectrumError {}

/// Magnitudes of the first `output.len()` DFT bins of `input`, divided by
/// `N = input.len()`.
///
/// `|X_k| / N` with `X_k = Σ_n x[n]·e^{-j2πkn/N}`. A unit-amplitude sinusoid
/// centred on a bin shows up with magnitude `0.5`; DC with its mean value.
pub fn dft_magnitude<T: FloatScalar>(input: &[T], output: &mut [T]) -> Result<(), SpectrumError> {
    if input.is_empty() {
        return Err(SpectrumError::EmptyInput);
    }
    let n = T::from_usize(input.len());
    for (k, mag) in output.iter_mut().enumerate() {
        let w = T::tau() * T::from_usize(k) / n;
        let (mut re, mut im) = (T::zero(), T::zero());
        for (i, &x) in input.iter().enumerate() {
            let phi = w * T::from_usize(i);
            re = re + x * phi.cos();
            im = im - x * phi.sin();
        }
        *mag = re.hypot(im) / n;
    }
    Ok(())
}

/// Centre frequency of bin `k` for an `n`-point DFT at `sample_rate`.
pub fn bin_frequency<T: FloatScalar>(k: usize, n: usize, sample_rate: T) -> T {
    T::from_usize(k) * sample_rate / T::from_usize(n)
}

/// Multiply `data` in place by `window`.
pub fn apply_window<T: FloatScalar>(data: &mut [T], window: Window) {
    let len = data.len();
    for (n, x) in data.iter_mut().enumerate() {
        *x = *x * window.weight::<T>(n, len);
    }
}

/// Index of the largest magnitude, ignoring NaN. `None` for an empty slice.
pub fn peak_bin<T: FloatScalar>(mags: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (k, &m) in mags.iter().enumerate() {
        if m.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if b >= m => {}
            _ => best = Some((k, m)),
        }
    }
    best.map(|(k, _)| k)
}
