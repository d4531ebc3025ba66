use crate::traits::FloatScalar;

use super::{validate_normalized_cutoff, FilterError, Window};

/// Design a windowed-sinc lowpass into `h`, normalized to unity DC gain.
///
/// `cutoff` is normalized to the sample rate and must lie in `(0, 0.5)`.
/// The ideal response is `2·fc` at the centre tap and
/// `sin(2π·fc·(n-m)) / (π·(n-m))` elsewhere, with `m = (len-1)/2`.
pub fn fir_lowpass_into<T: FloatScalar>(
    h: &mut [T],
    cutoff: T,
    window: Window,
) -> Result<(), FilterError> {
    if h.is_empty() {
        return Err(FilterError::InvalidTaps);
    }
    validate_normalized_cutoff(cutoff)?;

    let len = h.len();
    let m = T::from_usize(len - 1) / T::two();
    let mut sum = T::zero();
    for (n, coeff) in h.iter_mut().enumerate() {
        let k = T::from_usize(n) - m;
        let ideal = if k == T::zero() {
            T::two() * cutoff
        } else {
            (T::tau() * cutoff * k).sin() / (T::pi() * k)
        };
        *coeff = ideal * window.weight::<T>(n, len);
        sum = sum + *coeff;
    }
    for coeff in h.iter_mut() {
        *coeff = *coeff / sum;
    }
    Ok(())
}

/// Design an `M`-tap windowed-sinc lowpass (stack-allocated).
///
/// # Example
///
/// ```
/// use sigsim::filter::{fir_lowpass, Window};
///
/// let h: [f64; 7] = fir_lowpass(0.25, Window::Hamming).unwrap();
/// for i in 0..7 {
///     assert!((h[i] - h[6 - i]).abs() < 1e-15);
/// }
/// ```
pub fn fir_lowpass<T: FloatScalar, const M: usize>(
    cutoff: T,
    window: Window,
) -> Result<[T; M], FilterError> {
    let mut h = [T::zero(); M];
    fir_lowpass_into(&mut h, cutoff, window)?;
    Ok(h)
}

/// Design a `taps`-long windowed-sinc lowpass (heap-allocated).
///
/// ```
/// use sigsim::filter::{fir_coefficients, Window};
///
/// let h = fir_coefficients(7, 0.25_f64, Window::Hamming).unwrap();
/// assert_eq!(h.len(), 7);
/// assert!((h.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[cfg(feature = "alloc")]
pub fn fir_coefficients<T: FloatScalar>(
    taps: usize,
    cutoff: T,
    window: Window,
) -> Result<alloc::vec::Vec<T>, FilterError> {
    let mut h = alloc::vec![T::zero(); taps];
    fir_lowpass_into(&mut h, cutoff, window)?;
    Ok(h)
}

/// Convolve `input` with `coeffs` into `output`, treating samples before
/// index 0 as zero.
///
/// `y[n] = Σ_k h[k]·x[n-k]`. Exactly `input.len()` outputs are written.
///
/// # Panics
///
/// Panics if `output.len() < input.len()`.
pub fn convolve<T: FloatScalar>(input: &[T], coeffs: &[T], output: &mut [T]) {
    assert!(output.len() >= input.len());
    for n in 0..input.len() {
        let mut acc = T::zero();
        for (k, &h) in coeffs.iter().enumerate().take(n + 1) {
            acc = acc + h * input[n - k];
        }
        output[n] = acc;
    }
}

/// Magnitude of the FIR frequency response at `freq`, normalized to the
/// sample rate (`0.5` is Nyquist).
pub fn fir_response<T: FloatScalar>(coeffs: &[T], freq: T) -> T {
    let w = T::tau() * freq;
    let (mut re, mut im) = (T::zero(), T::zero());
    for (k, &h) in coeffs.iter().enumerate() {
        let phi = w * T::from_usize(k);
        re = re + h * phi.cos();
        im = im - h * phi.sin();
    }
    re.hypot(im)
}

/// Streaming FIR filter with an `M`-sample delay line.
///
/// # Example
///
/// ```
/// use sigsim::filter::FirFilter;
///
/// // 3-point moving average
/// let mut f = FirFilter::new([1.0_f64 / 3.0; 3]);
/// f.tick(3.0);
/// f.tick(6.0);
/// assert!((f.tick(9.0) - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FirFilter<T, const M: usize> {
    coeffs: [T; M],
    delay: [T; M],
    pos: usize, // slot the next input goes into
}

impl<T: FloatScalar, const M: usize> FirFilter<T, M> {
    pub fn new(coeffs: [T; M]) -> Self {
        Self {
            coeffs,
            delay: [T::zero(); M],
            pos: 0,
        }
    }

    /// Windowed-sinc lowpass, see [`fir_lowpass`].
    pub fn lowpass(cutoff: T, window: Window) -> Result<Self, FilterError> {
        Ok(Self::new(fir_lowpass(cutoff, window)?))
    }

    /// Process a single input sample, returning the filtered output.
    #[inline]
    pub fn tick(&mut self, x: T) -> T {
        if M == 0 {
            return T::zero();
        }
        self.delay[self.pos] = x;
        let mut acc = T::zero();
        for (k, &h) in self.coeffs.iter().enumerate() {
            acc = acc + h * self.delay[(self.pos + M - k) % M];
        }
        self.pos = (self.pos + 1) % M;
        acc
    }

    /// Clear the delay line.
    pub fn reset(&mut self) {
        self.delay = [T::zero(); M];
        self.pos = 0;
    }

    /// Process a slice of input samples into an output slice.
    ///
    /// # Panics
    ///
    /// Panics if `output.len() < input.len()`.
    pub fn process(&mut self, input: &[T], output: &mut [T]) {
        assert!(output.len() >= input.len());
        for (y, &x) in output.iter_mut().zip(input) {
            *y = self.tick(x);
        }
    }

    /// Process a slice of samples in-place.
    pub fn process_inplace(&mut self, data: &mut [T]) {
        for sample in data.iter_mut() {
            *sample = self.tick(*sample);
        }
    }

    pub fn coefficients(&self) -> &[T; M] {
        &self.coeffs
    }

    /// Group delay in samples, `(M - 1) / 2` for the symmetric designs.
    pub fn delay_samples(&self) -> T {
        if M == 0 {
            return T::zero();
        }
        T::from_usize(M - 1) / T::two()
    }
}
