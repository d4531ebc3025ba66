use crate::traits::FloatScalar;

use super::FilterError;

/// Second-order IIR section in Direct Form II Transposed.
///
/// Transfer function:
/// ```text
/// H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)
/// ```
///
/// The denominator is stored normalized so `a[0] = 1`.
///
/// # Example
///
/// ```
/// use sigsim::filter::Biquad;
///
/// let mut lp = Biquad::lowpass(5.0_f64, 60.0, core::f64::consts::FRAC_1_SQRT_2).unwrap();
/// assert!(lp.is_stable());
/// assert!((lp.dc_gain() - 1.0).abs() < 1e-12);
/// let y = lp.tick(1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Biquad<T> {
    b: [T; 3],
    a: [T; 3], // [1, a1, a2]
    z: [T; 2],
}

/// Shared RBJ cookbook terms: `(cos ω0, α)`.
fn cookbook_terms<T: FloatScalar>(
    cutoff: T,
    sample_rate: T,
    q: T,
) -> Result<(T, T), FilterError> {
    if !sample_rate.is_finite() || sample_rate <= T::zero() {
        return Err(FilterError::InvalidCutoff);
    }
    if !cutoff.is_finite() || cutoff <= T::zero() || cutoff >= sample_rate / T::two() {
        return Err(FilterError::InvalidCutoff);
    }
    if q.is_nan() || q <= T::zero() {
        return Err(FilterError::InvalidQ);
    }
    let w0 = T::tau() * cutoff / sample_rate;
    Ok((w0.cos(), w0.sin() / (T::two() * q)))
}

impl<T: FloatScalar> Biquad<T> {
    /// Create a biquad from numerator `b` and denominator `a` coefficients,
    /// normalizing by `a[0]`.
    pub fn new(b: [T; 3], a: [T; 3]) -> Self {
        let a0 = a[0];
        Self {
            b: [b[0] / a0, b[1] / a0, b[2] / a0],
            a: [T::one(), a[1] / a0, a[2] / a0],
            z: [T::zero(); 2],
        }
    }

    /// Identity filter: output equals input.
    pub fn passthrough() -> Self {
        Self::new([T::one(), T::zero(), T::zero()], [T::one(), T::zero(), T::zero()])
    }

    /// Second-order lowpass at `cutoff` Hz (RBJ cookbook). Unity DC gain.
    pub fn lowpass(cutoff: T, sample_rate: T, q: T) -> Result<Self, FilterError> {
        let (cw, alpha) = cookbook_terms(cutoff, sample_rate, q)?;
        let b1 = T::one() - cw;
        let b0 = b1 / T::two();
        Ok(Self::new(
            [b0, b1, b0],
            [T::one() + alpha, -T::two() * cw, T::one() - alpha],
        ))
    }

    /// Second-order highpass at `cutoff` Hz (RBJ cookbook). Unity gain at Nyquist.
    pub fn highpass(cutoff: T, sample_rate: T, q: T) -> Result<Self, FilterError> {
        let (cw, alpha) = cookbook_terms(cutoff, sample_rate, q)?;
        let b0 = (T::one() + cw) / T::two();
        Ok(Self::new(
            [b0, -(T::one() + cw), b0],
            [T::one() + alpha, -T::two() * cw, T::one() - alpha],
        ))
    }

    /// Bandpass centred on `center` Hz with 0 dB peak gain (RBJ cookbook).
    pub fn bandpass(center: T, sample_rate: T, q: T) -> Result<Self, FilterError> {
        let (cw, alpha) = cookbook_terms(center, sample_rate, q)?;
        Ok(Self::new(
            [alpha, T::zero(), -alpha],
            [T::one() + alpha, -T::two() * cw, T::one() - alpha],
        ))
    }

    /// Process a single input sample, returning the filtered output.
    #[inline]
    pub fn tick(&mut self, x: T) -> T {
        let y = self.b[0] * x + self.z[0];
        self.z[0] = self.b[1] * x - self.a[1] * y + self.z[1];
        self.z[1] = self.b[2] * x - self.a[2] * y;
        y
    }

    /// Reset internal state to zero.
    pub fn reset(&mut self) {
        self.z = [T::zero(); 2];
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

    /// Return the `(b, a)` coefficient arrays.
    pub fn coefficients(&self) -> ([T; 3], [T; 3]) {
        (self.b, self.a)
    }

    /// Gain at DC, `H(1)`.
    pub fn dc_gain(&self) -> T {
        (self.b[0] + self.b[1] + self.b[2]) / (self.a[0] + self.a[1] + self.a[2])
    }

    /// Magnitude response `|H(e^{jω})|` at `freq` Hz.
    pub fn magnitude(&self, freq: T, sample_rate: T) -> T {
        let w = T::tau() * freq / sample_rate;
        let (c1, s1) = (w.cos(), w.sin());
        let (c2, s2) = ((w + w).cos(), (w + w).sin());
        let num_re = self.b[0] + self.b[1] * c1 + self.b[2] * c2;
        let num_im = -(self.b[1] * s1 + self.b[2] * s2);
        let den_re = self.a[0] + self.a[1] * c1 + self.a[2] * c2;
        let den_im = -(self.a[1] * s1 + self.a[2] * s2);
        num_re.hypot(num_im) / den_re.hypot(den_im)
    }

    /// Largest pole magnitude of `z² + a1·z + a2`.
    pub fn pole_radius(&self) -> T {
        let (a1, a2) = (self.a[1], self.a[2]);
        let disc = a1 * a1 - T::lit(4.0) * a2;
        if disc < T::zero() {
            // complex-conjugate pair, |p|² = a2
            a2.abs().sqrt()
        } else {
            let r = disc.sqrt();
            let p1 = (-a1 + r) / T::two();
            let p2 = (-a1 - r) / T::two();
            p1.abs().max(p2.abs())
        }
    }

    /// All poles strictly inside the unit circle. Reported only.
    pub fn is_stable(&self) -> bool {
        self.pole_radius() < T::one()
    }
}
