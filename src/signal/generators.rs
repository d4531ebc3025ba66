use crate::noise::NoiseSource;
use crate::traits::FloatScalar;

use super::Signal;

/// Sinusoid `offset + amplitude · sin(2π·frequency·t + phase)`.
///
/// # Example
///
/// ```
/// use sigsim::signal::{Signal, Sine};
///
/// let s = Sine::new(2.0_f64, 0.5).with_offset(1.0);
/// assert!((s.value(0.5) - 3.0).abs() < 1e-12); // quarter period → peak
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sine<T> {
    pub amplitude: T,
    pub frequency: T,
    pub phase: T,
    pub offset: T,
}

impl<T: FloatScalar> Sine<T> {
    /// Zero-phase, zero-offset sinusoid.
    pub fn new(amplitude: T, frequency: T) -> Self {
        Self {
            amplitude,
            frequency,
            phase: T::zero(),
            offset: T::zero(),
        }
    }

    /// Set the phase in radians. Returns `self` for chaining.
    pub fn with_phase(mut self, phase: T) -> Self {
        self.phase = phase;
        self
    }

    /// Set the DC offset. Returns `self` for chaining.
    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }

    /// Period in seconds (`1 / frequency`).
    pub fn period(&self) -> T {
        T::one() / self.frequency
    }
}

impl<T: FloatScalar> Signal<T> for Sine<T> {
    #[inline]
    fn value(&self, t: T) -> T {
        self.offset + self.amplitude * (T::tau() * self.frequency * t + self.phase).sin()
    }
}

/// Sum of `N` sinusoids, e.g. a low "wanted" tone plus high-frequency hash.
///
/// ```
/// use sigsim::signal::{Signal, Sine, SineMix};
///
/// let mix = SineMix::new([Sine::new(1.0_f64, 2.0), Sine::new(0.3, 40.0)]);
/// assert_eq!(mix.value(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineMix<T, const N: usize> {
    pub components: [Sine<T>; N],
}

impl<T: FloatScalar, const N: usize> SineMix<T, N> {
    pub fn new(components: [Sine<T>; N]) -> Self {
        Self { components }
    }
}

impl<T: FloatScalar, const N: usize> Signal<T> for SineMix<T, N> {
    #[inline]
    fn value(&self, t: T) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, c| acc + c.value(t))
    }
}

/// Step from `low` to `high` at `time`. The step value applies at `t == time`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<T> {
    pub time: T,
    pub low: T,
    pub high: T,
}

impl<T: FloatScalar> Step<T> {
    /// Unit step (`0 → 1`) at `time`.
    pub fn unit(time: T) -> Self {
        Self {
            time,
            low: T::zero(),
            high: T::one(),
        }
    }
}

impl<T: FloatScalar> Signal<T> for Step<T> {
    #[inline]
    fn value(&self, t: T) -> T {
        if t >= self.time {
            self.high
        } else {
            self.low
        }
    }
}

/// Square wave following the sign of a zero-phase sine: `+amplitude` for
/// the first half of each period, `-amplitude` for the second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square<T> {
    pub amplitude: T,
    pub frequency: T,
}

impl<T: FloatScalar> Square<T> {
    pub fn new(amplitude: T, frequency: T) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

impl<T: FloatScalar> Signal<T> for Square<T> {
    #[inline]
    fn value(&self, t: T) -> T {
        // phase within the period, in [0, 1)
        let x = self.frequency * t;
        let frac = x - x.floor();
        if frac < T::half() {
            self.amplitude
        } else {
            -self.amplitude
        }
    }
}

/// Linear chirp sweeping `f0 → f1` over `duration` seconds.
///
/// Instantaneous frequency is `f0 + (f1 - f0)·t / duration`; the sweep keeps
/// going past `duration` at the same rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chirp<T> {
    pub amplitude: T,
    pub f0: T,
    pub f1: T,
    pub duration: T,
}

impl<T: FloatScalar> Chirp<T> {
    pub fn new(amplitude: T, f0: T, f1: T, duration: T) -> Self {
        Self {
            amplitude,
            f0,
            f1,
            duration,
        }
    }

    /// Instantaneous frequency at `t`.
    pub fn frequency_at(&self, t: T) -> T {
        self.f0 + (self.f1 - self.f0) * t / self.duration
    }
}

impl<T: FloatScalar> Signal<T> for Chirp<T> {
    #[inline]
    fn value(&self, t: T) -> T {
        let k = (self.f1 - self.f0) / self.duration;
        let phase = T::tau() * (self.f0 * t + k * t * t / T::two());
        self.amplitude * phase.sin()
    }
}

/// A signal with additive uniform noise in `[-level, level)`.
///
/// Drawing noise advances the generator, so sampling goes through
/// [`Noisy::sample`] rather than [`Signal::value`]; [`Noisy::clean`] gives
/// the noiseless value for plotting the "true" trace.
///
/// ```
/// use sigsim::noise::NoiseSource;
/// use sigsim::signal::{Noisy, Sine};
///
/// let mut noisy = Noisy::new(Sine::new(1.0_f64, 1.0), NoiseSource::new(7), 0.1);
/// let x = noisy.sample(0.25);
/// assert!((x - 1.0).abs() <= 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct Noisy<S, T> {
    signal: S,
    noise: NoiseSource,
    level: T,
}

impl<T: FloatScalar, S: Signal<T>> Noisy<S, T> {
    pub fn new(signal: S, noise: NoiseSource, level: T) -> Self {
        Self {
            signal,
            noise,
            level,
        }
    }

    /// Noisy value at `t`. Each call draws a fresh noise value.
    #[inline]
    pub fn sample(&mut self, t: T) -> T {
        let n: T = self.noise.uniform();
        self.signal.value(t) + self.level * n
    }

    /// Underlying noiseless value at `t`.
    #[inline]
    pub fn clean(&self, t: T) -> T {
        self.signal.value(t)
    }

    /// Fill `out` with noisy samples at `t0 + i·dt`.
    pub fn fill(&mut self, t0: T, dt: T, out: &mut [super::Sample<T>]) {
        for (i, slot) in out.iter_mut().enumerate() {
            let t = t0 + T::from_usize(i) * dt;
            *slot = super::Sample::new(t, self.sample(t));
        }
    }

    pub fn noise_level(&self) -> T {
        self.level
    }

    pub fn set_noise_level(&mut self, level: T) {
        self.level = level;
    }

    /// Restart the noise stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.noise.reseed(seed);
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    pub fn signal_mut(&mut self) -> &mut S {
        &mut self.signal
    }
}
