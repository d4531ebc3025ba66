//! Slider bounds and default parameter records for each widget.
//!
//! Every record has a [`Default`] matching the widget's initial slider
//! positions, a `clamped` method that pulls each field back inside its
//! [`ParamRange`], and a `build` method producing the kernel or plant it
//! configures. With the `serde` feature the records (de)serialize so a
//! host can pass them in as JSON props.
//!
//! # Example
//!
//! ```
//! use sigsim::params::PidParams;
//!
//! // dragged past the end of the slider
//! let p = PidParams { kp: 120.0, ..PidParams::<f64>::default() }.clamped();
//! assert_eq!(p.kp, PidParams::kp_range().max);
//! let pid = p.build();
//! assert_eq!(pid.gains().0, p.kp);
//! ```

#[cfg(test)]
mod tests;

use crate::control::Pid;
use crate::filter::{FilterError, FirFilter, OnePole, Window};
use crate::fusion::{Complementary, GyroIntegrator, ScalarKalman};
use crate::noise::NoiseSource;
use crate::resample::{aliased_frequency, is_aliased, nyquist, Reconstruction};
use crate::sim::{CartPole, DcMotor};
use crate::traits::FloatScalar;

/// Bounds and granularity of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamRange<T> {
    pub min: T,
    pub max: T,
    /// Slider increment. Zero means continuous.
    pub step: T,
}

impl<T: FloatScalar> ParamRange<T> {
    /// # Panics
    ///
    /// Panics if `min > max` or `step < 0`.
    pub fn new(min: T, max: T, step: T) -> Self {
        assert!(min <= max, "ParamRange: min must not exceed max");
        assert!(step >= T::zero(), "ParamRange: step must be non-negative");
        Self { min, max, step }
    }

    /// Pull `v` into `[min, max]`. NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, v: T) -> T {
        if v.is_nan() || v < self.min {
            self.min
        } else if v > self.max {
            self.max
        } else {
            v
        }
    }

    /// Clamp, then round to the nearest `min + k·step`.
    ///
    /// ```
    /// use sigsim::params::ParamRange;
    ///
    /// let r = ParamRange::new(0.0_f64, 1.0, 0.25);
    /// assert_eq!(r.snap(0.3), 0.25);
    /// assert_eq!(r.snap(0.4), 0.5);
    /// assert_eq!(r.snap(7.0), 1.0);
    /// ```
    pub fn snap(&self, v: T) -> T {
        let v = self.clamp(v);
        if self.step == T::zero() {
            return v;
        }
        let k = ((v - self.min) / self.step).round();
        self.clamp(self.min + k * self.step)
    }

    #[inline]
    pub fn contains(&self, v: T) -> bool {
        v >= self.min && v <= self.max
    }

    /// Map `v` to `[0, 1]` across the range, e.g. for a slider thumb.
    pub fn fraction(&self, v: T) -> T {
        let span = self.max - self.min;
        if span == T::zero() {
            return T::zero();
        }
        (self.clamp(v) - self.min) / span
    }
}

fn range<T: FloatScalar>(min: f64, max: f64, step: f64) -> ParamRange<T> {
    ParamRange {
        min: T::lit(min),
        max: T::lit(max),
        step: T::lit(step),
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Windowed-sinc FIR lowpass designer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirParams<T> {
    /// Odd tap count between [`FirParams::MIN_TAPS`] and
    /// [`FirParams::MAX_TAPS`].
    pub taps: usize,
    /// Cutoff as a fraction of the sample rate.
    pub cutoff: T,
    pub window: Window,
}

impl<T: FloatScalar> FirParams<T> {
    pub const MIN_TAPS: usize = 3;
    pub const MAX_TAPS: usize = 63;

    pub fn cutoff_range() -> ParamRange<T> {
        range(0.01, 0.49, 0.01)
    }

    /// Taps forced odd and into bounds, cutoff snapped.
    pub fn clamped(&self) -> Self {
        Self {
            taps: self.taps.clamp(Self::MIN_TAPS, Self::MAX_TAPS) | 1,
            cutoff: Self::cutoff_range().snap(self.cutoff),
            window: self.window,
        }
    }

    /// Design the streaming filter. `M` must equal `taps`, otherwise
    /// [`FilterError::InvalidTaps`] is returned.
    pub fn build<const M: usize>(&self) -> Result<FirFilter<T, M>, FilterError> {
        if M != self.taps {
            return Err(FilterError::InvalidTaps);
        }
        FirFilter::lowpass(self.cutoff, self.window)
    }

    /// Heap-allocated coefficients for `taps` taps.
    #[cfg(feature = "alloc")]
    pub fn coefficients(&self) -> Result<alloc::vec::Vec<T>, FilterError> {
        crate::filter::fir_coefficients(self.taps, self.cutoff, self.window)
    }
}

impl<T: FloatScalar> Default for FirParams<T> {
    fn default() -> Self {
        Self {
            taps: 21,
            cutoff: T::lit(0.1),
            window: Window::Hamming,
        }
    }
}

/// Exponential smoothing blend factor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnePoleParams<T> {
    pub alpha: T,
}

impl<T: FloatScalar> OnePoleParams<T> {
    pub fn alpha_range() -> ParamRange<T> {
        range(0.01, 1.0, 0.01)
    }

    pub fn clamped(&self) -> Self {
        Self {
            alpha: Self::alpha_range().snap(self.alpha),
        }
    }

    pub fn build(&self) -> OnePole<T> {
        OnePole::new(self.alpha)
    }
}

impl<T: FloatScalar> Default for OnePoleParams<T> {
    fn default() -> Self {
        Self { alpha: T::lit(0.1) }
    }
}

// ---------------------------------------------------------------------------
// Sampling and noise
// ---------------------------------------------------------------------------

/// Sampling / aliasing demo: a tone sampled at a given rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingParams<T> {
    /// Tone frequency in Hz.
    pub signal_freq: T,
    /// Sample rate in Hz.
    pub sample_rate: T,
    pub method: Reconstruction,
}

impl<T: FloatScalar> SamplingParams<T> {
    pub fn signal_freq_range() -> ParamRange<T> {
        range(0.5, 20.0, 0.5)
    }

    pub fn sample_rate_range() -> ParamRange<T> {
        range(1.0, 50.0, 1.0)
    }

    pub fn clamped(&self) -> Self {
        Self {
            signal_freq: Self::signal_freq_range().snap(self.signal_freq),
            sample_rate: Self::sample_rate_range().snap(self.sample_rate),
            method: self.method,
        }
    }

    pub fn period(&self) -> T {
        T::one() / self.sample_rate
    }

    pub fn nyquist(&self) -> T {
        nyquist(self.sample_rate)
    }

    pub fn is_aliased(&self) -> bool {
        is_aliased(self.signal_freq, self.sample_rate)
    }

    /// Frequency the samples appear to have.
    pub fn perceived_freq(&self) -> T {
        aliased_frequency(self.signal_freq, self.sample_rate)
    }
}

impl<T: FloatScalar> Default for SamplingParams<T> {
    fn default() -> Self {
        Self {
            signal_freq: T::lit(7.0),
            sample_rate: T::lit(10.0),
            method: Reconstruction::Linear,
        }
    }
}

/// Additive measurement noise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseParams<T> {
    pub level: T,
    pub seed: u64,
}

impl<T: FloatScalar> NoiseParams<T> {
    pub fn level_range() -> ParamRange<T> {
        range(0.0, 1.0, 0.05)
    }

    pub fn clamped(&self) -> Self {
        Self {
            level: Self::level_range().snap(self.level),
            seed: self.seed,
        }
    }

    pub fn source(&self) -> NoiseSource {
        NoiseSource::new(self.seed)
    }
}

impl<T: FloatScalar> Default for NoiseParams<T> {
    fn default() -> Self {
        Self {
            level: T::lit(0.2),
            seed: 42,
        }
    }
}

// ---------------------------------------------------------------------------
// Control and fusion
// ---------------------------------------------------------------------------

/// PID gains and limits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidParams<T> {
    pub kp: T,
    pub ki: T,
    pub kd: T,
    /// Output saturation, `±max_output`.
    pub max_output: T,
    /// Anti-windup bound on the integral. `None` leaves it unbounded.
    pub integral_limit: Option<T>,
}

impl<T: FloatScalar> PidParams<T> {
    pub fn kp_range() -> ParamRange<T> {
        range(0.0, 50.0, 0.1)
    }

    pub fn ki_range() -> ParamRange<T> {
        range(0.0, 10.0, 0.1)
    }

    pub fn kd_range() -> ParamRange<T> {
        range(0.0, 5.0, 0.01)
    }

    pub fn max_output_range() -> ParamRange<T> {
        range(0.1, 20.0, 0.1)
    }

    pub fn integral_limit_range() -> ParamRange<T> {
        range(0.0, 100.0, 0.1)
    }

    /// Every field snapped into range. A present integral limit stays
    /// present.
    pub fn clamped(&self) -> Self {
        Self {
            kp: Self::kp_range().snap(self.kp),
            ki: Self::ki_range().snap(self.ki),
            kd: Self::kd_range().snap(self.kd),
            max_output: Self::max_output_range().snap(self.max_output),
            integral_limit: self
                .integral_limit
                .map(|l| Self::integral_limit_range().snap(l)),
        }
    }

    /// # Panics
    ///
    /// Panics if `max_output` is not positive or `integral_limit` is
    /// negative. Records passed through [`PidParams::clamped`] never
    /// panic.
    pub fn build(&self) -> Pid<T> {
        let pid = Pid::new(self.kp, self.ki, self.kd).with_output_limit(self.max_output);
        match self.integral_limit {
            Some(limit) => pid.with_integral_limit(limit),
            None => pid,
        }
    }
}

impl<T: FloatScalar> Default for PidParams<T> {
    fn default() -> Self {
        Self {
            kp: T::lit(5.0),
            ki: T::one(),
            kd: T::lit(0.3),
            max_output: T::two(),
            integral_limit: None,
        }
    }
}

/// Complementary tilt filter plus the gyro bias it has to fight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplementaryParams<T> {
    pub alpha: T,
    /// Constant gyro bias in rad/s.
    pub gyro_bias: T,
}

impl<T: FloatScalar> ComplementaryParams<T> {
    pub fn alpha_range() -> ParamRange<T> {
        range(0.5, 1.0, 0.01)
    }

    pub fn gyro_bias_range() -> ParamRange<T> {
        range(-0.1, 0.1, 0.005)
    }

    pub fn clamped(&self) -> Self {
        Self {
            alpha: Self::alpha_range().snap(self.alpha),
            gyro_bias: Self::gyro_bias_range().snap(self.gyro_bias),
        }
    }

    pub fn build(&self) -> Complementary<T> {
        Complementary::new(self.alpha)
    }

    /// Bare gyro integration with the same bias, for the drift trace.
    pub fn gyro(&self) -> GyroIntegrator<T> {
        GyroIntegrator::new(self.gyro_bias)
    }
}

impl<T: FloatScalar> Default for ComplementaryParams<T> {
    fn default() -> Self {
        Self {
            alpha: T::lit(0.98),
            gyro_bias: T::lit(0.01),
        }
    }
}

/// Scalar Kalman noise variances and prior.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KalmanParams<T> {
    /// Process noise variance.
    pub q: T,
    /// Measurement noise variance.
    pub r: T,
    pub x0: T,
    pub p0: T,
}

impl<T: FloatScalar> KalmanParams<T> {
    pub fn q_range() -> ParamRange<T> {
        range(0.0001, 1.0, 0.0001)
    }

    pub fn r_range() -> ParamRange<T> {
        range(0.01, 5.0, 0.01)
    }

    pub fn clamped(&self) -> Self {
        Self {
            q: Self::q_range().snap(self.q),
            r: Self::r_range().snap(self.r),
            ..*self
        }
    }

    pub fn build(&self) -> ScalarKalman<T> {
        ScalarKalman::new(self.x0, self.p0, self.q, self.r)
    }
}

impl<T: FloatScalar> Default for KalmanParams<T> {
    fn default() -> Self {
        Self {
            q: T::lit(0.01),
            r: T::lit(0.5),
            x0: T::zero(),
            p0: T::one(),
        }
    }
}

// ---------------------------------------------------------------------------
// Plants
// ---------------------------------------------------------------------------

/// DC motor physical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorParams<T> {
    /// Rotor inertia, kg·m².
    pub inertia: T,
    /// Viscous friction, N·m·s.
    pub viscous: T,
    /// Coulomb friction torque, N·m.
    pub coulomb: T,
    pub max_torque: T,
}

impl<T: FloatScalar> MotorParams<T> {
    pub fn inertia_range() -> ParamRange<T> {
        range(0.001, 0.1, 0.001)
    }

    pub fn viscous_range() -> ParamRange<T> {
        range(0.0, 1.0, 0.01)
    }

    pub fn coulomb_range() -> ParamRange<T> {
        range(0.0, 0.5, 0.01)
    }

    pub fn max_torque_range() -> ParamRange<T> {
        range(0.1, 10.0, 0.1)
    }

    pub fn clamped(&self) -> Self {
        Self {
            inertia: Self::inertia_range().snap(self.inertia),
            viscous: Self::viscous_range().snap(self.viscous),
            coulomb: Self::coulomb_range().snap(self.coulomb),
            max_torque: Self::max_torque_range().snap(self.max_torque),
        }
    }

    pub fn build(&self) -> DcMotor<T> {
        DcMotor::new(self.inertia, self.viscous, self.coulomb, self.max_torque)
    }
}

impl<T: FloatScalar> Default for MotorParams<T> {
    fn default() -> Self {
        Self {
            inertia: T::lit(0.01),
            viscous: T::lit(0.1),
            coulomb: T::lit(0.02),
            max_torque: T::two(),
        }
    }
}

/// Cart-pole physical constants and starting tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartPoleParams<T> {
    pub cart_mass: T,
    pub pole_mass: T,
    pub half_length: T,
    pub max_force: T,
    pub track_limit: T,
    pub initial_angle: T,
}

impl<T: FloatScalar> CartPoleParams<T> {
    pub fn cart_mass_range() -> ParamRange<T> {
        range(0.1, 5.0, 0.1)
    }

    pub fn pole_mass_range() -> ParamRange<T> {
        range(0.01, 1.0, 0.01)
    }

    pub fn half_length_range() -> ParamRange<T> {
        range(0.1, 2.0, 0.05)
    }

    pub fn max_force_range() -> ParamRange<T> {
        range(1.0, 50.0, 0.5)
    }

    pub fn track_limit_range() -> ParamRange<T> {
        range(0.5, 5.0, 0.1)
    }

    pub fn initial_angle_range() -> ParamRange<T> {
        range(-0.5, 0.5, 0.01)
    }

    pub fn clamped(&self) -> Self {
        Self {
            cart_mass: Self::cart_mass_range().snap(self.cart_mass),
            pole_mass: Self::pole_mass_range().snap(self.pole_mass),
            half_length: Self::half_length_range().snap(self.half_length),
            max_force: Self::max_force_range().snap(self.max_force),
            track_limit: Self::track_limit_range().snap(self.track_limit),
            initial_angle: Self::initial_angle_range().snap(self.initial_angle),
        }
    }

    pub fn build(&self) -> CartPole<T> {
        CartPole::new(self.cart_mass, self.pole_mass, self.half_length)
            .with_max_force(self.max_force)
            .with_track_limit(self.track_limit)
            .with_initial_angle(self.initial_angle)
    }
}

impl<T: FloatScalar> Default for CartPoleParams<T> {
    fn default() -> Self {
        Self {
            cart_mass: T::one(),
            pole_mass: T::lit(0.1),
            half_length: T::half(),
            max_force: T::lit(10.0),
            track_limit: T::lit(2.4),
            initial_angle: T::lit(0.1),
        }
    }
}
