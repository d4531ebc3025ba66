use crate::traits::{clamp, FloatScalar};

/// Contributions of each term to the last PID output, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidTerms<T> {
    pub p: T,
    pub i: T,
    pub d: T,
}

impl<T: FloatScalar> PidTerms<T> {
    /// Unclamped sum `p + i + d`.
    pub fn total(&self) -> T {
        self.p + self.i + self.d
    }
}

/// Discrete-time PID controller.
///
/// ```text
/// u = Kp·e + Ki·∫e dt + Kd·(e - e_prev)/dt
/// ```
///
/// The integral is a rectangle-rule sum of `e·dt`, optionally clamped to
/// `±integral_limit` (anti-windup). The derivative acts on the error, so a
/// setpoint jump produces a one-step kick. The output is clamped to
/// `±max_output`.
///
/// # Example
///
/// ```
/// use sigsim::control::Pid;
///
/// let mut pid = Pid::new(2.0_f64, 0.0, 0.0);
/// let u = pid.tick(10.0, 3.0, 0.01); // error = 7
/// assert!((u - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pid<T> {
    // Configuration
    kp: T,
    ki: T,
    kd: T,
    max_output: T,
    integral_limit: T,

    // State
    integral: T,
    prev_error: T,
    terms: PidTerms<T>,
}

impl<T: FloatScalar> Pid<T> {
    /// Create an unclamped PID controller with the given gains.
    pub fn new(kp: T, ki: T, kd: T) -> Self {
        Self {
            kp,
            ki,
            kd,
            max_output: T::infinity(),
            integral_limit: T::infinity(),
            integral: T::zero(),
            prev_error: T::zero(),
            terms: PidTerms::default(),
        }
    }

    /// Clamp the output to `[-max, max]`. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `max <= 0`.
    pub fn with_output_limit(mut self, max: T) -> Self {
        assert!(max > T::zero(), "output limit must be positive");
        self.max_output = max;
        self
    }

    /// Clamp the accumulated `∫e dt` to `[-limit, limit]`. Returns `self`
    /// for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `limit < 0` or is NaN.
    pub fn with_integral_limit(mut self, limit: T) -> Self {
        assert!(limit >= T::zero(), "integral limit must be non-negative");
        self.integral_limit = limit;
        self
    }

    /// Advance one step of length `dt` with the given error and return the
    /// clamped control output.
    ///
    /// `dt` must be positive; zero yields a non-finite derivative term.
    #[inline]
    pub fn update(&mut self, error: T, dt: T) -> T {
        debug_assert!(dt > T::zero(), "dt must be positive");

        self.integral = clamp(
            self.integral + error * dt,
            -self.integral_limit,
            self.integral_limit,
        );
        let derivative = (error - self.prev_error) / dt;

        self.terms = PidTerms {
            p: self.kp * error,
            i: self.ki * self.integral,
            d: self.kd * derivative,
        };
        self.prev_error = error;

        clamp(self.terms.total(), -self.max_output, self.max_output)
    }

    /// [`update`](Self::update) with `error = setpoint - measurement`.
    #[inline]
    pub fn tick(&mut self, setpoint: T, measurement: T, dt: T) -> T {
        self.update(setpoint - measurement, dt)
    }

    /// Zero the integral and previous error. Gains and limits are kept.
    ///
    /// ```
    /// use sigsim::control::Pid;
    ///
    /// let mut pid = Pid::new(1.0_f64, 1.0, 0.0);
    /// pid.tick(1.0, 0.0, 0.1);
    /// pid.reset();
    /// assert_eq!(pid.integral(), 0.0);
    /// ```
    pub fn reset(&mut self) {
        self.integral = T::zero();
        self.prev_error = T::zero();
        self.terms = PidTerms::default();
    }

    /// Return the current `(kp, ki, kd)` gains.
    pub fn gains(&self) -> (T, T, T) {
        (self.kp, self.ki, self.kd)
    }

    /// Update the gains at runtime without touching the state.
    pub fn set_gains(&mut self, kp: T, ki: T, kd: T) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
    }

    /// Accumulated `∫e dt`.
    pub fn integral(&self) -> T {
        self.integral
    }

    pub fn prev_error(&self) -> T {
        self.prev_error
    }

    /// Per-term breakdown of the last update.
    pub fn terms(&self) -> PidTerms<T> {
        self.terms
    }

    pub fn output_limit(&self) -> T {
        self.max_output
    }
}
