use crate::traits::FloatScalar;

/// Tilt angle (radians) from accelerometer axes, `atan2(ax, az)`.
#[inline]
pub fn accel_angle<T: FloatScalar>(ax: T, az: T) -> T {
    ax.atan2(az)
}

/// Complementary filter blending integrated gyro rate with an absolute
/// angle measurement.
///
/// ```text
/// angle = α·(angle + rate·dt) + (1 - α)·measured
/// ```
///
/// `α` near 1 trusts the gyro over short horizons while the measurement
/// slowly pulls out the drift.
///
/// # Example
///
/// ```
/// use sigsim::fusion::Complementary;
///
/// let mut cf = Complementary::new(0.98_f64);
/// let a = cf.update(0.0, 1.0, 0.01);
/// assert!((a - 0.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Complementary<T> {
    alpha: T,
    initial: T,
    angle: T,
}

impl<T: FloatScalar> Complementary<T> {
    pub fn new(alpha: T) -> Self {
        Self {
            alpha,
            initial: T::zero(),
            angle: T::zero(),
        }
    }

    /// Start (and reset) from `angle`. Returns `self` for chaining.
    pub fn with_initial(mut self, angle: T) -> Self {
        self.initial = angle;
        self.angle = angle;
        self
    }

    /// Fuse one gyro rate and one measured angle over `dt`, returning the
    /// new estimate.
    #[inline]
    pub fn update(&mut self, gyro_rate: T, measured: T, dt: T) -> T {
        self.angle =
            self.alpha * (self.angle + gyro_rate * dt) + (T::one() - self.alpha) * measured;
        self.angle
    }

    pub fn angle(&self) -> T {
        self.angle
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha;
    }

    /// Crossover time constant `τ = α·dt / (1 - α)` for a given step.
    pub fn time_constant(&self, dt: T) -> T {
        self.alpha * dt / (T::one() - self.alpha)
    }

    pub fn reset(&mut self) {
        self.angle = self.initial;
    }
}

/// Gyro-only angle estimate, `angle += (rate + bias)·dt`.
///
/// With a non-zero bias the estimate drifts linearly, which is the point of
/// the drift demo.
#[derive(Debug, Clone, Copy)]
pub struct GyroIntegrator<T> {
    bias: T,
    angle: T,
}

impl<T: FloatScalar> GyroIntegrator<T> {
    pub fn new(bias: T) -> Self {
        Self {
            bias,
            angle: T::zero(),
        }
    }

    #[inline]
    pub fn update(&mut self, rate: T, dt: T) -> T {
        self.angle = self.angle + (rate + self.bias) * dt;
        self.angle
    }

    pub fn angle(&self) -> T {
        self.angle
    }

    pub fn bias(&self) -> T {
        self.bias
    }

    pub fn set_bias(&mut self, bias: T) {
        self.bias = bias;
    }

    pub fn reset(&mut self) {
        self.angle = T::zero();
    }
}
