//! Scalar sensor fusion: complementary filter, one-dimensional Kalman
//! filter, and raw gyro integration.
//!
//! The tilt demos combine a gyro (fast, drifting) with an accelerometer
//! (noisy, drift-free). Each estimator here carries a single scalar state.
//!
//! # Example
//!
//! ```
//! use sigsim::fusion::ScalarKalman;
//!
//! let mut kf = ScalarKalman::new(0.0_f64, 1.0, 0.01, 0.5);
//! kf.predict(0.0);
//! let gain = kf.update(1.0);
//! assert!(gain > 0.0 && gain < 1.0);
//! assert!(kf.estimate() > 0.0 && kf.estimate() < 1.0);
//! ```

mod complementary;
mod kalman;


pub use complementary::{accel_angle, Complementary, GyroIntegrator};
pub use kalman::ScalarKalman;
