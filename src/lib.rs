//! # sigsim
//!
//! Numeric kernels for interactive signal-processing, control, and
//! sensor-fusion visualizations. no-std compatible. Everything a widget
//! computes per animation frame lives here; drawing does not.
//!
//! ## Quick start
//!
//! ```
//! use sigsim::filter::OnePole;
//! use sigsim::noise::NoiseSource;
//! use sigsim::signal::{Noisy, Sine};
//!
//! // 1 Hz tone with uniform noise, smoothed at 60 frames per second
//! let mut sig = Noisy::new(Sine::new(1.0_f64, 1.0), NoiseSource::new(7), 0.3);
//! let mut lp = OnePole::new(0.2);
//! let dt = 1.0 / 60.0;
//! for i in 0..120 {
//!     let t = i as f64 * dt;
//!     let y = lp.tick(sig.sample(t));
//!     assert!(y.abs() < 1.3 + 1e-12);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`signal`]: synthetic signals (`Sine`, `SineMix`, `Step`, `Square`,
//!   `Chirp`), time grids and `(t, value)` sample sequences, noisy wrappers.
//! - [`noise`]: seeded uniform and Gaussian noise, fixed noise tables.
//! - [`history`]: const-capacity FIFO of recent values for scrolling plots.
//! - [`filter`]: windowed-sinc FIR, one-pole and RBJ biquad IIR, moving
//!   averages. Design functions return [`filter::FilterError`].
//! - [`resample`]: zero-order hold, linear and sinc reconstruction, Nyquist
//!   and alias helpers.
//! - [`spectrum`]: direct DFT magnitude, bin frequencies, peak picking.
//! - [`control`]: PID with output and anti-windup clamps, bang-bang, and the
//!   [`control::Controller`] trait.
//! - [`fusion`]: complementary tilt filter, scalar Kalman filter, drifting
//!   gyro integrator.
//! - [`ode`]: fixed-step explicit Euler and RK4 on `[T; S]` states.
//! - [`sim`]: DC motor and cart-pole plants, closed-loop wiring.
//! - [`driver`]: run/pause and visibility gated frame stepping.
//! - [`params`]: slider bounds and default parameter records.
//! - [`traits`]: the [`FloatScalar`] bound every kernel is generic over.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std | `Vec`-returning conveniences such as `fir_coefficients` |
//! | `libm`  | no      | Pure-Rust float math; required when building without `std` |
//! | `serde` | no      | `Serialize` / `Deserialize` on parameter records |
//! | `all`   | no      | `std` + `serde` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod control;
pub mod driver;
pub mod filter;
pub mod fusion;
pub mod history;
pub mod noise;
pub mod ode;
pub mod params;
pub mod resample;
pub mod signal;
pub mod sim;
pub mod spectrum;
pub mod traits;

pub use control::{BangBang, Controller, Pid};
pub use driver::{FrameDriver, FrameOutcome, StepFn, Widget};
pub use filter::{Biquad, FilterError, FirFilter, OnePole, Window};
pub use fusion::{Complementary, ScalarKalman};
pub use history::History;
pub use noise::NoiseSource;
pub use signal::{Sample, Signal};
pub use sim::{CartPole, ClosedLoop, DcMotor, Plant};
pub use traits::FloatScalar;
