//! Run/pause and visibility gated stepping of a widget.
//!
//! A host calls [`FrameDriver::frame`] (or [`FrameDriver::advance`] with
//! real elapsed time) once per animation frame. Simulated time only moves
//! while the driver is both running and visible. Drawing is left to the
//! caller: it should redraw on [`FrameOutcome::Stepped`] and
//! [`FrameOutcome::Paused`] and skip it on [`FrameOutcome::Hidden`].
//!
//! # Example
//!
//! ```
//! use sigsim::driver::{FrameDriver, FrameOutcome, StepFn};
//!
//! // exponential decay toward zero, rate as the parameter
//! let sim = StepFn::new(1.0_f64, 2.0_f64, |x: &f64, k: &f64, dt: f64| x - k * x * dt);
//! let mut drv = FrameDriver::new(sim, 1.0 / 60.0);
//!
//! assert_eq!(drv.frame(), FrameOutcome::Stepped);
//! drv.pause();
//! assert_eq!(drv.frame(), FrameOutcome::Paused);
//! assert_eq!(drv.steps(), 1);
//! ```

mod step_fn;


pub use step_fn::StepFn;

use crate::control::Controller;
use crate::sim::{ClosedLoop, Plant};
use crate::traits::FloatScalar;

/// Default cap on fixed steps taken by a single [`FrameDriver::advance`].
pub const DEFAULT_MAX_STEPS: usize = 8;

/// Anything that advances in fixed steps and can be put back to its
/// initial state.
pub trait Widget<T: FloatScalar> {
    fn step(&mut self, dt: T);

    fn reset(&mut self);
}

impl<T: FloatScalar, P: Plant<T>, C: Controller<T>> Widget<T> for ClosedLoop<P, C, T> {
    fn step(&mut self, dt: T) {
        ClosedLoop::step(self, dt);
    }

    fn reset(&mut self) {
        ClosedLoop::reset(self);
    }
}

/// What happened on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Time advanced by this many fixed steps (possibly zero under
    /// [`FrameDriver::advance`] when less than `dt` has accumulated).
    Stepped,
    /// Not running. State is frozen but the caller still draws.
    Paused,
    /// Off screen. Neither stepping nor drawing.
    Hidden,
}

impl FrameOutcome {
    /// Whether the caller should redraw this frame.
    #[inline]
    pub fn should_draw(self) -> bool {
        !matches!(self, FrameOutcome::Hidden)
    }
}

/// Owns a widget and its clock.
#[derive(Debug, Clone)]
pub struct FrameDriver<W, T> {
    widget: W,
    dt: T,
    time: T,
    accumulator: T,
    steps: u64,
    max_steps: usize,
    running: bool,
    visible: bool,
}

impl<T: FloatScalar, W: Widget<T>> FrameDriver<W, T> {
    /// Running and visible, stepping `dt` per frame.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is not positive and finite.
    pub fn new(widget: W, dt: T) -> Self {
        assert!(dt > T::zero() && dt.is_finite(), "dt must be positive");
        Self {
            widget,
            dt,
            time: T::zero(),
            accumulator: T::zero(),
            steps: 0,
            max_steps: DEFAULT_MAX_STEPS,
            running: true,
            visible: true,
        }
    }

    /// Start paused.
    pub fn paused(mut self) -> Self {
        self.running = false;
        self
    }

    /// Cap the number of fixed steps per [`advance`](Self::advance) call.
    ///
    /// # Panics
    ///
    /// Panics if `max_steps` is zero.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        assert!(max_steps > 0, "max_steps must be at least 1");
        self.max_steps = max_steps;
        self
    }

    /// One animation frame with a single fixed step.
    pub fn frame(&mut self) -> FrameOutcome {
        if let Some(outcome) = self.gate() {
            return outcome;
        }
        self.step_once();
        FrameOutcome::Stepped
    }

    /// One animation frame that consumes `elapsed` seconds of wall time in
    /// fixed `dt` steps. Leftover time carries into the next call. When
    /// more than `max_steps` would be needed the backlog is dropped so a
    /// long stall (e.g. a background tab) does not replay in one burst.
    pub fn advance(&mut self, elapsed: T) -> FrameOutcome {
        if let Some(outcome) = self.gate() {
            return outcome;
        }
        if elapsed > T::zero() {
            self.accumulator = self.accumulator + elapsed;
        }
        let mut taken = 0;
        while self.accumulator >= self.dt {
            if taken == self.max_steps {
                log::warn!(
                    "frame needed more than {} steps, dropping {:?}s of backlog",
                    self.max_steps,
                    self.accumulator
                );
                self.accumulator = T::zero();
                break;
            }
            self.step_once();
            self.accumulator = self.accumulator - self.dt;
            taken += 1;
        }
        FrameOutcome::Stepped
    }

    fn gate(&self) -> Option<FrameOutcome> {
        if !self.visible {
            Some(FrameOutcome::Hidden)
        } else if !self.running {
            Some(FrameOutcome::Paused)
        } else {
            None
        }
    }

    fn step_once(&mut self) {
        self.widget.step(self.dt);
        self.steps += 1;
        self.time = T::from_usize(self.steps as usize) * self.dt;
    }

    /// Restore the widget and clock. Run and visibility flags are kept.
    pub fn reset(&mut self) {
        log::debug!("driver reset at t = {:?}", self.time);
        self.widget.reset();
        self.time = T::zero();
        self.accumulator = T::zero();
        self.steps = 0;
    }

    pub fn play(&mut self) {
        self.set_running(true);
    }

    pub fn pause(&mut self) {
        self.set_running(false);
    }

    /// Flip run/pause and return the new running state.
    pub fn toggle(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if running != self.running {
            log::debug!("driver {}", if running { "resumed" } else { "paused" });
            self.running = running;
        }
    }

    /// Feed visibility changes from the host's viewport observer. Becoming
    /// visible drops any time accumulated before the widget went hidden.
    pub fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            log::debug!("driver {}", if visible { "visible" } else { "hidden" });
            self.visible = visible;
            self.accumulator = T::zero();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Simulated time, `steps · dt`.
    pub fn time(&self) -> T {
        self.time
    }

    /// Fixed steps taken since construction or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn dt(&self) -> T {
        self.dt
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access for parameter changes. Does not reset.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn into_inner(self) -> W {
        self.widget
    }
}
