use crate::traits::FloatScalar;

use super::Widget;

/// A widget made from plain data and a pure step function
/// `(state, params, dt) -> state`.
///
/// Parameters are kept apart from state so slider changes survive
/// [`Widget::reset`], which only restores the initial state.
///
/// ```
/// use sigsim::driver::{StepFn, Widget};
///
/// // constant-velocity particle, speed as the parameter
/// let mut w = StepFn::new(0.0_f64, 3.0_f64, |x: &f64, v: &f64, dt: f64| x + v * dt);
/// w.step(0.5);
/// assert_eq!(*w.state(), 1.5);
/// w.reset();
/// assert_eq!(*w.state(), 0.0);
/// ```
#[derive(Clone)]
pub struct StepFn<S, P, F> {
    initial: S,
    state: S,
    params: P,
    step: F,
}

impl<S: Clone, P, F> StepFn<S, P, F> {
    pub fn new<T>(initial: S, params: P, step: F) -> Self
    where
        T: FloatScalar,
        F: FnMut(&S, &P, T) -> S,
    {
        Self {
            state: initial.clone(),
            initial,
            params,
            step,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Overwrite the current state, e.g. after a drag on the canvas. The
    /// initial state used by reset is unchanged.
    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut P {
        &mut self.params
    }

    pub fn set_params(&mut self, params: P) {
        self.params = params;
    }
}

impl<T, S, P, F> Widget<T> for StepFn<S, P, F>
where
    T: FloatScalar,
    S: Clone,
    F: FnMut(&S, &P, T) -> S,
{
    fn step(&mut self, dt: T) {
        self.state = (self.step)(&self.state, &self.params, dt);
    }

    fn reset(&mut self) {
        self.state = self.initial.clone();
    }
}

impl<S: core::fmt::Debug, P: core::fmt::Debug, F> core::fmt::Debug for StepFn<S, P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StepFn")
            .field("state", &self.state)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
