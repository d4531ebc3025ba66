//! Seeded pseudo-random noise for synthetic measurements.
//!
//! Every widget owns its own [`NoiseSource`], created from an explicit seed,
//! so a run can be replayed exactly and tests are deterministic.
//! [`NoiseTable`] pre-draws a fixed block of values for widgets that redraw
//! the same noise every frame.
//!
//! ```
//! use sigsim::noise::NoiseSource;
//!
//! let mut a = NoiseSource::new(42);
//! let mut b = NoiseSource::new(42);
//! let x: f64 = a.uniform();
//! assert_eq!(x, b.uniform());
//! assert!((-1.0..1.0).contains(&x));
//! ```


use num_traits::Float;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::traits::FloatScalar;

/// Seeded noise generator.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: SmallRng,
    seed: u64,
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was last (re)started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Uniform value in `[-1, 1)`.
    #[inline]
    pub fn uniform<T: FloatScalar>(&mut self) -> T {
        let u: f64 = self.rng.gen();
        spread_unit(u)
    }

    /// Standard normal value (Box-Muller, one output per call).
    pub fn gaussian<T: FloatScalar>(&mut self) -> T {
        // u1 in (0, 1] keeps ln() finite
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        let r = Float::sqrt(-2.0 * Float::ln(u1));
        T::lit(r * Float::cos(core::f64::consts::TAU * u2))
    }

    /// Normal value with standard deviation `sigma`.
    #[inline]
    pub fn gaussian_scaled<T: FloatScalar>(&mut self, sigma: T) -> T {
        sigma * self.gaussian::<T>()
    }
}

/// Map `u` in `[0, 1)` onto `[-1, 1)` in `T`.
///
/// Narrowing to `f32` can round values just below one up to exactly one,
/// so the result is pulled back under the open bound.
#[inline]
pub(crate) fn spread_unit<T: FloatScalar>(u: f64) -> T {
    let v = T::lit(2.0 * u - 1.0);
    if v >= T::one() {
        T::one() - T::epsilon()
    } else {
        v
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(0)
    }
}

/// `N` pre-drawn uniform values in `[-1, 1)`, indexed cyclically.
///
/// ```
/// use sigsim::noise::NoiseTable;
///
/// let table = NoiseTable::<f64, 16>::new(3);
/// assert_eq!(table.at(1), table.at(17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseTable<T, const N: usize> {
    values: [T; N],
}

impl<T: FloatScalar, const N: usize> NoiseTable<T, N> {
    pub fn new(seed: u64) -> Self {
        let mut source = NoiseSource::new(seed);
        let mut values = [T::zero(); N];
        for v in values.iter_mut() {
            *v = source.uniform();
        }
        Self { values }
    }

    /// Value at index `i mod N`. Returns zero for an empty table.
    #[inline]
    pub fn at(&self, i: usize) -> T {
        if N == 0 {
            return T::zero();
        }
        self.values[i % N]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}
