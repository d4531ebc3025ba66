use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real-valued scalars every kernel is generic over.
///
/// Blanket-implemented for `f32` and `f64`. Adds a handful of constant
/// helpers so kernels can spell out literals without fallible casts.
pub trait FloatScalar: Float + Debug + Default + 'static {
    /// Convert an `f64` literal into `Self` (rounding for `f32`).
    fn lit(v: f64) -> Self;

    /// Convert a sample index or count into `Self`.
    fn from_usize(n: usize) -> Self;

    /// `2`, used all over the trigonometric kernels.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// `0.5`.
    #[inline]
    fn half() -> Self {
        Self::lit(0.5)
    }

    /// `π`.
    #[inline]
    fn pi() -> Self {
        Self::lit(core::f64::consts::PI)
    }

    /// `2π`.
    #[inline]
    fn tau() -> Self {
        Self::lit(core::f64::consts::TAU)
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn lit(v: f64) -> $t { v as $t }
                #[inline] fn from_usize(n: usize) -> $t { n as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Normalized sinc, `sin(πx) / (πx)`, with the removable singularity at
/// `x == 0` filled in as `1`.
///
/// ```
/// use sigsim::traits::sinc;
///
/// assert_eq!(sinc(0.0_f64), 1.0);
/// assert!(sinc(1.0_f64).abs() < 1e-15);
/// ```
#[inline]
pub fn sinc<T: FloatScalar>(x: T) -> T {
    if x == T::zero() {
        return T::one();
    }
    let px = T::pi() * x;
    px.sin() / px
}

/// Clamp `x` into `[lo, hi]`. NaN passes through unchanged.
#[inline]
pub(crate) fn clamp<T: FloatScalar>(x: T, lo: T, hi: T) -> T {
    if x > hi {
        hi
    } else if x < lo {
        lo
    } else {
        x
    }
}
