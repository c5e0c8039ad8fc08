use core::fmt::Debug;
use core::ops::{Add, Sub};

use num_traits::{Float, FloatConst, Num, One, Zero};

use crate::matrix::vector::Vector;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `abs`, `powf`, machine epsilon,
/// or the π/e constants (norms, calculus, quadrature, ODE solvers).
pub trait FloatScalar: Scalar + Float + FloatConst {}

impl<T: Scalar + Float + FloatConst> FloatScalar for T {}

/// The capability set an integration state must supply.
///
/// A state is either a plain float or a fixed-size [`Vector`]. The quadrature
/// and ODE engines are written once against this trait, so scalar and
/// vector-valued problems share a single implementation.
///
/// Required operations: addition and subtraction (supertraits), scaling by a
/// scalar, a zero element, and a reduction to a scalar error magnitude —
/// the maximum absolute component for vectors, the absolute value for floats.
///
/// # Examples
///
/// ```
/// use mathlite::{State, Vector};
///
/// let v = Vector::from_array([3.0_f64, -7.0]);
/// assert_eq!(v.max_abs(), 7.0);
/// assert_eq!((-2.5_f64).max_abs(), 2.5);
/// assert_eq!(v.scale(2.0)[1], -14.0);
/// ```
pub trait State: Copy + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// The underlying float type (`f32` or `f64`).
    type Scalar: FloatScalar;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiply every component by `s`.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Error magnitude: the largest absolute component.
    fn max_abs(self) -> Self::Scalar;
}

/// Concrete impls for bare floats — a float is a one-component state.
macro_rules! impl_state_float {
    ($($t:ty),*) => {
        $(
            impl State for $t {
                type Scalar = $t;

                #[inline] fn zero() -> $t { 0.0 }
                #[inline] fn scale(self, s: $t) -> $t { self * s }
                #[inline] fn max_abs(self) -> $t { Float::abs(self) }
            }
        )*
    };
}

impl_state_float!(f32, f64);

impl<T: FloatScalar, const N: usize> State for Vector<T, N> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Self::zeros()
    }

    #[inline]
    fn scale(self, s: T) -> Self {
        self * s
    }

    #[inline]
    fn max_abs(self) -> T {
        self.norm_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_state_algebra() {
        let a = 2.0_f64;
        let b = 0.5_f64;
        assert_eq!(a + b, 2.5);
        assert_eq!(a.scale(3.0), 6.0);
        assert_eq!((a - 5.0).max_abs(), 3.0);
        assert_eq!(<f64 as State>::zero(), 0.0);
    }

    #[test]
    fn vector_state_algebra() {
        let a = Vector::from_array([1.0_f64, -2.0, 3.0]);
        let b = Vector::from_array([0.5_f64, 0.5, 0.5]);
        let c = (a - b).scale(2.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], -5.0);
        assert_eq!(c[2], 5.0);
        assert_eq!(c.max_abs(), 5.0);
        assert_eq!(<Vector<f64, 3> as State>::zero()[2], 0.0);
    }

    // Generic over State, as the solvers use it
    fn weighted_sum<Y: State>(a: Y, b: Y, w: Y::Scalar) -> Y {
        a + b.scale(w)
    }

    #[test]
    fn generic_over_state() {
        let s = weighted_sum(1.0_f64, 2.0, 0.25);
        assert_eq!(s, 1.5);

        let v = weighted_sum(
            Vector::from_array([1.0_f64, 1.0]),
            Vector::from_array([2.0, 4.0]),
            0.25,
        );
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], 2.0);
    }
}
