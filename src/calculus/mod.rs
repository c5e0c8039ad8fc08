//! Scalar calculus: finite-difference derivatives and gradients, root
//! finding, and the `almost_equal` tolerance predicate.
//!
//! # Derivatives
//!
//! - [`derivative_central`] — central difference, O(h²), good default
//! - [`derivative_forward`] — forward difference, O(h), one fewer evaluation
//! - [`gradient`] — central-difference gradient of `f: R^N → R`
//!
//! # Root finding
//!
//! - [`root_bisection`] — bracketed bisection; requires a sign change
//! - [`root_newton`] — Newton iteration with a numeric derivative
//!
//! Both return their best estimate when the iteration budget runs out rather
//! than failing; callers that need certainty should check `f` at the result.

mod diff;
mod grad;
mod root;

pub use diff::{derivative_central, derivative_forward};
pub use grad::gradient;
pub use root::{root_bisection, root_newton, RootSettings};

use crate::traits::FloatScalar;

/// Errors from calculus routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcError {
    /// A step size or tolerance argument was not strictly positive.
    InvalidArgument,
    /// Bracket endpoints do not have opposite signs.
    BracketInvalid,
    /// Newton iteration hit a zero derivative.
    DerivativeZero,
}

impl core::fmt::Display for CalcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalcError::InvalidArgument => write!(f, "argument must be > 0"),
            CalcError::BracketInvalid => {
                write!(f, "bracket endpoints must have opposite signs")
            }
            CalcError::DerivativeZero => write!(f, "derivative is zero"),
        }
    }
}

/// Robust float comparison combining absolute and relative tolerance.
///
/// Exact equality short-circuits, which also covers matching infinities.
/// A non-finite difference (opposite infinities, one infinite operand, NaN)
/// compares unequal; without that guard the relative term would saturate to
/// infinity and accept everything. Otherwise
/// `|a - b| <= max(abs_tol, rel_tol * max(|a|, |b|))`.
///
/// ```
/// use mathlite::calculus::almost_equal;
///
/// assert!(almost_equal(1.0, 1.0 + 1e-13, 1e-12, 1e-12));
/// assert!(!almost_equal(1.0, 1.01, 1e-12, 1e-12));
/// assert!(almost_equal(f64::INFINITY, f64::INFINITY, 1e-12, 1e-12));
/// assert!(!almost_equal(f64::INFINITY, f64::NEG_INFINITY, 1e-12, 1e-12));
/// ```
pub fn almost_equal<T: FloatScalar>(a: T, b: T, rel_tol: T, abs_tol: T) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if !diff.is_finite() {
        return false;
    }
    let norm = a.abs().max(b.abs());
    diff <= abs_tol.max(rel_tol * norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_exact() {
        assert!(almost_equal(2.0, 2.0, 1e-12, 1e-12));
        assert!(almost_equal(0.0, 0.0, 1e-12, 1e-12));
    }

    #[test]
    fn almost_equal_abs_tolerance_near_zero() {
        assert!(almost_equal(0.0, 1e-13, 1e-12, 1e-12));
        assert!(!almost_equal(0.0, 1e-11, 1e-12, 1e-12));
    }

    #[test]
    fn almost_equal_rel_tolerance_large_values() {
        assert!(almost_equal(1e10, 1e10 + 1.0, 1e-9, 1e-12));
        assert!(!almost_equal(1e10, 1e10 + 1.0, 1e-12, 1e-12));
    }

    #[test]
    fn almost_equal_infinities() {
        assert!(almost_equal(f64::INFINITY, f64::INFINITY, 1e-12, 1e-12));
        assert!(almost_equal(f64::NEG_INFINITY, f64::NEG_INFINITY, 1e-12, 1e-12));
        // Opposite infinities and infinite-vs-finite must not be accepted by
        // a saturated relative term.
        assert!(!almost_equal(f64::INFINITY, f64::NEG_INFINITY, 1e-12, 1e-12));
        assert!(!almost_equal(f64::INFINITY, 1.0, 1e-12, 1e-12));
        assert!(!almost_equal(1.0, f64::NEG_INFINITY, 1e-12, 1e-12));
    }

    #[test]
    fn almost_equal_nan_never_equal() {
        assert!(!almost_equal(f64::NAN, f64::NAN, 1e-12, 1e-12));
    }

    #[test]
    fn almost_equal_f32() {
        assert!(almost_equal(1.0_f32, 1.0 + 1e-7, 1e-6, 1e-6));
    }
}
