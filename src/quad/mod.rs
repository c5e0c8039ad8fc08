//! Numerical quadrature — composite and adaptive Simpson's rule.
//!
//! Both integrators are generic over the [`State`](crate::traits::State)
//! algebra, so the same functions handle scalar integrands (`f: T → T`) and
//! vector-valued integrands (`f: T → Vector<T, N>`).
//!
//! # Fixed subdivision
//!
//! [`simpson`] applies the composite rule with an even number of
//! subintervals; `n = 1000` is a sensible default for smooth integrands.
//!
//! # Adaptive subdivision
//!
//! [`adaptive_simpson`] recursively bisects until a local Richardson error
//! estimate falls under the tolerance budget, splitting the budget in half
//! per branch so the total error stays bounded by the requested tolerance.
//!
//! # Example
//!
//! ```
//! use mathlite::quad::{adaptive_simpson, simpson, AdaptiveSettings};
//!
//! let pi = core::f64::consts::PI;
//! let fixed: f64 = simpson(|x: f64| x.sin(), 0.0, pi, 1000).unwrap();
//! let adaptive: f64 = adaptive_simpson(|x: f64| x.sin(), 0.0, pi,
//!     &AdaptiveSettings::default()).unwrap();
//! assert!((fixed - 2.0).abs() < 1e-9);
//! assert!((adaptive - 2.0).abs() < 1e-9);
//! ```
//!
//! # Bounds orientation
//!
//! Reversed bounds (`b < a`) are swapped internally and the result is **not**
//! negated: both orientations return the integral over `[min, max]`. Callers
//! that need the signed convention must negate themselves.

mod adaptive;
mod simpson;


pub use adaptive::{adaptive_simpson, AdaptiveSettings};
pub use simpson::simpson;

/// Errors from quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadError {
    /// Tolerance not strictly positive, or fewer than 2 subintervals.
    InvalidArgument,
}

impl core::fmt::Display for QuadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadError::InvalidArgument => {
                write!(f, "tolerance must be > 0 and subintervals >= 2")
            }
        }
    }
}
