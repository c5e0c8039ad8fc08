//! # mathlite
//!
//! Small fixed-dimension numerics foundation, no-std compatible. Stack-allocated
//! vectors and matrices, scalar calculus, error-controlled quadrature, and
//! fixed/adaptive-step ODE solvers, suitable for embedding into larger
//! scientific or engineering code.
//!
//! ## Quick start
//!
//! ```
//! use mathlite::{Matrix, Vector};
//! use mathlite::quad::{adaptive_simpson, AdaptiveSettings};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new([[2.0_f64, 1.0], [5.0, 3.0]]);
//! let b = Vector::from_array([4.0, 11.0]);
//! let x = a.solve(&b).unwrap(); // x = [1, 2]
//! assert!((x[0] - 1.0).abs() < 1e-12);
//!
//! // ∫₀^π sin(x) dx = 2
//! let s: f64 = adaptive_simpson(
//!     |x: f64| x.sin(),
//!     0.0,
//!     core::f64::consts::PI,
//!     &AdaptiveSettings::default(),
//! ).unwrap();
//! assert!((s - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated row-major storage; arithmetic, indexing, norms.
//!   [`Vector<T, N>`] is a type alias for a 1-row matrix.
//!
//! - [`linalg`] — Linear solve `Ax = b` via Gaussian elimination with partial
//!   pivoting. Convenience method `a.solve(&b)` on square matrices.
//!
//! - [`calculus`] — Finite-difference derivatives and gradients, scalar root
//!   finding (bisection, Newton), and the `almost_equal` tolerance predicate.
//!
//! - [`quad`] — Composite and adaptive Simpson quadrature, generic over the
//!   [`State`] algebra so scalar and vector-valued integrands share one
//!   implementation.
//!
//! - [`ode`] — Fixed-step Euler and RK4 plus the embedded Dormand–Prince
//!   5(4) adaptive solver, all returning full `(t, y)` trajectories.
//!   Requires the `alloc` feature (included with `std`).
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float + FloatConst`)
//!   - [`State`] — integration state values (add, subtract, scale,
//!     max-abs error magnitude); implemented for `f32`, `f64`, and
//!     `Vector<T, N>`
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std | ODE trajectories (`Vec`-backed) |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod calculus;
pub mod linalg;
pub mod matrix;
#[cfg(feature = "alloc")]
pub mod ode;
pub mod quad;
pub mod traits;

pub use matrix::vector::{
    Vector, Vector1, Vector2, Vector3, Vector4, Vector5, Vector6,
};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar, State};
