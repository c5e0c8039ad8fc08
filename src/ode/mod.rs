//! ODE integration — fixed-step and adaptive solvers.
//!
//! All solvers are generic over the [`State`](crate::traits::State) algebra,
//! so a scalar problem (`y: f64`) and a system (`y: Vector<f64, N>`) use the
//! same functions. Each returns the full [`Trajectory`] of `(t, y)` samples,
//! starting with the initial condition.
//!
//! | Solver         | Order | Step        | Error control |
//! |----------------|-------|-------------|---------------|
//! | [`solve_euler`] | 1    | fixed       | none          |
//! | [`solve_rk4`]   | 4    | fixed       | none          |
//! | [`solve_rk45`]  | 5(4) | adaptive    | embedded Dormand–Prince estimate |
//!
//! # Example
//!
//! ```
//! use mathlite::ode::{solve_rk45, Rk45Settings};
//! use mathlite::Vector;
//!
//! // Harmonic oscillator: y'' = -y  →  [y, y'] with dy/dt = [y', -y]
//! let y0 = Vector::from_array([1.0_f64, 0.0]);
//! let tau = 2.0 * core::f64::consts::PI;
//! let traj = solve_rk45(
//!     |_t, y: &Vector<f64, 2>| Vector::from_array([y[1], -y[0]]),
//!     0.0, y0, tau,
//!     &Rk45Settings::default(),
//! ).unwrap();
//! let (tf, yf) = traj[traj.len() - 1];
//! assert_eq!(tf, tau);
//! assert!((yf[0] - 1.0).abs() < 1e-6); // cos(2π) ≈ 1
//! assert!(yf[1].abs() < 1e-6);          // sin(2π) ≈ 0
//! ```
//!
//! # Time orientation
//!
//! A reversed span (`t1 < t0`) is swapped and integrated forward from the
//! smaller time; there is no backward integration. This mirrors the
//! quadrature bounds behavior (see [`crate::quad`]).

mod euler;
mod rk4;
mod rk45;


pub use euler::solve_euler;
pub use rk4::{rk4_step, solve_rk4};
pub use rk45::{solve_rk45, Rk45Settings};

use alloc::vec::Vec;
use core::fmt;

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OdeError {
    /// A step size or tolerance input was not strictly positive
    /// (reported before any derivative evaluation).
    InvalidArgument,
    /// The adaptive step collapsed below `h_min` (fatal — no partial
    /// trajectory is returned).
    StepUnderflow,
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "step size and tolerance must be > 0"),
            Self::StepUnderflow => write!(f, "adaptive step underflow (h < h_min)"),
        }
    }
}

/// An integration result: ordered `(t, y)` samples with strictly increasing
/// times. The first sample is always the initial condition; ownership
/// transfers to the caller, nothing is retained by the solver.
pub type Trajectory<T, Y> = Vec<(T, Y)>;
