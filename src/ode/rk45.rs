// Reference:
//   J. R. Dormand & P. J. Prince, "A family of embedded Runge-Kutta
//   formulae," J. Comput. Appl. Math., vol. 6, no. 1, pp. 19–26, 1980.

use alloc::vec::Vec;

use crate::traits::{FloatScalar, State};

use super::{OdeError, Trajectory};

/// Settings for the adaptive Dormand–Prince solver.
#[derive(Debug, Clone, Copy)]
pub struct Rk45Settings<T> {
    /// Initial step size (default: 1e-2).
    pub h0: T,
    /// Per-step error tolerance on the max-norm of the embedded error
    /// estimate (default: 1e-9).
    pub tol: T,
    /// Minimum allowed step size; dropping below it aborts with
    /// [`OdeError::StepUnderflow`] (default: 1e-10).
    pub h_min: T,
    /// Maximum allowed step size (default: 1.0).
    pub h_max: T,
}

impl Default for Rk45Settings<f64> {
    fn default() -> Self {
        Self {
            h0: 1e-2,
            tol: 1e-9,
            h_min: 1e-10,
            h_max: 1.0,
        }
    }
}

impl Default for Rk45Settings<f32> {
    fn default() -> Self {
        Self {
            h0: 1e-2,
            tol: 1e-5,
            h_min: 1e-6,
            h_max: 1.0,
        }
    }
}

// Dormand–Prince 5(4) tableau. Stage 7 is the FSAL evaluation at the
// 5th-order solution, used only by the embedded 4th-order weights here.

/// Nodes for stages k1..k6.
const C: [f64; 6] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0];

/// Coupling coefficients for stages k2..k6 (row i feeds stage k(i+2)).
#[rustfmt::skip]
const A: [[f64; 5]; 5] = [
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0],
    [19372.0 / 6561.0, -25360.0 / 2187.0, 64448.0 / 6561.0, -212.0 / 729.0, 0.0],
    [9017.0 / 3168.0, -355.0 / 33.0, 46732.0 / 5247.0, 49.0 / 176.0, -5103.0 / 18656.0],
];

/// 5th-order solution weights (k1..k6).
#[rustfmt::skip]
const B5: [f64; 6] = [
    35.0 / 384.0, 0.0, 500.0 / 1113.0, 125.0 / 192.0, -2187.0 / 6784.0, 11.0 / 84.0,
];

/// Embedded 4th-order solution weights (k1..k7).
#[rustfmt::skip]
const B4: [f64; 7] = [
    5179.0 / 57600.0, 0.0, 7571.0 / 16695.0, 393.0 / 640.0,
    -92097.0 / 339200.0, 187.0 / 2100.0, 1.0 / 40.0,
];

/// Embedded Dormand–Prince 5(4) with adaptive step-size control.
///
/// Each iteration evaluates the seven-stage tableau to produce a 5th-order
/// solution and an embedded 4th-order solution; their difference, reduced to
/// a scalar by the state's max-norm, is the per-step error estimate. A step
/// is accepted when the estimate is within `tol` (or exactly zero); on
/// rejection nothing advances and the step is retried. Either way the
/// controller rescales the step by
/// `0.9 · (tol / err)^(1/5)`, clamped to `[0.2, 5.0]` (a zero estimate
/// takes the maximum growth factor of 5), capped at `h_max`. A step that
/// falls below `h_min` aborts with [`OdeError::StepUnderflow`] and the
/// accumulated samples are discarded — no partial trajectory is returned.
///
/// The step is clipped so the final accepted sample lands exactly on `t1`.
/// A reversed span is swapped (see the [module docs](super)). The number of
/// samples depends on the problem; times are strictly increasing and the
/// first sample is `(t0, y0)`.
///
/// # Errors
///
/// - [`OdeError::InvalidArgument`] if `h0 <= 0` or `tol <= 0`, before any
///   evaluation.
/// - [`OdeError::StepUnderflow`] if the step collapses below `h_min`.
///
/// # Example
///
/// ```
/// use mathlite::ode::{solve_rk45, Rk45Settings};
///
/// // y' = y, y(0) = 1  →  y(1) = e
/// let traj = solve_rk45(|_t, y: &f64| *y, 0.0, 1.0, 1.0, &Rk45Settings::default()).unwrap();
/// let (tf, yf) = traj[traj.len() - 1];
/// assert_eq!(tf, 1.0);
/// assert!((yf - core::f64::consts::E).abs() < 1e-7);
/// ```
pub fn solve_rk45<T: FloatScalar, Y: State<Scalar = T>>(
    mut f: impl FnMut(T, &Y) -> Y,
    t0: T,
    y0: Y,
    t1: T,
    settings: &Rk45Settings<T>,
) -> Result<Trajectory<T, Y>, OdeError> {
    if settings.h0 <= T::zero() || settings.tol <= T::zero() {
        return Err(OdeError::InvalidArgument);
    }
    let (t0, t1) = if t1 < t0 { (t1, t0) } else { (t0, t1) };

    let mut out: Vec<(T, Y)> = Vec::with_capacity(128);
    let mut t = t0;
    let mut y = y0;
    let mut h = settings.h0.max(settings.h_min).min(settings.h_max);

    out.push((t, y));

    while t < t1 {
        if h < settings.h_min {
            return Err(OdeError::StepUnderflow);
        }

        // Clip the final step to land exactly on t1
        let hit_end = t + h >= t1;
        if hit_end {
            h = t1 - t;
        }

        // Stages k1..k6
        let mut k = [Y::zero(); 6];
        k[0] = f(t, &y);
        for i in 1..6 {
            let mut ysum = y;
            for (j, kj) in k.iter().enumerate().take(i) {
                let a = A[i - 1][j];
                if a != 0.0 {
                    ysum = ysum + kj.scale(T::from(a).unwrap() * h);
                }
            }
            k[i] = f(t + T::from(C[i]).unwrap() * h, &ysum);
        }

        // 5th-order solution
        let mut y5 = y;
        for (i, ki) in k.iter().enumerate() {
            if B5[i] != 0.0 {
                y5 = y5 + ki.scale(T::from(B5[i]).unwrap() * h);
            }
        }

        // Extra evaluation at y5 feeds the embedded 4th-order solution
        let k7 = f(t + h, &y5);
        let mut y4 = y;
        for (i, ki) in k.iter().enumerate() {
            if B4[i] != 0.0 {
                y4 = y4 + ki.scale(T::from(B4[i]).unwrap() * h);
            }
        }
        y4 = y4 + k7.scale(T::from(B4[6]).unwrap() * h);

        let err_norm = (y5 - y4).max_abs();

        if err_norm <= settings.tol || err_norm == T::zero() {
            // Accept: advance and record
            y = y5;
            t = if hit_end { t1 } else { t + h };
            out.push((t, y));
        }

        // Step-size controller, accept or reject alike:
        // grow fast on tiny error, shrink hard on large error, bounded
        // to [0.2, 5] to prevent oscillation.
        let factor = if err_norm == T::zero() {
            T::from(5.0).unwrap()
        } else {
            let raw = T::from(0.9).unwrap() * (settings.tol / err_norm).powf(T::from(0.2).unwrap());
            raw.max(T::from(0.2).unwrap()).min(T::from(5.0).unwrap())
        };
        // Cap at h_max only; a drop below h_min is caught by the loop-top
        // check so step collapse is reported instead of looping forever.
        h = (h * factor).min(settings.h_max);
    }

    Ok(out)
}
