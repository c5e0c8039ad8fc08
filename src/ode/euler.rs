use crate::traits::{FloatScalar, State};

use super::{OdeError, Trajectory};

/// Explicit Euler with a fixed step: `y ← y + h·f(t, y)`.
///
/// First order; useful as a baseline and for very cheap derivative
/// functions. The last step is shortened so the final sample lands exactly
/// on `t1`. A reversed span is swapped (see the [module docs](super)).
///
/// # Errors
///
/// Returns [`OdeError::InvalidArgument`] if `h <= 0`, before any evaluation.
///
/// # Example
///
/// ```
/// use mathlite::ode::solve_euler;
///
/// // y' = -y, y(0) = 1  →  y(1) = e⁻¹
/// let traj = solve_euler(|_t, y: &f64| -y, 0.0, 1.0, 1.0, 1e-4).unwrap();
/// let (tf, yf) = traj[traj.len() - 1];
/// assert_eq!(tf, 1.0);
/// assert!((yf - (-1.0_f64).exp()).abs() < 1e-4);
/// ```
pub fn solve_euler<T: FloatScalar, Y: State<Scalar = T>>(
    mut f: impl FnMut(T, &Y) -> Y,
    t0: T,
    y0: Y,
    t1: T,
    h: T,
) -> Result<Trajectory<T, Y>, OdeError> {
    if h <= T::zero() {
        return Err(OdeError::InvalidArgument);
    }
    let (t0, t1) = if t1 < t0 { (t1, t0) } else { (t0, t1) };

    let steps = ((t1 - t0) / h).to_usize().unwrap_or(0);
    let mut out = Trajectory::with_capacity(steps + 2);

    let mut t = t0;
    let mut y = y0;
    out.push((t, y));

    while t < t1 {
        let remaining = t1 - t;
        let step = if remaining < h { remaining } else { h };
        y = y + f(t, &y).scale(step);
        // Assign the endpoint exactly on the clipped final step
        t = if step < h { t1 } else { t + step };
        out.push((t, y));
    }
    Ok(out)
}
