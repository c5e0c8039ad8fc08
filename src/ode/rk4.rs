use crate::traits::{FloatScalar, State};

use super::{OdeError, Trajectory};

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using `f(t, y) -> dy/dt`.
///
/// ```
/// use mathlite::ode::rk4_step;
///
/// // dy/dt = -y (exponential decay)
/// let y1 = rk4_step(0.0, &1.0_f64, 0.01, |_t, y: &f64| -y);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar, Y: State<Scalar = T>>(
    t: T,
    y: &Y,
    h: T,
    mut f: impl FnMut(T, &Y) -> Y,
) -> Y {
    let half = T::from(0.5).unwrap();
    let sixth = T::from(1.0 / 6.0).unwrap();
    let third = T::from(1.0 / 3.0).unwrap();

    let k1 = f(t, y);
    let k2 = f(t + h * half, &(*y + k1.scale(h * half)));
    let k3 = f(t + h * half, &(*y + k2.scale(h * half)));
    let k4 = f(t + h, &(*y + k3.scale(h)));

    *y + (k1.scale(sixth) + k2.scale(third) + k3.scale(third) + k4.scale(sixth)).scale(h)
}

/// Classical 4th-order Runge-Kutta with a fixed step.
///
/// Same contract as [`solve_euler`](super::solve_euler): the last step is
/// shortened to land exactly on `t1`, every intermediate state is recorded,
/// and a reversed span is swapped.
///
/// # Errors
///
/// Returns [`OdeError::InvalidArgument`] if `h <= 0`, before any evaluation.
///
/// # Example
///
/// ```
/// use mathlite::ode::solve_rk4;
///
/// // y' = y, y(0) = 1  →  y(1) = e
/// let traj = solve_rk4(|_t, y: &f64| *y, 0.0, 1.0, 1.0, 0.01).unwrap();
/// let (tf, yf) = traj[traj.len() - 1];
/// assert_eq!(tf, 1.0);
/// assert!((yf - core::f64::consts::E).abs() < 1e-9);
/// ```
pub fn solve_rk4<T: FloatScalar, Y: State<Scalar = T>>(
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
        y = rk4_step(t, &y, step, &mut f);
        t = if step < h { t1 } else { t + step };
        out.push((t, y));
    }
    Ok(out)
}
