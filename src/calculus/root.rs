use crate::traits::FloatScalar;

use super::{diff::derivative_central, CalcError};

/// Settings for scalar root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on `|f(x)|` and on the step / bracket width.
    pub eps: T,
    /// Maximum number of iterations before returning the current estimate.
    ///
    /// The default of 200 is sized for bisection's one-bit-per-iteration
    /// convergence. Newton converges quadratically near a root and rarely
    /// needs more than a few dozen; a budget of 50 is plenty there.
    pub max_iter: usize,
    /// Finite-difference step for the numeric derivative in [`root_newton`].
    pub diff_step: T,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            eps: 1e-12,
            max_iter: 200,
            diff_step: 1e-6,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iter: 200,
            diff_step: 1e-3,
        }
    }
}

/// Bisection on a bracketing interval `[a, b]` with `f(a) · f(b) < 0`.
///
/// Halves the bracket until `|f(m)| <= eps` or the half-width falls below
/// `eps`. If the iteration budget runs out first, the bracket midpoint is
/// returned — bisection cannot leave the bracket, so that estimate is still
/// within the final half-width of a root.
///
/// # Errors
///
/// - [`CalcError::InvalidArgument`] if `eps <= 0`, before any evaluation.
/// - [`CalcError::BracketInvalid`] if `f(a)` and `f(b)` have the same sign
///   (an endpoint that is exactly a root is returned immediately).
///
/// # Example
///
/// ```
/// use mathlite::calculus::{root_bisection, RootSettings};
///
/// // √2 as the root of x² - 2
/// let r = root_bisection(|x: f64| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
/// assert!((r - core::f64::consts::SQRT_2).abs() < 1e-11);
/// ```
pub fn root_bisection<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<T, CalcError> {
    if settings.eps <= T::zero() {
        return Err(CalcError::InvalidArgument);
    }

    let mut a = a;
    let mut b = b;
    let two = T::one() + T::one();

    let mut fa = f(a);
    let fb = f(b);
    if fa == T::zero() {
        return Ok(a);
    }
    if fb == T::zero() {
        return Ok(b);
    }
    if (fa > T::zero()) == (fb > T::zero()) {
        return Err(CalcError::BracketInvalid);
    }

    for _ in 0..settings.max_iter {
        let m = (a + b) / two;
        let fm = f(m);

        if fm.abs() <= settings.eps || (b - a) / two <= settings.eps {
            return Ok(m);
        }

        if (fa > T::zero()) == (fm > T::zero()) {
            a = m;
            fa = fm;
        } else {
            b = m;
        }
    }
    Ok((a + b) / two)
}

/// Newton's method with a central-difference numeric derivative.
///
/// Iterates `x ← x - f(x) / f'(x)` from `x0` until `|f(x)| <= eps` or the
/// update step falls below `eps`. If the iteration budget runs out the
/// current iterate is returned; Newton is fast near a root but needs a
/// decent initial guess.
///
/// # Errors
///
/// - [`CalcError::InvalidArgument`] if `eps <= 0` or `diff_step <= 0`,
///   before any evaluation.
/// - [`CalcError::DerivativeZero`] if the numeric derivative vanishes.
///
/// # Example
///
/// ```
/// use mathlite::calculus::{root_newton, RootSettings};
///
/// let r = root_newton(|x: f64| x * x - 2.0, 1.0, &RootSettings::default()).unwrap();
/// assert!((r - core::f64::consts::SQRT_2).abs() < 1e-11);
/// ```
pub fn root_newton<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<T, CalcError> {
    if settings.eps <= T::zero() || settings.diff_step <= T::zero() {
        return Err(CalcError::InvalidArgument);
    }

    let mut x = x0;
    for _ in 0..settings.max_iter {
        let fx = f(x);
        if fx.abs() <= settings.eps {
            return Ok(x);
        }

        let dfx = derivative_central(&mut f, x, settings.diff_step)?;
        if dfx == T::zero() {
            return Err(CalcError::DerivativeZero);
        }

        let step = fx / dfx;
        x = x - step;

        if step.abs() <= settings.eps {
            return Ok(x);
        }
    }
    Ok(x)
}
