use crate::traits::FloatScalar;

use super::CalcError;

/// Central-difference derivative: `(f(x+h) - f(x-h)) / 2h`, O(h²).
///
/// A step of `1e-6` is a reasonable default for `f64`.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`] if `h <= 0`, before any evaluation.
///
/// # Example
///
/// ```
/// use mathlite::calculus::derivative_central;
///
/// // d/dx sin(x) at 0 is cos(0) = 1
/// let d = derivative_central(|x: f64| x.sin(), 0.0, 1e-6).unwrap();
/// assert!((d - 1.0).abs() < 1e-9);
/// ```
pub fn derivative_central<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x: T,
    h: T,
) -> Result<T, CalcError> {
    if h <= T::zero() {
        return Err(CalcError::InvalidArgument);
    }
    let two = T::one() + T::one();
    Ok((f(x + h) - f(x - h)) / (two * h))
}

/// Forward-difference derivative: `(f(x+h) - f(x)) / h`, O(h).
///
/// One fewer evaluation than [`derivative_central`], less accurate.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`] if `h <= 0`, before any evaluation.
pub fn derivative_forward<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x: T,
    h: T,
) -> Result<T, CalcError> {
    if h <= T::zero() {
        return Err(CalcError::InvalidArgument);
    }
    Ok((f(x + h) - f(x)) / h)
}
