use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;

use super::CalcError;

/// Gradient of `f: R^N → R` by central differences, one component at a time.
///
/// Costs `2N` evaluations of `f`.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`] if `h <= 0`, before any evaluation.
///
/// # Example
///
/// ```
/// use mathlite::calculus::gradient;
/// use mathlite::Vector;
///
/// // f(x) = x0² + 2·x1², grad = [2·x0, 4·x1]
/// let x = Vector::from_array([3.0_f64, 4.0]);
/// let g = gradient(|x: &Vector<f64, 2>| x[0] * x[0] + 2.0 * x[1] * x[1], &x, 1e-6).unwrap();
/// assert!((g[0] - 6.0).abs() < 1e-8);
/// assert!((g[1] - 16.0).abs() < 1e-8);
/// ```
pub fn gradient<T: FloatScalar, const N: usize>(
    mut f: impl FnMut(&Vector<T, N>) -> T,
    x: &Vector<T, N>,
    h: T,
) -> Result<Vector<T, N>, CalcError> {
    if h <= T::zero() {
        return Err(CalcError::InvalidArgument);
    }

    let two = T::one() + T::one();
    let mut g = Vector::<T, N>::zeros();

    for i in 0..N {
        let mut xp = *x;
        let mut xm = *x;
        xp[i] = xp[i] + h;
        xm[i] = xm[i] - h;
        g[i] = (f(&xp) - f(&xm)) / (two * h);
    }
    Ok(g)
}
