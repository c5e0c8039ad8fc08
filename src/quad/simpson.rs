use crate::traits::{FloatScalar, State};

use super::QuadError;

/// Composite Simpson's rule over `[a, b]` with `n` even subintervals.
///
/// Interior nodes carry the alternating 4/2 weights, endpoints weight 1, and
/// the sum is scaled by `h/3`. An odd `n` is bumped to the next even value.
/// `a == b` returns the zero element without evaluating the integrand;
/// reversed bounds are swapped without negating the result (see the
/// [module docs](super)).
///
/// Works for scalar and vector-valued integrands alike:
///
/// ```
/// use mathlite::quad::simpson;
/// use mathlite::Vector;
///
/// let s: f64 = simpson(|x: f64| x * x, 0.0, 1.0, 1000).unwrap();
/// assert!((s - 1.0 / 3.0).abs() < 1e-12);
///
/// let v = simpson(|x: f64| Vector::from_array([x.cos(), x.sin()]),
///     0.0, core::f64::consts::FRAC_PI_2, 1000).unwrap();
/// assert!((v[0] - 1.0).abs() < 1e-9); // ∫cos = sin
/// assert!((v[1] - 1.0).abs() < 1e-9); // ∫sin = 1 - cos
/// ```
///
/// # Errors
///
/// Returns [`QuadError::InvalidArgument`] if `n < 2`, before any evaluation.
pub fn simpson<T: FloatScalar, Y: State<Scalar = T>>(
    mut f: impl FnMut(T) -> Y,
    a: T,
    b: T,
    n: usize,
) -> Result<Y, QuadError> {
    if n < 2 {
        return Err(QuadError::InvalidArgument);
    }
    let n = if n % 2 != 0 { n + 1 } else { n };

    if a == b {
        return Ok(Y::zero());
    }
    let (a, b) = if b < a { (b, a) } else { (a, b) };

    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();
    let two = T::from(2.0).unwrap();

    let h = (b - a) / T::from(n).unwrap();
    let mut s = f(a) + f(b);

    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        let w = if i % 2 == 0 { two } else { four };
        s = s + f(x).scale(w);
    }
    Ok(s.scale(h / three))
}

/// One Simpson step over `[a, b]`: `(b-a)/6 · (f(a) + 4f(c) + f(b))`.
///
/// Shared by the adaptive integrator; callers pass `f` by reference so the
/// recursion monomorphizes once.
pub(super) fn simpson_step<T: FloatScalar, Y: State<Scalar = T>, F: FnMut(T) -> Y>(
    f: &mut F,
    a: T,
    b: T,
) -> Y {
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();

    let c = (a + b) / two;
    (f(a) + f(c).scale(four) + f(b)).scale((b - a) / six)
}
