//! Linear solve via Gaussian elimination with partial pivoting.
//!
//! Fixed-size square systems only. For convenience the same operation is
//! exposed as a method: `a.solve(&b)`.
//!
//! ```
//! use mathlite::{Matrix, Vector};
//!
//! let a = Matrix::new([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Vector::from_array([8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! assert!((x[2] + 1.0).abs() < 1e-12);
//! ```

use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Errors from linear algebra operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular (pivot below tolerance).
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "singular or near-singular matrix"),
        }
    }
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// Consumes copies of `A` and `b` and eliminates in place. A pivot whose
/// magnitude falls below machine epsilon is treated as singular.
///
/// # Errors
///
/// Returns [`LinalgError::Singular`] if no usable pivot is found.
pub fn solve<T: FloatScalar, const N: usize>(
    mut a: Matrix<T, N, N>,
    mut b: Vector<T, N>,
) -> Result<Vector<T, N>, LinalgError> {
    // Forward elimination
    for k in 0..N {
        // Partial pivoting: row with largest |A(i, k)| for i >= k
        let mut pivot = k;
        let mut max_abs = a[(k, k)].abs();
        for i in (k + 1)..N {
            let v = a[(i, k)].abs();
            if v > max_abs {
                max_abs = v;
                pivot = i;
            }
        }

        if max_abs <= T::epsilon() {
            return Err(LinalgError::Singular);
        }

        if pivot != k {
            for j in k..N {
                let tmp = a[(k, j)];
                a[(k, j)] = a[(pivot, j)];
                a[(pivot, j)] = tmp;
            }
            let tmp = b[k];
            b[k] = b[pivot];
            b[pivot] = tmp;
        }

        // Eliminate below the pivot
        for i in (k + 1)..N {
            let factor = a[(i, k)] / a[(k, k)];
            a[(i, k)] = T::zero();
            for j in (k + 1)..N {
                a[(i, j)] = a[(i, j)] - factor * a[(k, j)];
            }
            b[i] = b[i] - factor * b[k];
        }
    }

    // Back substitution
    let mut x = Vector::<T, N>::zeros();
    for i in (0..N).rev() {
        let mut sum = b[i];
        for j in (i + 1)..N {
            sum = sum - a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }
    Ok(x)
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Solve `self * x = b`. See [`solve`].
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Vector<T, N>, LinalgError> {
        solve(*self, *b)
    }
}
