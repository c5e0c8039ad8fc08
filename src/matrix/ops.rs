use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = Self::zeros();
        for i in 0..M {
            for j in 0..N {
                out.data[i][j] = T::zero() - self.data[i][j];
            }
        }
        out
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for i in 0..M {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out.data[i][j] = self.data[i][j] * rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize> Div<T> for Matrix<T, M, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out.data[i][j] = self.data[i][j] / rhs;
            }
        }
        out
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Matrix-vector product ────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix-vector product: A * v → result.
    ///
    /// Takes and returns row vectors for convenience, avoiding
    /// explicit transpose. Equivalent to `(A * v^T)^T`.
    pub fn vecmul(&self, v: &Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::<T, M>::zeros();
        for i in 0..M {
            let mut sum = T::zero();
            for j in 0..N {
                sum = sum + self.data[i][j] * v[j];
            }
            out[i] = sum;
        }
        out
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            for j in 0..N {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let c = a + b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);

        let d = b - a;
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        a += b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn negation() {
        let a = Matrix::new([[1.0, -2.0], [3.0, -4.0]]);
        let b = -a;
        assert_eq!(b[(0, 0)], -1.0);
        assert_eq!(b[(0, 1)], 2.0);
    }

    #[test]
    fn matrix_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let c = a * b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(0, 1)], 22.0); // 1*6 + 2*8
        assert_eq!(c[(1, 0)], 43.0); // 3*5 + 4*7
        assert_eq!(c[(1, 1)], 50.0); // 3*6 + 4*8
    }

    #[test]
    fn matrix_multiply_non_square() {
        // (2×3) * (3×2) → (2×2)
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::new([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);

        let c = a * b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c[(0, 0)], 58.0); // 1*7 + 2*9 + 3*11
        assert_eq!(c[(0, 1)], 64.0); // 1*8 + 2*10 + 3*12
    }

    #[test]
    fn scalar_multiply_divide() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);

        let b = a * 3.0;
        assert_eq!(b[(0, 0)], 3.0);
        assert_eq!(b[(1, 1)], 12.0);

        let c = 3.0 * a;
        assert_eq!(c, b);

        let d = b / 3.0;
        assert_eq!(d, a);
    }

    #[test]
    fn mul_assign_scalar() {
        let mut a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        a *= 2.0;
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(1, 1)], 8.0);
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();

        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let id: Matrix<f64, 2, 2> = Matrix::eye();
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
    }

    #[test]
    fn vecmul() {
        let a = Matrix::new([[2.0, 1.0], [5.0, 3.0]]);
        let v = Vector::from_array([1.0, 2.0]);
        let result = a.vecmul(&v);
        assert_eq!(result[0], 4.0); // 2*1 + 1*2
        assert_eq!(result[1], 11.0); // 5*1 + 3*2
    }

    #[test]
    fn vecmul_non_square() {
        // (2×3) * vec(3) → vec(2)
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let v = Vector::from_array([7.0, 8.0, 9.0]);
        let result = a.vecmul(&v);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], 50.0); // 1*7 + 2*8 + 3*9
        assert_eq!(result[1], 122.0); // 4*7 + 5*8 + 6*9
    }
}
