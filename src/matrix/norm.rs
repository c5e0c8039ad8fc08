use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// L1 norm (sum of absolute values).
    pub fn norm_l1(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[i].abs();
        }
        sum
    }

    /// Max norm (largest absolute component).
    ///
    /// This is the error-magnitude reduction used by the adaptive quadrature
    /// and ODE step controllers.
    ///
    /// ```
    /// use mathlite::Vector;
    /// let v = Vector::from_array([1.0_f64, -5.0, 3.0]);
    /// assert_eq!(v.norm_max(), 5.0);
    /// ```
    pub fn norm_max(&self) -> T {
        let mut max = T::zero();
        for i in 0..N {
            let a = self[i].abs();
            if a > max {
                max = a;
            }
        }
        max
    }

    /// Return a unit vector in the same direction.
    ///
    /// Panics if the norm is zero.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        *self * (T::one() / n)
    }
}
