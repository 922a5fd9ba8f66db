//! Dense-matrix operators on top of Faer.
//!
//! Any `faer::Mat<T>` (or borrowed `MatRef`) is usable directly as a
//! [`LinearOperator`], so callers with an explicit matrix never need a
//! wrapper type.

use crate::core::traits::LinearOperator;
use faer::{Mat, MatRef};
use num_traits::Float;

impl<T: Float> LinearOperator<T> for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }

    fn ncols(&self) -> usize {
        self.ncols()
    }

    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

impl<'a, T: Float> LinearOperator<T> for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }

    fn ncols(&self) -> usize {
        self.ncols()
    }

    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matvec_small() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![0.0; 2];
        a.matvec(&x, &mut y);
        assert_eq!(y, vec![8.0, 26.0]);
        assert_eq!(LinearOperator::<f64>::nrows(&a), 2);
        assert_eq!(LinearOperator::<f64>::ncols(&a), 3);
        assert!(!LinearOperator::<f64>::is_square(&a));
    }
}
