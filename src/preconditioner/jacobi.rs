// Jacobi (diagonal) preconditioner

use crate::core::traits::LinearOperator;
use crate::error::SolverError;
use crate::preconditioner::Preconditioner;
use num_traits::Float;

/// Jacobi preconditioner: M = D, M⁻¹ = D⁻¹ where D = diag(A).
pub struct Jacobi<T> {
    diag: Vec<T>,
    inv_diag: Vec<T>,
}

impl<T: Float> Jacobi<T> {
    /// Build the preconditioner from the diagonal of `a`, probed with
    /// standard basis vectors so that matrix-free operators work too.
    /// Fails with `NonSquareOperator` when `a` is not square. Zero diagonal
    /// entries invert to zero.
    pub fn from_operator<M>(a: &M) -> Result<Self, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        if !a.is_square() {
            return Err(SolverError::NonSquareOperator {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut diag = vec![T::zero(); n];
        let mut e = vec![T::zero(); n];
        let mut col = vec![T::zero(); n];
        for i in 0..n {
            e.iter_mut().for_each(|x| *x = T::zero());
            e[i] = T::one();
            a.matvec(&e, &mut col);
            diag[i] = col[i];
        }
        let inv_diag = diag
            .iter()
            .map(|&d| if d != T::zero() { T::one() / d } else { T::zero() })
            .collect();
        Ok(Self { diag, inv_diag })
    }

    /// The extracted diagonal of the source operator.
    pub fn diagonal(&self) -> &[T] {
        &self.diag
    }
}

impl<T: Float> LinearOperator<T> for Jacobi<T> {
    fn nrows(&self) -> usize {
        self.diag.len()
    }

    fn ncols(&self) -> usize {
        self.diag.len()
    }

    fn matvec(&self, x: &[T], y: &mut [T]) {
        for i in 0..self.diag.len() {
            y[i] = self.diag[i] * x[i];
        }
    }
}

impl<T: Float> Preconditioner<T> for Jacobi<T> {
    fn solve(&self, b: &[T], z: &mut [T]) -> Result<(), SolverError> {
        for i in 0..self.inv_diag.len() {
            z[i] = self.inv_diag[i] * b[i];
        }
        Ok(())
    }
}
