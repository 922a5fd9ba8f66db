//! Iterative solver interfaces.
//!
//! The three unpreconditioned entry points differ only in aliasing
//! semantics, kept as distinct named operations so each contract is
//! explicit: `solve` allocates from a zero guess, `solve_with_guess`
//! allocates a new vector seeded from a caller-owned guess it never
//! touches, and `solve_in_place` mutates the caller's guess into the
//! solution.

use crate::core::traits::LinearOperator;
use crate::error::SolverError;
use crate::preconditioner::Preconditioner;
use crate::utils::convergence::SolveStats;
use crate::utils::iteration::IterationManager;
use num_traits::Float;

/// Common interface for iterative linear solvers driven by an
/// [`IterationManager`].
pub trait IterativeLinearSolver<T: Float> {
    /// The manager owning this solver's iteration count and listeners.
    /// Register listeners here; they persist across solves.
    fn iteration_manager(&mut self) -> &mut IterationManager<T>;

    /// Solve A·x = b, optionally preconditioned by `m`, writing the result
    /// into `x0` (which doubles as the initial guess). Returns iteration
    /// stats on convergence.
    fn solve_in_place<M>(
        &mut self,
        a: &M,
        m: Option<&dyn Preconditioner<T>>,
        b: &[T],
        x0: &mut [T],
    ) -> Result<SolveStats<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized;

    /// Solve A·x = b from a zero initial guess, returning a new vector.
    fn solve<M>(&mut self, a: &M, b: &[T]) -> Result<Vec<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        let mut x = vec![T::zero(); a.ncols()];
        self.solve_in_place(a, None, b, &mut x)?;
        Ok(x)
    }

    /// Solve A·x = b seeded from `x0`, returning a new vector; `x0` is
    /// left untouched.
    fn solve_with_guess<M>(&mut self, a: &M, b: &[T], x0: &[T]) -> Result<Vec<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        let mut x = x0.to_vec();
        self.solve_in_place(a, None, b, &mut x)?;
        Ok(x)
    }

    /// Preconditioned variant of [`solve`](Self::solve).
    fn solve_preconditioned<M>(
        &mut self,
        a: &M,
        m: &dyn Preconditioner<T>,
        b: &[T],
    ) -> Result<Vec<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        let mut x = vec![T::zero(); a.ncols()];
        self.solve_in_place(a, Some(m), b, &mut x)?;
        Ok(x)
    }

    /// Preconditioned variant of [`solve_with_guess`](Self::solve_with_guess).
    fn solve_preconditioned_with_guess<M>(
        &mut self,
        a: &M,
        m: &dyn Preconditioner<T>,
        b: &[T],
        x0: &[T],
    ) -> Result<Vec<T>, SolverError>
    where
        M: LinearOperator<T> + ?Sized,
    {
        let mut x = x0.to_vec();
        self.solve_in_place(a, Some(m), b, &mut x)?;
        Ok(x)
    }
}

/// Fail-fast shape validation shared by solver entry points. Checked in
/// order: system operator squareness, right-hand side length, guess
/// length, preconditioner squareness, preconditioner dimension.
pub(crate) fn check_parameters<T, M>(
    a: &M,
    m: Option<&dyn Preconditioner<T>>,
    b: &[T],
    x0: &[T],
) -> Result<(), SolverError>
where
    M: LinearOperator<T> + ?Sized,
{
    if !a.is_square() {
        return Err(SolverError::NonSquareOperator {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if b.len() != a.nrows() {
        return Err(SolverError::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    if x0.len() != a.ncols() {
        return Err(SolverError::DimensionMismatch {
            expected: a.ncols(),
            actual: x0.len(),
        });
    }
    if let Some(m) = m {
        if !m.is_square() {
            return Err(SolverError::NonSquareOperator {
                rows: m.nrows(),
                cols: m.ncols(),
            });
        }
        if m.nrows() != a.nrows() {
            return Err(SolverError::DimensionMismatch {
                expected: a.nrows(),
                actual: m.nrows(),
            });
        }
    }
    Ok(())
}

pub mod event;
pub use event::SolverEvent;

pub mod cg;
pub use cg::ConjugateGradient;
