//! Preconditioners for iterative linear solvers.
//!
//! A preconditioner is a square [`LinearOperator`] that can additionally
//! apply an approximation of its own inverse. Solvers use only `solve`;
//! the forward action is kept so callers can inspect or compose the
//! preconditioning operator itself.

use crate::core::traits::LinearOperator;
use crate::error::SolverError;

/// A square operator M ≈ A that can cheaply solve M·z = b.
pub trait Preconditioner<T>: LinearOperator<T> {
    /// Apply the approximate inverse: z ≈ M⁻¹ b. The output has the same
    /// length as the input. Squareness and agreement with the system
    /// operator's dimension are validated by the solver before the loop.
    fn solve(&self, b: &[T], z: &mut [T]) -> Result<(), SolverError>;
}

pub mod jacobi;

pub use jacobi::Jacobi;
