//! Convergence tracking & tolerance checks for iterative solvers.

use num_traits::Float;

/// Residual stopping criterion, relative to the right-hand side norm.
pub struct Convergence<T> {
    /// Tolerance δ: the solve stops once ‖r‖ ≤ δ·‖b‖.
    pub delta: T,
}

#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Float> Convergence<T> {
    /// Absolute residual threshold for a given right-hand side norm.
    pub fn threshold(&self, b_norm: T) -> T {
        self.delta * b_norm
    }
}
