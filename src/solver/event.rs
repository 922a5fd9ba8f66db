//! Snapshot of solver state handed to iteration listeners.

/// A view of the solver's state at one point of the iteration lifecycle.
///
/// The slices borrow the solver's working vectors, so an event is valid
/// only during the listener callback that receives it; the next iteration
/// overwrites the underlying storage. Listeners that retain values must
/// copy them out. The borrows are immutable, so listeners can never
/// corrupt a running solve.
pub struct SolverEvent<'a, T> {
    iterations: usize,
    solution: &'a [T],
    residual: &'a [T],
    right_hand_side: &'a [T],
    residual_norm: T,
}

impl<'a, T: Copy> SolverEvent<'a, T> {
    pub fn new(
        iterations: usize,
        solution: &'a [T],
        residual: &'a [T],
        right_hand_side: &'a [T],
        residual_norm: T,
    ) -> Self {
        Self {
            iterations,
            solution,
            residual,
            right_hand_side,
            residual_norm,
        }
    }

    /// Iteration count at the time of the event, including the increment
    /// consumed by initialization.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current estimate of the solution.
    pub fn solution(&self) -> &[T] {
        self.solution
    }

    /// Current (recurrence-updated) residual b − A·x.
    pub fn residual(&self) -> &[T] {
        self.residual
    }

    /// The right-hand side of the system being solved.
    pub fn right_hand_side(&self) -> &[T] {
        self.right_hand_side
    }

    /// Euclidean norm of [`residual`](Self::residual).
    pub fn residual_norm(&self) -> T {
        self.residual_norm
    }
}
