//! Core linear-algebra traits for itersolve.

/// A square-or-rectangular linear map that can be applied to a vector.
///
/// No storage is implied: implementors may hold a dense matrix, a sparse
/// structure, or compute entries on the fly. `matvec` must not mutate `x`,
/// and the operator's action must not change between calls.
pub trait LinearOperator<T> {
    /// Number of rows (length of `A · x`).
    fn nrows(&self) -> usize;
    /// Number of columns (required length of `x`).
    fn ncols(&self) -> usize;
    /// Compute y = A · x. Callers guarantee `x.len() == ncols()` and
    /// `y.len() == nrows()`; solvers validate dimensions before the loop.
    fn matvec(&self, x: &[T], y: &mut [T]);

    /// True when the operator maps a space onto itself.
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Inner products & norms.
pub trait InnerProduct<V: ?Sized> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}
