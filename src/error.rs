use thiserror::Error;

// Unified error type for itersolve

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("operator is not square ({rows}x{cols})")]
    NonSquareOperator { rows: usize, cols: usize },
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("operator is not positive definite")]
    NonPositiveDefiniteOperator,
    #[error("maximum iteration count exceeded ({0})")]
    IterationLimitExceeded(usize),
    #[error("solve aborted by listener: {0}")]
    Aborted(String),
}

impl SolverError {
    /// True when re-invoking with a larger iteration budget or a looser
    /// tolerance could succeed. Shape and definiteness errors are caller
    /// mistakes and are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SolverError::IterationLimitExceeded(_))
    }
}
