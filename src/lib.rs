//! itersolve: preconditioned iterative linear solvers with iteration-event monitoring
//!
//! This crate provides a Conjugate Gradient engine for symmetric positive-definite
//! systems defined through a storage-free [`LinearOperator`] abstraction, optional
//! [`Preconditioner`]s, and an [`IterationManager`] that dispatches solver lifecycle
//! events to registered listeners.
//!
//! ```
//! use faer::Mat;
//! use itersolve::{ConjugateGradient, IterativeLinearSolver};
//!
//! let a = Mat::<f64>::from_fn(3, 3, |i, j| if i == j { 2.0 } else if i.abs_diff(j) == 1 { -1.0 } else { 0.0 });
//! let b = vec![1.0, 0.0, 1.0];
//! let mut solver = ConjugateGradient::new(100, 1e-10, true);
//! let x = solver.solve(&a, &b).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-8);
//! ```

pub mod core;
pub mod error;
pub mod matrix;
pub mod preconditioner;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::core::traits::{InnerProduct, LinearOperator};
pub use error::SolverError;
pub use preconditioner::{Jacobi, Preconditioner};
pub use solver::{ConjugateGradient, IterativeLinearSolver, SolverEvent};
pub use utils::convergence::{Convergence, SolveStats};
pub use utils::iteration::{IterationListener, IterationManager, ListenerId};
