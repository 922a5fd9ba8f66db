//! Supporting utilities: convergence criteria and iteration management.

pub mod convergence;
pub mod iteration;

pub use convergence::{Convergence, SolveStats};
pub use iteration::{IterationListener, IterationManager, ListenerId};
