//! Core traits and slice wrappers shared by solvers and preconditioners.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, LinearOperator};
