//! Matrix module: dense operator implementations.

pub mod dense;
