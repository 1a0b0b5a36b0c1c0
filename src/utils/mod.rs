//! Utilities shared by the sweep drivers.

pub mod convergence;
pub use convergence::{Convergence, SolveStats};
