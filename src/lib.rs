//! relaxa: parallel relaxation sweeps for 2D five-point stencils
//!
//! This crate provides one-sweep kernels for Laplace/heat-type iterations on
//! row-major grids: a tiled interior copy, a double-buffered Jacobi sweep and
//! an in-place wavefront Gauss-Seidel sweep that keeps the serial row-major
//! dependency while running on several workers.

pub mod parallel;

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod grid;
pub mod sweep;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::context::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::grid::{check_dims, Grid};
pub use crate::utils::*;

// Re-export SolveStats at the crate root for convenience
pub use crate::utils::convergence::SolveStats;
