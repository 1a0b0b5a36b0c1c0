//! Context module for relaxa.
//!
//! This module provides the context type that owns a worker pool and the sweep
//! options, and selects between the double-buffered and the in-place sweep.
//!
//! Modules:
//! - [`sweep_context`]: `SweepKind`, `SweepContext` and the one-shot free
//!   functions `copy`, `jacobi_sweep` and `gauss_seidel_sweep`.
//!
//! # Example
//! ```rust
//! use relaxa::{Convergence, Grid, SweepContext, SweepKind, SweepOptions};
//!
//! let mut u = Grid::<f64>::with_boundary(32, 32, 1.0).unwrap();
//! let mut uhelp = u.clone();
//! let mut ctx = SweepContext::new(SweepKind::InPlaceGaussSeidel, SweepOptions::new().with_workers(4)).unwrap();
//! let stats = ctx
//!     .solve(u.as_mut_slice(), uhelp.as_mut_slice(), 32, 32, &Convergence::new(1e-8, 10_000))
//!     .unwrap();
//! assert!(stats.converged);
//! ```

pub mod sweep_context;
pub use sweep_context::{copy, gauss_seidel_sweep, jacobi_sweep, SweepContext, SweepKind};
