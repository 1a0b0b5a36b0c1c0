//! Shared-memory parallel plumbing for the sweeps.
//!
//! - [`pool`]: a dedicated rayon pool with exactly one thread per row worker.
//! - [`shared`]: the single-buffer cell view and the per-worker progress
//!   counters used by the wavefront sweep.

pub mod pool;
pub mod shared;

pub use pool::WorkerPool;
pub use shared::{ProgressCounters, SharedCells};
