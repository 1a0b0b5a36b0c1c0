//! Configuration for sweeps and worker pools.

pub mod options;
pub use options::{SweepOptions, DEFAULT_COLUMN_BLOCKS};
