//! Tuning options for the parallel sweeps.
//!
//! `SweepOptions` carries everything a sweep needs to know besides the grid
//! itself: how many workers split the rows, and how many column blocks the
//! copier and the wavefront sweep cut each worker's rows into. It is passed
//! explicitly to every entry point; there is no process-wide setting.

use crate::error::SweepError;

/// Column blocks per worker used by both the copier and the wavefront sweep.
pub const DEFAULT_COLUMN_BLOCKS: usize = 20;

/// Worker count and column tiling for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOptions {
    /// Number of row workers. `None` uses the ambient rayon thread count.
    pub workers: Option<usize>,

    /// Column blocks each worker walks when copying interiors.
    pub copy_blocks: usize,

    /// Column blocks (pipeline stages) of the wavefront Gauss-Seidel sweep.
    pub wavefront_blocks: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            workers: None,
            copy_blocks: DEFAULT_COLUMN_BLOCKS,
            wavefront_blocks: DEFAULT_COLUMN_BLOCKS,
        }
    }
}

impl SweepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_copy_blocks(mut self, blocks: usize) -> Self {
        self.copy_blocks = blocks;
        self
    }

    pub fn with_wavefront_blocks(mut self, blocks: usize) -> Self {
        self.wavefront_blocks = blocks;
        self
    }

    /// Reject zero workers or zero column blocks.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.workers == Some(0) {
            return Err(SweepError::InvalidWorkerCount);
        }
        if self.copy_blocks == 0 || self.wavefront_blocks == 0 {
            return Err(SweepError::InvalidBlockCount);
        }
        Ok(())
    }

    /// Worker count after applying the ambient default.
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(rayon::current_num_threads)
    }
}
