use thiserror::Error;

// Unified error type for relaxa

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("grid {sizex}x{sizey} has no interior (need at least 3x3)")]
    InvalidDimensions { sizex: usize, sizey: usize },
    #[error("buffer holds {actual} cells, grid needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    #[error("column block count must be at least 1")]
    InvalidBlockCount,
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}
