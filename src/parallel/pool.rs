// rayon-based worker pool

use rayon::{BroadcastContext, ThreadPool};

use crate::error::SweepError;

/// A rayon pool sized to the number of row workers of a sweep.
///
/// Each pool thread is one worker of the OpenMP-style "parallel region":
/// `broadcast` runs a closure once on every thread and hands it the worker
/// id, `install` runs data-parallel iterators on the pool.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, SweepError> {
        if workers == 0 {
            return Err(SweepError::InvalidWorkerCount);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("relaxa-worker-{i}"))
            .build()
            .map_err(|e| SweepError::ThreadPool(e.to_string()))?;
        tracing::debug!(workers, "built sweep worker pool");
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `op` inside the pool so rayon iterators use its threads.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Run `op(worker_id)` once on every pool thread, all concurrently, and
    /// collect the results in worker order.
    pub fn broadcast<OP, R>(&self, op: OP) -> Vec<R>
    where
        OP: Fn(usize) -> R + Sync,
        R: Send,
    {
        self.pool.broadcast(|ctx: BroadcastContext<'_>| op(ctx.index()))
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool").field("workers", &self.workers).finish()
    }
}
