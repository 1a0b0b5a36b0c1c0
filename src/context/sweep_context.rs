//! Factory and driver for relaxation sweeps.
//!
//! `SweepContext` owns the worker pool and the tuning options, and dispatches
//! on an explicit [`SweepKind`] chosen by the caller. The double-buffered and
//! in-place strategies take different buffers, so the choice is never
//! inferred from whether two slices alias.
//!
//! # Usage
//!
//! 1. Construct a `SweepContext` with the sweep kind and `SweepOptions`.
//! 2. Call `sweep` once per iteration, or `solve` to iterate to a tolerance.
//!
//! The free functions [`copy`], [`jacobi_sweep`] and [`gauss_seidel_sweep`]
//! build a throwaway context with default options for one-off calls.

use crate::config::SweepOptions;
use crate::core::traits::Real;
use crate::error::SweepError;
use crate::parallel::WorkerPool;
use crate::sweep;
use crate::utils::convergence::{Convergence, SolveStats};

/// Which relaxation a context performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    /// Double-buffered update: read `u`, write the helper buffer.
    Jacobi,
    /// In-place wavefront Gauss-Seidel on `u`.
    InPlaceGaussSeidel,
}

/// Worker pool, options and sweep selection.
#[derive(Debug)]
pub struct SweepContext {
    /// The sweep `sweep` and `solve` run.
    pub kind: SweepKind,
    options: SweepOptions,
    pool: WorkerPool,
}

impl SweepContext {
    pub fn new(kind: SweepKind, options: SweepOptions) -> Result<Self, SweepError> {
        options.validate()?;
        let pool = WorkerPool::new(options.resolved_workers())?;
        Ok(Self { kind, options, pool })
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Copy the interior of `source` into `dest`.
    pub fn copy<T: Real>(&self, source: &[T], dest: &mut [T], sizex: usize, sizey: usize) -> Result<(), SweepError> {
        sweep::copy_interior(&self.pool, source, dest, sizex, sizey, self.options.copy_blocks)
    }

    /// One Jacobi sweep `u → unew`; returns the residual.
    pub fn jacobi<T: Real>(&self, u: &[T], unew: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
        let residual = sweep::jacobi(&self.pool, u, unew, sizex, sizey)?;
        tracing::debug!(workers = self.workers(), ?residual, "jacobi sweep done");
        Ok(residual)
    }

    /// One wavefront Gauss-Seidel sweep of `u` in place; returns the residual.
    pub fn gauss_seidel<T: Real>(&mut self, u: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
        let residual = sweep::gauss_seidel(&self.pool, u, sizex, sizey, self.options.wavefront_blocks)?;
        tracing::debug!(
            workers = self.workers(),
            blocks = self.options.wavefront_blocks,
            ?residual,
            "gauss-seidel sweep done"
        );
        Ok(residual)
    }

    /// One sweep of the configured kind.
    ///
    /// `Jacobi` reads `u` and writes `uhelp`; `InPlaceGaussSeidel` updates `u`
    /// and leaves `uhelp` alone.
    pub fn sweep<T: Real>(&mut self, u: &mut [T], uhelp: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
        match self.kind {
            SweepKind::Jacobi => self.jacobi(u, uhelp, sizex, sizey),
            SweepKind::InPlaceGaussSeidel => self.gauss_seidel(u, sizex, sizey),
        }
    }

    /// Sweep until the residual drops below `conv.tol` or `conv.max_iters`
    /// sweeps have run. The latest iterate is always left in `u`.
    pub fn solve<T: Real>(
        &mut self,
        u: &mut [T],
        uhelp: &mut [T],
        sizex: usize,
        sizey: usize,
        conv: &Convergence<T>,
    ) -> Result<SolveStats<T>, SweepError> {
        let mut stats = SolveStats { iterations: 0, final_residual: T::infinity(), converged: false };
        for i in 1..=conv.max_iters {
            let residual = self.sweep(u, uhelp, sizex, sizey)?;
            if self.kind == SweepKind::Jacobi {
                self.copy(uhelp, u, sizex, sizey)?;
            }
            tracing::trace!(iteration = i, ?residual, "relaxation step");
            let (stop, s) = conv.check(residual, i);
            stats = s;
            if stop {
                break;
            }
        }
        if !stats.converged {
            tracing::warn!(
                iterations = stats.iterations,
                residual = ?stats.final_residual,
                "relaxation stopped before reaching tolerance"
            );
        }
        Ok(stats)
    }
}

/// Copy the interior of `source` into `dest` using the ambient worker count.
pub fn copy<T: Real>(source: &[T], dest: &mut [T], sizex: usize, sizey: usize) -> Result<(), SweepError> {
    SweepContext::new(SweepKind::Jacobi, SweepOptions::default())?.copy(source, dest, sizex, sizey)
}

/// One Jacobi sweep `u → unew` using the ambient worker count.
pub fn jacobi_sweep<T: Real>(u: &[T], unew: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
    SweepContext::new(SweepKind::Jacobi, SweepOptions::default())?.jacobi(u, unew, sizex, sizey)
}

/// One in-place wavefront Gauss-Seidel sweep using the ambient worker count.
pub fn gauss_seidel_sweep<T: Real>(u: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
    SweepContext::new(SweepKind::InPlaceGaussSeidel, SweepOptions::default())?.gauss_seidel(u, sizex, sizey)
}
