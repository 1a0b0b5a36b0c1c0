//! Convergence tracking & tolerance checks for repeated sweeps.

/// Stopping criteria: residual tolerance and sweep limit.
#[derive(Clone, Copy, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { tol, max_iters }
    }

    /// Returns (should_stop, stats) after sweep number `i` produced `residual`.
    ///
    /// Converged means `residual < tol`; running out of sweeps stops without
    /// converging.
    pub fn check(&self, residual: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = residual < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: residual,
                converged,
            },
        )
    }
}
