// Single-threaded reference sweeps

use crate::core::traits::Real;
use crate::error::SweepError;
use crate::grid::check_dims;

/// Row-major Jacobi sweep on one thread: `unew ← stencil(u)`.
pub fn jacobi<T: Real>(u: &[T], unew: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
    check_dims(u.len(), sizex, sizey)?;
    check_dims(unew.len(), sizex, sizey)?;
    let mut residual = T::zero();
    for i in 1..sizex - 1 {
        let mut sum = T::zero();
        for j in 1..sizey - 1 {
            let idx = i * sizey + j;
            let tmp = T::stencil(u[idx - 1], u[idx + 1], u[idx - sizey], u[idx + sizey]);
            let diff = tmp - u[idx];
            sum = sum + diff * diff;
            unew[idx] = tmp;
        }
        residual = residual + sum;
    }
    Ok(residual)
}

/// Row-major in-place Gauss-Seidel sweep on one thread.
pub fn gauss_seidel<T: Real>(u: &mut [T], sizex: usize, sizey: usize) -> Result<T, SweepError> {
    check_dims(u.len(), sizex, sizey)?;
    let mut residual = T::zero();
    for i in 1..sizex - 1 {
        let mut sum = T::zero();
        for j in 1..sizey - 1 {
            let idx = i * sizey + j;
            let tmp = T::stencil(u[idx - 1], u[idx + 1], u[idx - sizey], u[idx + sizey]);
            let diff = tmp - u[idx];
            sum = sum + diff * diff;
            u[idx] = tmp;
        }
        residual = residual + sum;
    }
    Ok(residual)
}
