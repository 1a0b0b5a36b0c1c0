// Jacobi sweep (double buffer)

use rayon::prelude::*;

use crate::core::traits::Real;
use crate::error::SweepError;
use crate::grid::check_dims;
use crate::parallel::WorkerPool;
use crate::sweep::{reduce_rows, row_bands};

/// One Jacobi sweep: `unew ← stencil(u)` on every interior cell.
///
/// Reads only `u`, so workers need no coordination; each owns a band of rows
/// of `unew` spanning all interior columns. Returns Σ (unew − u)².
pub fn jacobi<T: Real>(
    pool: &WorkerPool,
    u: &[T],
    unew: &mut [T],
    sizex: usize,
    sizey: usize,
) -> Result<T, SweepError> {
    check_dims(u.len(), sizex, sizey)?;
    check_dims(unew.len(), sizex, sizey)?;

    let bands = row_bands(unew, sizex, sizey, pool.workers());
    let row_sums: Vec<Vec<T>> = pool.install(|| {
        bands
            .into_par_iter()
            .map(|band| {
                let mut sums = Vec::with_capacity(band.rows.len());
                for (local, i) in band.rows.clone().enumerate() {
                    let row = i * sizey;
                    let out = &mut band.cells[local * sizey..(local + 1) * sizey];
                    let mut sum = T::zero();
                    for j in 1..sizey - 1 {
                        let idx = row + j;
                        let tmp = T::stencil(u[idx - 1], u[idx + 1], u[idx - sizey], u[idx + sizey]);
                        let diff = tmp - u[idx];
                        sum = sum + diff * diff;
                        out[j] = tmp;
                    }
                    sums.push(sum);
                }
                sums
            })
            .collect()
    });
    Ok(reduce_rows(row_sums))
}
