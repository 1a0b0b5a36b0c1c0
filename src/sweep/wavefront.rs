//! Wavefront (pipelined) Gauss-Seidel sweep.
//!
//! A serial Gauss-Seidel sweep updates cells in row-major order, in place, so
//! each cell sees the new values above and to the left and the old values
//! below and to the right. To run that order on `P` workers the rows are cut
//! into `P` bands and the columns into `B` blocks:
//!
//! ```text
//!            block 0   block 1   block 2  ...
//! worker 0   [ t=0 ]   [ t=1 ]   [ t=2 ]
//! worker 1             [ t=1 ]   [ t=2 ]   [ t=3 ]
//! worker 2                       [ t=2 ]   [ t=3 ]   ...
//! ```
//!
//! Worker `k` may start block `j` once worker `k - 1` has finished block `j`,
//! which it learns by spinning on `k - 1`'s progress counter. Blocks of one
//! worker run strictly left to right, so waiting per block reproduces the
//! row-major order cell for cell. The last row of band `k - 1` is read under
//! the counter's acquire; the first row of band `k + 1` is read before `k`
//! publishes the block, so `k + 1` cannot have overwritten it yet.

use crate::core::partition::{partition, partitions};
use crate::core::traits::Real;
use crate::error::SweepError;
use crate::grid::check_dims;
use crate::parallel::{ProgressCounters, SharedCells, WorkerPool};
use crate::sweep::reduce_rows;

/// One in-place Gauss-Seidel sweep of `u`, pipelined over `blocks` column
/// blocks. Returns Σ (new − old)².
///
/// Every pool thread takes one band of rows; the pool must not run another
/// wavefront at the same time (see `SweepContext`, which enforces this by
/// requiring `&mut self`).
pub fn gauss_seidel<T: Real>(
    pool: &WorkerPool,
    u: &mut [T],
    sizex: usize,
    sizey: usize,
    blocks: usize,
) -> Result<T, SweepError> {
    check_dims(u.len(), sizex, sizey)?;
    if blocks == 0 {
        return Err(SweepError::InvalidBlockCount);
    }

    let workers = pool.workers();
    let progress = ProgressCounters::new(workers);
    let cells = SharedCells::new(u);

    let row_sums = pool.broadcast(|id| {
        let rows = partition(id, workers, sizex).clamp(1, sizex - 1);
        let mut sums = vec![T::zero(); rows.len()];

        for (done, block) in partitions(blocks, sizey).enumerate() {
            if id > 0 {
                progress.wait_past(id - 1, done);
            }

            let cols = block.clamp(1, sizey - 1);
            for (sum, i) in sums.iter_mut().zip(rows.clone()) {
                let row = i * sizey;
                for j in cols.clone() {
                    let idx = row + j;
                    // SAFETY: idx is interior, so all four neighbours are in
                    // bounds. This worker is the only writer of its band; the
                    // row above is final for this block (counter acquired) and
                    // the row below is untouched until this block is published.
                    let (old, tmp) = unsafe {
                        (
                            cells.read(idx),
                            T::stencil(
                                cells.read(idx - 1),
                                cells.read(idx + 1),
                                cells.read(idx - sizey),
                                cells.read(idx + sizey),
                            ),
                        )
                    };
                    let diff = tmp - old;
                    *sum = *sum + diff * diff;
                    // SAFETY: idx lies in this worker's band and block.
                    unsafe { cells.write(idx, tmp) };
                }
            }

            progress.publish(id);
        }
        sums
    });

    Ok(reduce_rows(row_sums))
}
