//! Relaxation sweeps over the interior of a 2D grid.
//!
//! Every sweep replaces interior cells by the five-point average of their
//! neighbours and returns the residual Σ (new − old)². Rows are split over
//! workers with [`crate::core::partition`]; columns are optionally cut into
//! blocks with the same rule.
//!
//! - [`copy`]: tiled copy of interior cells between two buffers.
//! - [`jacobi`]: double-buffered update, no inter-worker ordering.
//! - [`wavefront`]: in-place Gauss-Seidel pipelined over column blocks.
//! - [`serial`]: single-threaded references for both updates.
//!
//! Residuals are summed per row in column order and the row sums are then
//! added in row order, so the result does not depend on the worker count.

use std::ops::Range;

use crate::core::partition::partitions;
use crate::core::traits::Real;

pub mod copy;
pub mod jacobi;
pub mod serial;
pub mod wavefront;

pub use copy::copy_interior;
pub use jacobi::jacobi;
pub use wavefront::gauss_seidel;

/// Interior rows owned by one worker, with the matching slice of a buffer.
pub(crate) struct RowBand<'a, T> {
    pub rows: Range<usize>,
    pub cells: &'a mut [T],
}

/// Split `buf` into one band of interior rows per worker.
///
/// Band `k` holds rows `partition(k, workers, sizex)` clipped to
/// `1..sizex - 1`; its `cells` start at the band's first row.
pub(crate) fn row_bands<T>(buf: &mut [T], sizex: usize, sizey: usize, workers: usize) -> Vec<RowBand<'_, T>> {
    let mut bands = Vec::with_capacity(workers);
    let mut rest = buf;
    let mut offset = 0;
    for part in partitions(workers, sizex) {
        let rows = part.clamp(1, sizex - 1);
        let (_, tail) = std::mem::take(&mut rest).split_at_mut((rows.start - offset) * sizey);
        let (cells, tail) = tail.split_at_mut(rows.len() * sizey);
        rest = tail;
        offset = rows.end;
        bands.push(RowBand { rows, cells });
    }
    bands
}

/// Sum per-row residuals in row order.
pub(crate) fn reduce_rows<T: Real>(row_sums: impl IntoIterator<Item = Vec<T>>) -> T {
    row_sums.into_iter().flatten().fold(T::zero(), |acc, s| acc + s)
}
