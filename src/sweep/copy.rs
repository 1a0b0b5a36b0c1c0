// Tiled interior copy

use rayon::prelude::*;

use crate::core::partition::partitions;
use crate::core::traits::Real;
use crate::error::SweepError;
use crate::grid::check_dims;
use crate::parallel::WorkerPool;
use crate::sweep::row_bands;

/// Copy the interior of `source` into `dest`.
///
/// Each worker owns a band of rows and walks it in `blocks` column tiles, one
/// tile after the other. Boundary cells of `dest` are left as they are.
pub fn copy_interior<T: Real>(
    pool: &WorkerPool,
    source: &[T],
    dest: &mut [T],
    sizex: usize,
    sizey: usize,
    blocks: usize,
) -> Result<(), SweepError> {
    check_dims(source.len(), sizex, sizey)?;
    check_dims(dest.len(), sizex, sizey)?;
    if blocks == 0 {
        return Err(SweepError::InvalidBlockCount);
    }

    let bands = row_bands(dest, sizex, sizey, pool.workers());
    pool.install(|| {
        bands.into_par_iter().for_each(|band| {
            for tile in partitions(blocks, sizey) {
                let cols = tile.clamp(1, sizey - 1);
                if cols.is_empty() {
                    continue;
                }
                for (local, i) in band.rows.clone().enumerate() {
                    let src = &source[i * sizey + cols.start..i * sizey + cols.end];
                    band.cells[local * sizey + cols.start..local * sizey + cols.end].copy_from_slice(src);
                }
            }
        });
    });
    Ok(())
}
