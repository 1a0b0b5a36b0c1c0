//! Row-major 2D grids.
//!
//! Sweeps operate on plain slices plus `(sizex, sizey)`, so callers may keep
//! their own storage. `Grid` is a convenience owner for that storage with
//! helpers for the usual fixed-boundary setups.
//!
//! Cell `(i, j)` lives at `i * sizey + j`; rows `0` and `sizex - 1` and
//! columns `0` and `sizey - 1` form the boundary, which no sweep writes.

use crate::core::traits::Real;
use crate::error::SweepError;

/// Validate that a buffer of `len` cells holds a `sizex × sizey` grid with a
/// non-empty interior.
pub fn check_dims(len: usize, sizex: usize, sizey: usize) -> Result<(), SweepError> {
    if sizex < 3 || sizey < 3 {
        return Err(SweepError::InvalidDimensions { sizex, sizey });
    }
    let expected = sizex
        .checked_mul(sizey)
        .ok_or(SweepError::InvalidDimensions { sizex, sizey })?;
    if len != expected {
        return Err(SweepError::BufferSizeMismatch { expected, actual: len });
    }
    Ok(())
}

/// Owned row-major grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    sizex: usize,
    sizey: usize,
    cells: Vec<T>,
}

impl<T: Real> Grid<T> {
    /// All-zero grid.
    pub fn new(sizex: usize, sizey: usize) -> Result<Self, SweepError> {
        Self::from_fn(sizex, sizey, |_, _| T::zero())
    }

    /// Grid whose boundary cells hold `value` and whose interior is zero.
    pub fn with_boundary(sizex: usize, sizey: usize, value: T) -> Result<Self, SweepError> {
        Self::from_fn(sizex, sizey, |i, j| {
            if i == 0 || j == 0 || i == sizex - 1 || j == sizey - 1 {
                value
            } else {
                T::zero()
            }
        })
    }

    /// Grid with `cell(i, j)` at every position.
    pub fn from_fn(
        sizex: usize,
        sizey: usize,
        mut cell: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, SweepError> {
        if sizex < 3 || sizey < 3 {
            return Err(SweepError::InvalidDimensions { sizex, sizey });
        }
        let mut cells = Vec::with_capacity(sizex * sizey);
        for i in 0..sizex {
            for j in 0..sizey {
                cells.push(cell(i, j));
            }
        }
        Ok(Self { sizex, sizey, cells })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(sizex: usize, sizey: usize, cells: Vec<T>) -> Result<Self, SweepError> {
        check_dims(cells.len(), sizex, sizey)?;
        Ok(Self { sizex, sizey, cells })
    }

    pub fn sizex(&self) -> usize {
        self.sizex
    }

    pub fn sizey(&self) -> usize {
        self.sizey
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.cells[i * self.sizey + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.cells[i * self.sizey + j] = value;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Whether every boundary cell equals the one in `other`.
    pub fn boundary_eq(&self, other: &Self) -> bool {
        if self.sizex != other.sizex || self.sizey != other.sizey {
            return false;
        }
        let (nx, ny) = (self.sizex, self.sizey);
        let rows = (0..ny).all(|j| self.get(0, j) == other.get(0, j) && self.get(nx - 1, j) == other.get(nx - 1, j));
        let cols = (0..nx).all(|i| self.get(i, 0) == other.get(i, 0) && self.get(i, ny - 1) == other.get(i, ny - 1));
        rows && cols
    }
}
