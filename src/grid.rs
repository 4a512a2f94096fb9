//! A fixed-size square grid stored in row-major order.
//!
//! Cells are addressed by (`x`, `y`) where `x` is the column and `y` the row;
//! the backing slice is indexed by `y * size + x`. The size is chosen at
//! construction and never changes.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;

use crate::common::BoardError;

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
}

/// Shot status of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    #[default]
    Unfired,
    Fired,
}

/// An owned `size`×`size` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Box<[T]>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size * size].into_boxed_slice(),
        }
    }

    /// Reset every cell to `T::default()`.
    pub fn clear_all(&mut self) {
        self.cells.fill(T::default());
    }
}

impl<T: Copy> Grid<T> {
    /// Width (and height) of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn linearize(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Value at (`x`, `y`), or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.linearize(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the value at (`x`, `y`).
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), BoardError> {
        let i = self
            .linearize(x, y)
            .ok_or(BoardError::OutOfBounds { x, y })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize
    where
        T: PartialEq,
    {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Iterate over `((x, y), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % size, i / size), v))
    }

    /// Iterate over the coordinates of every cell equal to `value`.
    pub fn positions(&self, value: T) -> impl Iterator<Item = (usize, usize)> + '_
    where
        T: PartialEq,
    {
        self.iter()
            .filter(move |&(_, v)| v == value)
            .map(|(pos, _)| pos)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            writeln!(f, "  {:?}", row)?;
        }
        Ok(())
    }
}
