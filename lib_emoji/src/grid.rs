use thiserror::Error;

use crate::codec::Rgb;
use crate::constants::{GRID_SIZE, PIXEL_COUNT};

#[derive(Error, Debug)]
pub enum GridError {
    #[error("coordinates ({row}, {col}) are out of bounds for grid size {size}")]
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

/// The 16x16 editing canvas, row-major, every cell white at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Box<[Rgb; PIXEL_COUNT]>,
}

impl PixelGrid {
    pub fn new() -> Self {
        Self {
            cells: Box::new([Rgb::WHITE; PIXEL_COUNT]),
        }
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Rgb) -> Result<(), GridError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: GRID_SIZE,
            });
        }

        self.cells[row * GRID_SIZE + col] = color;
        Ok(())
    }

    pub fn pixel(&self, row: usize, col: usize) -> Result<Rgb, GridError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: GRID_SIZE,
            });
        }

        Ok(self.cells[row * GRID_SIZE + col])
    }

    /// Resets every cell back to white.
    pub fn clear(&mut self) {
        self.cells.fill(Rgb::WHITE);
    }

    /// Iterates the canvas one row slice at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(GRID_SIZE)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Rgb] {
        &mut self.cells[..]
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}
