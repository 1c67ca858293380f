use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid of {expected} cells cannot take {actual} values")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Escape counts in row-major order.
pub type GridData = Vec<u32>;

/// Fixed N x N escape-count storage. Never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: GridData,
}

impl Grid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn from_data(size: usize, cells: GridData) -> Result<Self, GridError> {
        if cells.len() != size * size {
            return Err(GridError::SizeMismatch {
                expected: size * size,
                actual: cells.len(),
            });
        }

        Ok(Self { size, cells })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<u32> {
        if col >= self.size || row >= self.size {
            return None;
        }

        self.cells.get(row * self.size + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Replaces every cell at once; on error the grid keeps its previous contents.
    pub fn set_cells(&mut self, cells: GridData) -> Result<(), GridError> {
        if cells.len() != self.cells.len() {
            return Err(GridError::SizeMismatch {
                expected: self.cells.len(),
                actual: cells.len(),
            });
        }

        self.cells = cells;
        Ok(())
    }
}
