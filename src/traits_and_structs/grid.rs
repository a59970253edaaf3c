use super::cell::Cell;
use super::error::LifeError;

/// A fixed-size board of cells stored row-major.
///
/// The dimensions are set once in [`Grid::new_empty`] and never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new_empty(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(LifeError::InvalidDimensions { width, height })?;
        Ok(Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        })
    }

    /// A dead grid with the same dimensions as `self`.
    pub fn blank_like(&self) -> Self {
        Self {
            cells: vec![Cell::default(); self.cells.len()],
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-bounds positions read as `None`.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid_idx(row, col).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Returns `false` and leaves the grid untouched when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.grid_idx(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        let i = self.grid_idx(row, col)?;
        self.cells[i] = self.cells[i].toggled();
        Some(self.cells[i])
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn grid_idx<I: TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
        if let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) {
            if row < self.height && col < self.width {
                Some(col + row * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }
}
