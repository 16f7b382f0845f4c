//! Fixed-size visitation grid for the knight's tour
//!
//! The board tracks one of three states per cell. A cell only ever moves
//! forward through `Unvisited -> Current -> Visited`; nothing resets a cell,
//! and exactly one cell is `Current` while a tour is active.

use ndarray::Array2;

use crate::io::error::{Result, TourError};

/// Visitation state of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// The knight has not been to this cell
    #[default]
    Unvisited,
    /// The knight is on this cell now
    Current,
    /// The knight has departed this cell and cannot return
    Visited,
}

/// Zero-based board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular board of cell states with dimensions fixed at construction
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<CellState>,
    dimensions: (usize, usize),
}

impl Board {
    /// Create a board with every cell `Unvisited`
    ///
    /// The caller enforces any configured size range; the board itself only
    /// rejects zero-sized dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(TourError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            cells: Array2::from_elem((rows, cols), CellState::Unvisited),
            dimensions: (rows, cols),
        })
    }

    /// Get the number of rows on the board
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns on the board
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells on the board
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Check whether a position lies on the board
    pub const fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.dimensions.0 && pos.col < self.dimensions.1
    }

    /// Read the state of the cell at `pos`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `pos` is not on the board.
    pub fn state_at(&self, pos: Position) -> Result<CellState> {
        self.cells
            .get([pos.row, pos.col])
            .copied()
            .ok_or(TourError::OutOfBounds {
                position: (pos.row, pos.col),
                dimensions: self.dimensions,
            })
    }

    /// Mark the cell at `pos` as departed
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `pos` is not on the board.
    pub fn mark_visited(&mut self, pos: Position) -> Result<()> {
        *self.cell_mut(pos)? = CellState::Visited;
        Ok(())
    }

    /// Mark the cell at `pos` as the knight's square
    ///
    /// The previous `Current` cell must already have been demoted with
    /// [`mark_visited`](Self::mark_visited).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `pos` is not on the board.
    pub fn mark_current(&mut self, pos: Position) -> Result<()> {
        *self.cell_mut(pos)? = CellState::Current;
        Ok(())
    }

    /// Count the cells the knight has not reached
    pub fn unvisited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == CellState::Unvisited)
            .count()
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut CellState> {
        let dimensions = self.dimensions;
        self.cells
            .get_mut([pos.row, pos.col])
            .ok_or(TourError::OutOfBounds {
                position: (pos.row, pos.col),
                dimensions,
            })
    }
}
