//! Fixed-size cell grid.
//!
//! Cells are stored row-major in a flat `Vec` so that the undo snapshot can be
//! a plain parallel slice.  The dimensions are fixed at construction; there is
//! no way to resize a [`Grid`] afterwards.

use super::error::CanvasError;

// ───────────────────────────────────────── cell state ────────

/// Binary state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Style id used by the theme to pick the cell's appearance.
    pub fn style_id(self) -> &'static str {
        match self {
            CellState::Dead => "cell",
            CellState::Alive => "cell_selected",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

// ───────────────────────────────────────── grid ──────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid.  Zero-sized grids are rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CanvasError> {
        if rows == 0 || cols == 0 {
            return Err(CanvasError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of `(row, col)`, or `None` when out of range.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Set a cell.  Returns `false` (and does nothing) when out of range.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> bool {
        match self.index_of(row, col) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    pub fn set_index(&mut self, index: usize, state: CellState) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = state;
        }
    }

    /// Every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy of all cells in row-major order.
    pub fn snapshot(&self) -> Vec<CellState> {
        self.cells.clone()
    }

    /// Overwrite all cells from a row-major slice of the same length.
    /// A slice of the wrong length is ignored.
    pub fn restore(&mut self, snapshot: &[CellState]) {
        if snapshot.len() == self.cells.len() {
            self.cells.copy_from_slice(snapshot);
        }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(60, 60).unwrap();
        assert_eq!(grid.cell_count(), 3600);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(CanvasError::EmptyGrid { rows: 0, cols: 5 })
        ));
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(1, 0), Some(4));
        assert_eq!(grid.index_of(2, 3), Some(11));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 4), None);
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.set(2, 0, CellState::Alive));
        assert_eq!(grid.alive_count(), 0);
        assert!(grid.set(1, 1, CellState::Alive));
        assert_eq!(grid.get(1, 1), Some(CellState::Alive));
        assert_eq!(grid.get(1, 0), Some(CellState::Dead));
    }

    #[test]
    fn restore_rejects_mismatched_length() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, CellState::Alive);
        grid.restore(&[CellState::Dead; 3]);
        assert_eq!(grid.get(0, 0), Some(CellState::Alive));
    }
}
