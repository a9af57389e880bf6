//! Single-level undo buffer.
//!
//! The snapshot is taken on every press on the grid area, *after* the pressed
//! cell has already been painted.  To get that cell back, [`UndoBuffer::restore`]
//! flips it after copying the snapshot in.  This mirrors how the canvas has
//! always behaved, including the case where the press did not actually change
//! the cell (the flip then inverts it).

use super::grid::{CellState, Grid};

#[derive(Debug, Clone)]
pub struct UndoBuffer {
    snapshot: Vec<CellState>,
    /// Flat index of the cell that started the last stroke with a tool active.
    pressed: Option<usize>,
}

impl UndoBuffer {
    /// Start with a snapshot of `grid` and no initiating cell.
    pub fn new(grid: &Grid) -> Self {
        Self {
            snapshot: grid.snapshot(),
            pressed: None,
        }
    }

    /// Overwrite the snapshot in place with the current grid.
    pub fn capture(&mut self, grid: &Grid) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(grid.cells());
    }

    pub fn set_pressed(&mut self, index: usize) {
        self.pressed = Some(index);
    }

    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> &[CellState] {
        &self.snapshot
    }

    /// Copy the snapshot back into `grid`, then invert the initiating cell.
    pub fn restore(&self, grid: &mut Grid) {
        grid.restore(&self.snapshot);
        if let Some(i) = self.pressed {
            if let Some(current) = grid.get_index(i) {
                grid.set_index(i, current.flipped());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_press_is_plain_copy() {
        let mut grid = Grid::new(2, 2).unwrap();
        let undo = UndoBuffer::new(&grid);
        grid.set(0, 1, CellState::Alive);
        undo.restore(&mut grid);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn restore_flips_initiating_cell() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut undo = UndoBuffer::new(&grid);

        // Pressed cell painted first, then captured.
        grid.set(0, 0, CellState::Alive);
        undo.set_pressed(0);
        undo.capture(&grid);
        grid.set(1, 1, CellState::Alive);

        undo.restore(&mut grid);
        assert_eq!(grid.get(0, 0), Some(CellState::Dead));
        assert_eq!(grid.get(1, 1), Some(CellState::Dead));
    }
}
