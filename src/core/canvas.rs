//! The editable canvas: grid, tool selection, undo buffer, stroke tracking
//! and the generation counter.
//!
//! Every operation here is a direct, synchronous mutation.  Rendering reads
//! the state through the accessors; nothing in this module knows about
//! terminals or widgets.

use super::error::CanvasError;
use super::grid::Grid;
use super::tool::{paint_rule, PointerButton, Tool};
use super::undo::UndoBuffer;

/// An in-progress press-and-drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    button: PointerButton,
    /// Last cell the pointer was over, so repeated drag events inside the same
    /// cell count as a single enter.
    last_cell: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    grid: Grid,
    tool: Option<Tool>,
    undo: UndoBuffer,
    stroke: Option<Stroke>,
    generation: u64,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize) -> Result<Self, CanvasError> {
        let grid = Grid::new(rows, cols)?;
        let undo = UndoBuffer::new(&grid);
        Ok(Self {
            grid,
            tool: None,
            undo,
            stroke: None,
            generation: 0,
        })
    }

    // ── accessors ──────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    #[cfg(test)]
    pub fn undo_buffer(&self) -> &UndoBuffer {
        &self.undo
    }

    // ── tools ──────────────────────────────────────────────────

    /// Toggle-group selection: picking the active tool again deselects it.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = if self.tool == Some(tool) {
            None
        } else {
            Some(tool)
        };
        tracing::debug!(tool = ?self.tool, "tool selection changed");
    }

    // ── strokes ────────────────────────────────────────────────

    /// Press on a cell.
    ///
    /// The cell is painted first, then the whole grid is captured for undo,
    /// so the captured state already includes the pressed cell's new value.
    pub fn press(&mut self, row: usize, col: usize, button: PointerButton) {
        self.paint(row, col, button);
        if self.tool.is_some() {
            if let Some(index) = self.grid.index_of(row, col) {
                self.undo.set_pressed(index);
            }
        }
        self.undo.capture(&self.grid);
        self.stroke = Some(Stroke {
            button,
            last_cell: Some((row, col)),
        });
        tracing::debug!(row, col, ?button, tool = ?self.tool, "stroke started");
    }

    /// Press inside the grid area but not on any cell: only the undo
    /// snapshot is refreshed.  No stroke starts, so dragging from here onto
    /// cells paints nothing.
    pub fn press_outside_cells(&mut self) {
        self.undo.capture(&self.grid);
        self.stroke = None;
    }

    /// Pointer moved onto `(row, col)` with the button still held.
    pub fn drag_enter(&mut self, row: usize, col: usize) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if stroke.last_cell == Some((row, col)) {
            return;
        }
        stroke.last_cell = Some((row, col));
        let button = stroke.button;
        self.paint(row, col, button);
    }

    /// Pointer left the cells while dragging; re-entering a cell applies the
    /// rule again.
    pub fn drag_leave(&mut self) {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.last_cell = None;
        }
    }

    pub fn release(&mut self) {
        if self.stroke.take().is_some() {
            tracing::debug!("stroke finished");
        }
    }

    fn paint(&mut self, row: usize, col: usize, button: PointerButton) {
        if let Some(state) = paint_rule(self.tool, button) {
            self.grid.set(row, col, state);
        }
    }

    // ── whole-canvas actions ───────────────────────────────────

    pub fn undo(&mut self) {
        self.undo.restore(&mut self.grid);
        tracing::debug!(pressed = ?self.undo.pressed(), "undo applied");
    }

    /// Every cell dead, whatever tool is selected.  The undo buffer is kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        tracing::debug!("canvas reset");
    }

    pub fn advance_generation(&mut self) -> u64 {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "generation advanced");
        self.generation
    }
}
