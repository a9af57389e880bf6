//! Ratatui widget that draws the cell grid, plus the geometry used to map
//! mouse coordinates back to cells.
//!
//! Each cell is `cell_width` terminal columns wide and one row tall.  Cells
//! that do not fit in the pane are clipped, never wrapped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::core::grid::Grid;
use crate::core::tool::Tool;

use super::layout::point_in_rect;
use super::theme::Theme;

// ───────────────────────────────────────── geometry ──────────

/// Mapping between terminal coordinates and grid cells for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Pane the grid is drawn into (border excluded).
    pub area: Rect,
    pub cell_width: u16,
    /// Cells actually visible in `area`.
    pub visible_rows: usize,
    pub visible_cols: usize,
}

impl GridGeometry {
    pub fn new(area: Rect, grid: &Grid, cell_width: u16) -> Self {
        let cell_width = cell_width.max(1);
        Self {
            area,
            cell_width,
            visible_rows: grid.rows().min(area.height as usize),
            visible_cols: grid.cols().min((area.width / cell_width) as usize),
        }
    }

    /// Whether `(x, y)` is inside the grid pane at all.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        point_in_rect(self.area, x, y)
    }

    /// The visible cell `(row, col)` under the terminal position `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }
        let row = (y - self.area.y) as usize;
        let col = ((x - self.area.x) / self.cell_width) as usize;
        (row < self.visible_rows && col < self.visible_cols).then_some((row, col))
    }

    /// Terminal position of the top-left corner of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> Option<(u16, u16)> {
        (row < self.visible_rows && col < self.visible_cols).then(|| {
            (
                self.area.x + col as u16 * self.cell_width,
                self.area.y + row as u16,
            )
        })
    }
}

// ───────────────────────────────────────── widget ────────────

const TITLE: &str = "Conway's Game Of Life - Skeleton";

/// Border around the grid pane: window title on the left, selected tool and
/// live-cell count on the right.
pub fn pane_block(tool: Option<Tool>, alive: usize) -> Block<'static> {
    let tool = tool.map_or("No tool", Tool::label);
    Block::default()
        .title(format!(" {TITLE} "))
        .title(Line::from(format!(" {tool} · {alive} alive ")).right_aligned())
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style())
}

pub struct GridWidget<'a> {
    grid: &'a Grid,
    cell_width: u16,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, cell_width: u16) -> Self {
        Self { grid, cell_width }
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geom = GridGeometry::new(area, self.grid, self.cell_width);
        for row in 0..geom.visible_rows {
            for col in 0..geom.visible_cols {
                let (Some(cell), Some((x, y))) =
                    (self.grid.get(row, col), geom.cell_origin(row, col))
                else {
                    continue;
                };
                let id = cell.style_id();
                let glyph = Theme::cell_glyph(id).repeat(geom.cell_width as usize);
                buf.set_string(x, y, glyph, Theme::style(id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::CellState;

    #[test]
    fn cell_at_maps_columns_by_width() {
        let grid = Grid::new(60, 60).unwrap();
        let geom = GridGeometry::new(Rect::new(1, 2, 20, 5), &grid, 2);
        assert_eq!(geom.visible_rows, 5);
        assert_eq!(geom.visible_cols, 10);

        assert_eq!(geom.cell_at(1, 2), Some((0, 0)));
        assert_eq!(geom.cell_at(2, 2), Some((0, 0)));
        assert_eq!(geom.cell_at(3, 2), Some((0, 1)));
        assert_eq!(geom.cell_at(20, 6), Some((4, 9)));
        assert_eq!(geom.cell_at(0, 2), None);
        assert_eq!(geom.cell_at(1, 7), None);
    }

    #[test]
    fn space_past_last_cell_is_in_pane_but_not_a_cell() {
        let grid = Grid::new(3, 3).unwrap();
        let geom = GridGeometry::new(Rect::new(0, 0, 20, 10), &grid, 2);
        assert!(geom.contains(10, 5));
        assert_eq!(geom.cell_at(10, 5), None);
        assert_eq!(geom.cell_at(5, 2), Some((2, 2)));
    }

    #[test]
    fn renders_alive_and_dead_cells() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 2, CellState::Alive);
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&grid, 2).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "·");
        assert_eq!(buf[(4, 1)].symbol(), "█");
        assert_eq!(buf[(5, 1)].symbol(), "█");
        assert_eq!(buf[(3, 1)].symbol(), "·");
    }

    fn top_row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn pane_border_shows_title_and_summary() {
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        pane_block(Some(Tool::Eraser), 7).render(area, &mut buf);
        let top = top_row(&buf);
        assert!(top.contains("Conway's Game Of Life - Skeleton"));
        assert!(top.trim_end_matches('┐').ends_with(" Eraser · 7 alive "));

        let mut buf = Buffer::empty(area);
        pane_block(None, 0).render(area, &mut buf);
        assert!(top_row(&buf).contains(" No tool · 0 alive "));
    }
}
