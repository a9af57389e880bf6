//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: toolbar on top, grid in the middle, status bar
/// at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub toolbar_area: Rect,
    /// Grid pane including its border.
    pub grid_area: Rect,
    /// Grid pane without its border — where cells are drawn.
    pub grid_inner: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // toolbar
                Constraint::Min(3),    // grid pane (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let grid_area = chunks[1];
        let grid_inner = Rect::new(
            grid_area.x.saturating_add(1),
            grid_area.y.saturating_add(1),
            grid_area.width.saturating_sub(2),
            grid_area.height.saturating_sub(2),
        );

        Self {
            toolbar_area: chunks[0],
            grid_area,
            grid_inner,
            status_area: chunks[2],
        }
    }
}

/// Whether the terminal cell `(x, y)` lies inside `rect`.
pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.toolbar_area, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.grid_area, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.grid_inner, Rect::new(1, 2, 78, 20));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn point_in_rect_is_half_open() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(point_in_rect(r, 2, 2));
        assert!(point_in_rect(r, 4, 4));
        assert!(!point_in_rect(r, 5, 4));
        assert!(!point_in_rect(r, 1, 3));
    }
}
