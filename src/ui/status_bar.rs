//! Bottom status bar: generation counter on the left, hint on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::Theme;

pub struct StatusBar<'a> {
    pub generation: u64,
    /// Static hint, e.g. `"Press and Hold Space"`.
    pub hint: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Theme::status_bar_style());

        let left = Line::from(vec![
            Span::raw(" Generation: "),
            Span::styled(self.generation.to_string(), Theme::title_style()),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let right = format!("{} ", self.hint);
        let right_width = right.chars().count() as u16;
        let left_width = left.width() as u16;
        // Drop the hint rather than overlap the counter on narrow terminals.
        if left_width + right_width < area.width {
            let x = area.x + area.width - right_width;
            buf.set_string(x, area.y, right, Theme::hint_style());
        }
    }
}
