//! Modal info dialog with the attribution text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered information popup.  Closed by the handler on Esc, Enter or click.
pub struct InfoPopup<'a> {
    pub text: &'a str,
}

impl<'a> Widget for InfoPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widest = self
            .text
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let width = saturating_u16(widest).saturating_add(6).clamp(30, 72);
        // Border, blank line, text, blank line, hint, plus one row for word
        // wrapping that breaks earlier than a hard character split.
        let text_rows = wrapped_rows(self.text, width.saturating_sub(2));
        let height = saturating_u16(text_rows).saturating_add(6);
        let popup = centered_fixed(width, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Information ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        lines.extend(
            self.text
                .lines()
                .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(Color::White)))),
        );
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Rows the indented text needs at `inner_width` columns.
fn wrapped_rows(text: &str, inner_width: u16) -> usize {
    let cols = usize::from(inner_width).max(1);
    text.lines()
        .map(|l| (l.chars().count() + 2).div_ceil(cols).max(1))
        .sum()
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_fixed(40, 40, area), area);
    }

    fn rendered(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn wrapped_credit_keeps_close_hint_visible() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let text = "x".repeat(200);
        InfoPopup { text: &text }.render(area, &mut buf);
        assert!(rendered(&buf).contains("Enter/Esc: close"));
    }

    #[test]
    fn oversized_credits_fit_the_screen() {
        let area = Rect::new(0, 0, 80, 20);

        let wide = "x".repeat(65_534);
        let mut buf = Buffer::empty(area);
        InfoPopup { text: &wide }.render(area, &mut buf);
        assert!(rendered(&buf).contains("Information"));

        let tall = "a\n".repeat(65_532);
        let mut buf = Buffer::empty(area);
        InfoPopup { text: &tall }.render(area, &mut buf);
        assert!(rendered(&buf).contains("Information"));
    }

    #[test]
    fn wrapped_rows_counts_split_lines() {
        assert_eq!(wrapped_rows("", 10), 0);
        assert_eq!(wrapped_rows("abc\n\nabcdefghij", 10), 1 + 1 + 2);
        assert_eq!(wrapped_rows("abc", 0), 5);
    }

    #[test]
    fn renders_credit_lines() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        InfoPopup {
            text: "Icons created by freepik.",
        }
        .render(area, &mut buf);

        let rendered = rendered(&buf);
        assert!(rendered.contains("Icons created by freepik."));
        assert!(rendered.contains("Information"));
    }
}
