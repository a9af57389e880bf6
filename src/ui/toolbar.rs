//! Top toolbar: Pen, Eraser, separator, Reset, filler, Info.
//!
//! Buttons are built by [`ToolbarButton::create`] from an explicit
//! [`ButtonKind`] tag.  The same item list drives both rendering and mouse
//! hit-testing, so a click always lands on what was drawn.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::tool::Tool;

use super::theme::Theme;

// ───────────────────────────────────────── buttons ───────────

/// Every kind of button the toolbar can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Pen,
    Eraser,
    Reset,
    Info,
}

/// A fully configured toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub kind: ButtonKind,
    pub label: &'static str,
    /// Theme style id.
    pub style_id: &'static str,
    /// Toolbar buttons never take keyboard focus; the grid keeps it.
    pub focusable: bool,
    /// Tool carried by toggle buttons (Pen / Eraser).
    pub tool: Option<Tool>,
}

impl ToolbarButton {
    pub fn create(kind: ButtonKind) -> Self {
        let (label, style_id, tool) = match kind {
            ButtonKind::Pen => ("Edit", "button_edit", Some(Tool::Pen)),
            ButtonKind::Eraser => ("Erase", "button_erase", Some(Tool::Eraser)),
            ButtonKind::Reset => ("Reset", "button_reset", None),
            ButtonKind::Info => ("Info", "button_info", None),
        };
        Self {
            kind,
            label,
            style_id,
            focusable: false,
            tool,
        }
    }

    /// Rendered text, padded so the button has a visible click target.
    fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    fn width(&self) -> u16 {
        self.text().chars().count() as u16
    }
}

// ───────────────────────────────────────── toolbar ───────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    Button(ToolbarButton),
    Separator,
    /// Grows to fill the remaining width.
    Filler,
}

impl ToolbarItem {
    fn fixed_width(&self) -> u16 {
        match self {
            ToolbarItem::Button(b) => b.width(),
            ToolbarItem::Separator => 1,
            ToolbarItem::Filler => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
}

/// Gap between adjacent toolbar items.
const GAP: u16 = 1;

impl Toolbar {
    pub fn standard() -> Self {
        Self {
            items: vec![
                ToolbarItem::Button(ToolbarButton::create(ButtonKind::Pen)),
                ToolbarItem::Button(ToolbarButton::create(ButtonKind::Eraser)),
                ToolbarItem::Separator,
                ToolbarItem::Button(ToolbarButton::create(ButtonKind::Reset)),
                ToolbarItem::Filler,
                ToolbarItem::Button(ToolbarButton::create(ButtonKind::Info)),
            ],
        }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    /// Position of every item inside `area`, left to right.  Items that do
    /// not fit are given a zero-width rect.
    pub fn arrange(&self, area: Rect) -> Vec<(&ToolbarItem, Rect)> {
        let fixed: u16 = self.items.iter().map(ToolbarItem::fixed_width).sum();
        let gaps = GAP * (self.items.len().saturating_sub(1) as u16);
        let fillers = self
            .items
            .iter()
            .filter(|i| matches!(i, ToolbarItem::Filler))
            .count() as u16;
        let spare = area.width.saturating_sub(fixed + gaps);
        let filler_width = if fillers > 0 { spare / fillers } else { 0 };

        let right = area.x.saturating_add(area.width);
        let mut x = area.x;
        let mut out = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let want = match item {
                ToolbarItem::Filler => filler_width,
                other => other.fixed_width(),
            };
            let width = want.min(right.saturating_sub(x));
            out.push((item, Rect::new(x, area.y, width, area.height.min(1))));
            x = x.saturating_add(width).saturating_add(GAP).min(right);
        }
        out
    }

    /// The button under `(x, y)`, if any.
    pub fn button_at(&self, area: Rect, x: u16, y: u16) -> Option<&ToolbarButton> {
        self.arrange(area).into_iter().find_map(|(item, rect)| match item {
            ToolbarItem::Button(b) if super::layout::point_in_rect(rect, x, y) => Some(b),
            _ => None,
        })
    }
}

// ───────────────────────────────────────── widget ────────────

/// Renders the toolbar, highlighting the button of the selected tool.
pub struct ToolbarWidget<'a> {
    pub toolbar: &'a Toolbar,
    pub selected: Option<Tool>,
}

impl<'a> Widget for ToolbarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Theme::toolbar_style());

        for (item, rect) in self.toolbar.arrange(area) {
            if rect.width == 0 {
                continue;
            }
            match item {
                ToolbarItem::Button(button) => {
                    let mut style = Theme::style(button.style_id);
                    if button.tool.is_some() && button.tool == self.selected {
                        style = style.patch(Theme::button_selected_style());
                    }
                    buf.set_stringn(rect.x, rect.y, button.text(), rect.width as usize, style);
                }
                ToolbarItem::Separator => {
                    buf.set_string(rect.x, rect.y, "│", Theme::separator_style());
                }
                ToolbarItem::Filler => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_tags_buttons() {
        let pen = ToolbarButton::create(ButtonKind::Pen);
        assert_eq!(pen.style_id, "button_edit");
        assert_eq!(pen.tool, Some(Tool::Pen));
        assert!(!pen.focusable);

        let eraser = ToolbarButton::create(ButtonKind::Eraser);
        assert_eq!(eraser.tool, Some(Tool::Eraser));

        let reset = ToolbarButton::create(ButtonKind::Reset);
        assert_eq!(reset.style_id, "button_reset");
        assert_eq!(reset.tool, None);

        assert_eq!(ToolbarButton::create(ButtonKind::Info).style_id, "button_info");
    }

    #[test]
    fn standard_order() {
        let toolbar = Toolbar::standard();
        let shape: Vec<&str> = toolbar
            .items()
            .iter()
            .map(|i| match i {
                ToolbarItem::Button(b) => b.label,
                ToolbarItem::Separator => "|",
                ToolbarItem::Filler => "~",
            })
            .collect();
        assert_eq!(shape, ["Edit", "Erase", "|", "Reset", "~", "Info"]);
    }

    #[test]
    fn hit_testing_follows_arrangement() {
        let toolbar = Toolbar::standard();
        let area = Rect::new(0, 0, 80, 1);

        // "[ Edit ]" occupies columns 0..8.
        assert_eq!(toolbar.button_at(area, 0, 0).map(|b| b.kind), Some(ButtonKind::Pen));
        assert_eq!(toolbar.button_at(area, 7, 0).map(|b| b.kind), Some(ButtonKind::Pen));
        assert!(toolbar.button_at(area, 8, 0).is_none());
        // "[ Erase ]" starts after a one-column gap.
        assert_eq!(
            toolbar.button_at(area, 9, 0).map(|b| b.kind),
            Some(ButtonKind::Eraser)
        );
        // Info is pushed to the right edge by the filler.
        assert_eq!(
            toolbar.button_at(area, 79, 0).map(|b| b.kind),
            Some(ButtonKind::Info)
        );
        assert!(toolbar.button_at(area, 40, 0).is_none());
        assert!(toolbar.button_at(area, 0, 1).is_none());
    }

    #[test]
    fn selected_tool_is_highlighted() {
        let toolbar = Toolbar::standard();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        ToolbarWidget {
            toolbar: &toolbar,
            selected: Some(Tool::Eraser),
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "[");
        assert_eq!(buf[(2, 0)].symbol(), "E");
        let eraser_cell = &buf[(11, 0)];
        assert!(eraser_cell.modifier.contains(ratatui::style::Modifier::REVERSED));
        assert!(!buf[(2, 0)].modifier.contains(ratatui::style::Modifier::REVERSED));
    }
}
