//! Colour palette and text styles used across the UI.
//!
//! Widgets refer to their look by a style id (`"cell"`, `"button_edit"`, …);
//! this module is the single place those ids are turned into styles.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    /// Resolve a style id.  Unknown ids fall back to the default style.
    pub fn style(id: &str) -> Style {
        match id {
            // ── cells ──────────────────────────────────────────
            "cell" => Style::default().fg(Color::DarkGray).bg(Color::Black),
            "cell_selected" => Style::default().fg(Color::LightGreen).bg(Color::Black),
            // ── toolbar buttons ────────────────────────────────
            "button_edit" => Style::default().fg(Color::Cyan),
            "button_erase" => Style::default().fg(Color::LightRed),
            "button_reset" => Style::default().fg(Color::Yellow),
            "button_info" => Style::default().fg(Color::LightBlue),
            _ => Style::default(),
        }
    }

    /// Glyph drawn once per terminal column of a cell.
    pub fn cell_glyph(id: &str) -> &'static str {
        match id {
            "cell_selected" => "█",
            _ => "·",
        }
    }

    /// Style layered over a toggle button while its tool is selected.
    pub fn button_selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toolbar_style() -> Style {
        Style::default().bg(Color::Black).fg(Color::White)
    }

    pub fn separator_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn hint_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }
}
