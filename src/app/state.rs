//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::{Action, AppConfig};
use crate::core::canvas::Canvas;
use crate::ui::toolbar::Toolbar;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Canvas,
    /// Modal attribution dialog; canvas input is blocked while shown.
    InfoDialog,
}

/// Top-level application state.
pub struct AppState {
    /// Grid, tool, undo buffer and generation counter.
    pub canvas: Canvas,
    pub toolbar: Toolbar,
    /// User-configurable keybindings and preferences.
    pub config: AppConfig,
    /// Text shown in the info dialog.
    pub credits: String,
    /// Terminal columns per cell (CLI override already applied).
    pub cell_width: u16,
    pub active_view: ActiveView,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Last known terminal size, for mouse hit-testing between frames.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(canvas: Canvas, config: AppConfig, credits: String, cell_width: u16) -> Self {
        Self {
            canvas,
            toolbar: Toolbar::standard(),
            config,
            credits,
            cell_width,
            active_view: ActiveView::default(),
            should_quit: false,
            terminal_area: Rect::default(),
        }
    }

    /// Static status-bar hint, built from the current generation binding.
    pub fn status_hint(&self) -> String {
        format!(
            "Press and Hold {}",
            self.config.short_binding(Action::NextGeneration)
        )
    }
}
