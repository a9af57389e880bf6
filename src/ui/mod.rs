//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* canvas state and turns it into cells on the
//! terminal.  No state is mutated here.

pub mod grid_widget;
pub mod layout;
pub mod popup;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
