//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::tool::PointerButton;
use crate::ui::grid_widget::GridGeometry;
use crate::ui::layout::{point_in_rect, AppLayout};
use crate::ui::toolbar::{ButtonKind, ToolbarButton};

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Canvas => handle_canvas_key(state, key),
        ActiveView::InfoDialog => handle_info_key(state, key),
    }
}

// ── Canvas (configurable bindings) ──────────────────────────────

fn handle_canvas_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };

    // Holding the generation key keeps counting; everything else fires once.
    if key.kind == KeyEventKind::Repeat && action != Action::NextGeneration {
        return;
    }

    match action {
        Action::NextGeneration => {
            state.canvas.advance_generation();
        }
        Action::Undo => state.canvas.undo(),
        Action::Reset => activate_button(state, &ToolbarButton::create(ButtonKind::Reset)),
        Action::SelectPen => activate_button(state, &ToolbarButton::create(ButtonKind::Pen)),
        Action::SelectEraser => {
            activate_button(state, &ToolbarButton::create(ButtonKind::Eraser))
        }
        Action::ShowInfo => activate_button(state, &ToolbarButton::create(ButtonKind::Info)),
        Action::Quit => {
            if state.config.escape_quits {
                state.should_quit = true;
            }
        }
    }
}

// ── Info dialog (hardcoded keys) ────────────────────────────────

fn handle_info_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
        state.active_view = ActiveView::Canvas;
    }
}

/// Run a toolbar button's action.
fn activate_button(state: &mut AppState, button: &ToolbarButton) {
    if let Some(tool) = button.tool {
        state.canvas.select_tool(tool);
        return;
    }
    match button.kind {
        ButtonKind::Reset => state.canvas.reset(),
        ButtonKind::Info => state.active_view = ActiveView::InfoDialog,
        ButtonKind::Pen | ButtonKind::Eraser => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view == ActiveView::InfoDialog {
        if let MouseEventKind::Down(_) = mouse.kind {
            state.active_view = ActiveView::Canvas;
        }
        return;
    }

    let layout = AppLayout::from_area(state.terminal_area);
    let geom = GridGeometry::new(layout.grid_inner, state.canvas.grid(), state.cell_width);

    match mouse.kind {
        MouseEventKind::Down(button) => {
            if point_in_rect(layout.toolbar_area, mouse.column, mouse.row) {
                if button == MouseButton::Left {
                    let clicked = state
                        .toolbar
                        .button_at(layout.toolbar_area, mouse.column, mouse.row)
                        .cloned();
                    if let Some(clicked) = clicked {
                        activate_button(state, &clicked);
                    }
                }
                return;
            }

            if !geom.contains(mouse.column, mouse.row) {
                return;
            }
            match geom.cell_at(mouse.column, mouse.row) {
                Some((row, col)) => state.canvas.press(row, col, pointer_button(button)),
                None => state.canvas.press_outside_cells(),
            }
        }
        MouseEventKind::Drag(_) => {
            if !state.canvas.is_stroking() {
                return;
            }
            match geom.cell_at(mouse.column, mouse.row) {
                Some((row, col)) => state.canvas.drag_enter(row, col),
                None => state.canvas.drag_leave(),
            }
        }
        MouseEventKind::Up(_) => state.canvas.release(),
        _ => {}
    }
}

/// Terminal lost focus mid-stroke: we will never see the button go up.
pub fn handle_focus_lost(state: &mut AppState) {
    state.canvas.release();
}
