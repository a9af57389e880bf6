//! Drawing tools and the rule that turns a press into a cell state.

use super::grid::CellState;

/// Mutually exclusive interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Pen,
    Eraser,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
        }
    }
}

/// Pointer button that started the current press / stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Resulting cell state for a press with `button` under `tool`, or `None`
/// when the cell should be left alone.
///
/// Pen paints with the primary button and clears with the secondary one.
/// Eraser clears regardless of button.
pub fn paint_rule(tool: Option<Tool>, button: PointerButton) -> Option<CellState> {
    match (tool?, button) {
        (Tool::Pen, PointerButton::Primary) => Some(CellState::Alive),
        (Tool::Pen, PointerButton::Secondary) => Some(CellState::Dead),
        (Tool::Pen, PointerButton::Middle) => None,
        (Tool::Eraser, _) => Some(CellState::Dead),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_follows_button() {
        assert_eq!(
            paint_rule(Some(Tool::Pen), PointerButton::Primary),
            Some(CellState::Alive)
        );
        assert_eq!(
            paint_rule(Some(Tool::Pen), PointerButton::Secondary),
            Some(CellState::Dead)
        );
        assert_eq!(paint_rule(Some(Tool::Pen), PointerButton::Middle), None);
    }

    #[test]
    fn eraser_always_clears() {
        for button in [
            PointerButton::Primary,
            PointerButton::Secondary,
            PointerButton::Middle,
        ] {
            assert_eq!(paint_rule(Some(Tool::Eraser), button), Some(CellState::Dead));
        }
    }

    #[test]
    fn no_tool_is_a_no_op() {
        assert_eq!(paint_rule(None, PointerButton::Primary), None);
        assert_eq!(paint_rule(None, PointerButton::Secondary), None);
    }
}
