//! User configuration — keybindings, canvas preferences and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/life-canvas/config.toml` (default `~/.config/life-canvas/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::error::CanvasError;

/// Narrowest / widest cell, in terminal columns.
pub const MIN_CELL_WIDTH: u16 = 1;
pub const MAX_CELL_WIDTH: u16 = 4;

/// Attribution shown in the info dialog when no `--credits` file is given.
pub const DEFAULT_CREDITS: &str = "Icons created by freepik.\nhttps://www.flaticon.com/authors/freepik";

// ───────────────────────────────────────── actions ───────────

/// All keyboard-driven actions on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextGeneration,
    Undo,
    Reset,
    SelectPen,
    SelectEraser,
    ShowInfo,
    Quit,
}

impl Action {
    /// Ordered list of all actions (config file order).
    pub const ALL: &[Action] = &[
        Action::NextGeneration,
        Action::Undo,
        Action::Reset,
        Action::SelectPen,
        Action::SelectEraser,
        Action::ShowInfo,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::NextGeneration => "next_generation",
            Action::Undo => "undo",
            Action::Reset => "reset",
            Action::SelectPen => "select_pen",
            Action::SelectEraser => "select_eraser",
            Action::ShowInfo => "show_info",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.  Letter keys match case-insensitively so `Ctrl+Z` works
    /// with caps lock on.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        let code_matches = match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        code_matches && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Ctrl+z"`, `"Space"`).
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            other => key_name(other),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Ctrl+z"`, `"Space"`, `"Esc"`).
    fn to_config_string(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            other => key_name(other),
        });
        s
    }

    /// Parse a key string like `"Ctrl+z"`, `"Space"`, `"q"`, `"Esc"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            s if s.chars().count() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and canvas preferences.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Whether the `Quit` action (Esc by default) closes the app.
    /// `Ctrl+C` quits regardless.
    pub escape_quits: bool,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            escape_quits: true,
            cell_width: 2,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(NextGeneration, vec![KeyBind::new(Char(' '), n)]);
        m.insert(Undo, vec![KeyBind::new(Char('z'), ctrl)]);
        m.insert(Reset, vec![KeyBind::new(Char('r'), n)]);
        m.insert(SelectPen, vec![KeyBind::new(Char('p'), n)]);
        m.insert(SelectEraser, vec![KeyBind::new(Char('e'), n)]);
        m.insert(ShowInfo, vec![KeyBind::new(Char('i'), n)]);
        m.insert(Quit, vec![KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for hints).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  On first run the
    /// defaults are written out so users have a template to edit.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
            tracing::warn!(path = %path.display(), "unreadable config, using defaults");
            return Self::default();
        }
        let config = Self::default();
        if let Err(err) = config.save() {
            tracing::debug!("could not write default config: {err:#}");
        }
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "escape_quits" => {
                    config.escape_quits = value == "true";
                    continue;
                }
                "cell_width" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.cell_width = v.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# life-canvas configuration".to_string(),
            String::new(),
            "# Canvas".to_string(),
            format!("escape_quits = {}", self.escape_quits),
            format!("cell_width = {}", self.cell_width),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Validate a cell width coming from the command line.
pub fn check_cell_width(width: u16) -> Result<u16, CanvasError> {
    if (MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(CanvasError::CellWidth {
            got: width,
            min: MIN_CELL_WIDTH,
            max: MAX_CELL_WIDTH,
        })
    }
}

/// Attribution text for the info dialog.  A given path must be readable.
pub fn load_credits(path: Option<&Path>) -> Result<String, CanvasError> {
    match path {
        None => Ok(DEFAULT_CREDITS.to_string()),
        Some(path) => std::fs::read_to_string(path)
            .map(|text| text.trim_end().to_string())
            .map_err(|source| CanvasError::Credits {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/life-canvas/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("life-canvas").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_match_expected_keys() {
        let config = AppConfig::default();
        assert_eq!(
            config.match_key(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::NextGeneration)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Action::Undo)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('Z'), KeyModifiers::CONTROL)),
            Some(Action::Undo)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn serialised_defaults_parse_back() {
        let config = AppConfig::default();
        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.bindings, config.bindings);
        assert_eq!(parsed.escape_quits, config.escape_quits);
        assert_eq!(parsed.cell_width, config.cell_width);
    }

    #[test]
    fn parser_skips_junk_and_clamps() {
        let parsed = AppConfig::parse_config(
            "[canvas]\n\
             # comment\n\
             not a setting\n\
             unknown_action = q\n\
             cell_width = 40\n\
             escape_quits = false\n\
             undo = Ctrl+u, Hyper+x\n",
        );
        assert_eq!(parsed.cell_width, MAX_CELL_WIDTH);
        assert!(!parsed.escape_quits);
        assert_eq!(
            parsed.bindings[&Action::Undo],
            vec![KeyBind::new(KeyCode::Char('u'), KeyModifiers::CONTROL)]
        );
        assert_eq!(
            parsed.bindings[&Action::NextGeneration],
            AppConfig::default_bindings()[&Action::NextGeneration]
        );
    }

    #[test]
    fn display_strings() {
        assert_eq!(
            KeyBind::new(KeyCode::Char('z'), KeyModifiers::CONTROL).display(),
            "Ctrl+z"
        );
        assert_eq!(
            KeyBind::new(KeyCode::Char(' '), KeyModifiers::NONE).display(),
            "Space"
        );
        assert_eq!(KeyBind::new(KeyCode::Esc, KeyModifiers::NONE).display(), "Esc");
    }

    #[test]
    fn cell_width_bounds() {
        assert_eq!(check_cell_width(2).unwrap(), 2);
        assert!(matches!(
            check_cell_width(0),
            Err(CanvasError::CellWidth { got: 0, .. })
        ));
        assert!(check_cell_width(5).is_err());
    }

    #[test]
    fn missing_credit_file_is_an_error() {
        assert_eq!(load_credits(None).unwrap(), DEFAULT_CREDITS);
        let err = load_credits(Some(Path::new("/definitely/not/here/credit.txt")))
            .unwrap_err();
        assert!(err.to_string().contains("credit.txt"));
    }

    #[test]
    fn credits_file_is_read_and_trimmed() {
        let path = std::env::temp_dir().join(format!(
            "life-canvas-credits-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "Icons by someone.\nhttps://example.org\n\n").unwrap();
        let text = load_credits(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.unwrap(), "Icons by someone.\nhttps://example.org");
    }
}
