//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Printable characters without Ctrl/Alt are never bound by default, because
//! they go to the search box. A user binding for a plain character takes
//! precedence over typing it.

use std::collections::HashMap;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Select the previous card.
    MoveUp,
    /// Select the next card.
    MoveDown,
    /// Jump one screen of cards back.
    PageUp,
    /// Jump one screen of cards forward.
    PageDown,
    /// Empty the search box.
    ClearSearch,
    /// Swallow the key.
    Ignore,
}

const ALL_ACTIONS: [KeyAction; 7] = [
    KeyAction::Quit,
    KeyAction::MoveUp,
    KeyAction::MoveDown,
    KeyAction::PageUp,
    KeyAction::PageDown,
    KeyAction::ClearSearch,
    KeyAction::Ignore,
];

/// Maps `(KeyModifiers, KeyCode)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Esc / Ctrl+c quit, arrows and page keys move, Ctrl+u clears the search.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Esc), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::CONTROL, Char('p')), KeyAction::MoveUp);
        bindings.insert((M::CONTROL, Char('n')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::CONTROL, Char('u')), KeyAction::ClearSearch);
        bindings.insert((M::NONE, Tab), KeyAction::Ignore);
        Self { bindings }
    }

    /// Load the keymap at `path`, or write the defaults there if the file is missing.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(err) = km.write_file(path) {
            warn!(path = %path.display(), "could not write default keybinds: {err}");
        }
        km
    }

    /// Read `<Action> = <KeySpec>` lines on top of the defaults.
    ///
    /// Returns `None` if the file cannot be read. Unparseable lines are skipped.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::from_config_str(&contents))
    }

    fn from_config_str(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            match (parse_action(lhs), parse_key(rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => warn!(line, "ignoring unrecognized keybinding"),
            }
        }
        map
    }

    /// Write every current binding, grouped by action, with a short header.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-directory keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: Esc, Ctrl+c, Enter, Tab, Up, Down, PageUp, PageDown, Home, End\n");
        buf.push_str("# Actions: Quit, MoveUp, MoveDown, PageUp, PageDown, ClearSearch, Ignore\n\n");

        for action in ALL_ACTIONS {
            let mut keys: Vec<String> = self
                .bindings
                .iter()
                .filter(|(_, a)| **a == action)
                .map(|((mods, code), _)| Self::format_key(*mods, *code))
                .collect();
            keys.sort();
            for k in keys {
                let _ = writeln!(&mut buf, "{} = {}", format_action(action), k);
            }
        }

        std::fs::write(path, buf)
    }

    /// Resolve a key event to its action, if bound.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// First key bound to `action`, formatted for display.
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys.into_iter().next()
    }

    /// Format a key (modifiers + code) into a spec like "Ctrl+c" or "PageDown".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            Backspace => "Backspace".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            Home => "Home".to_string(),
            End => "End".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{code:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else if mods.contains(KeyModifiers::ALT) {
            format!("Alt+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = if let Some(after) = s.strip_prefix("Ctrl+") {
        (KeyModifiers::CONTROL, after)
    } else if let Some(after) = s.strip_prefix("Alt+") {
        (KeyModifiers::ALT, after)
    } else {
        (KeyModifiers::NONE, s)
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "Backspace" => Backspace,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "Home" => Home,
        "End" => End,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    ALL_ACTIONS
        .into_iter()
        .find(|a| format_action(*a) == s.trim())
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::MoveUp => "MoveUp",
        KeyAction::MoveDown => "MoveDown",
        KeyAction::PageUp => "PageUp",
        KeyAction::PageDown => "PageDown",
        KeyAction::ClearSearch => "ClearSearch",
        KeyAction::Ignore => "Ignore",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(mods: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn defaults_leave_plain_letters_unbound() {
        let km = Keymap::default();
        assert_eq!(km.resolve(&key(KeyModifiers::NONE, KeyCode::Char('q'))), None);
        assert_eq!(km.resolve(&key(KeyModifiers::SHIFT, KeyCode::Char('Q'))), None);
        assert_eq!(
            km.resolve(&key(KeyModifiers::NONE, KeyCode::Esc)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            km.resolve(&key(KeyModifiers::CONTROL, KeyCode::Char('u'))),
            Some(KeyAction::ClearSearch)
        );
    }

    #[test]
    fn config_overrides_and_skips_garbage() {
        let km = Keymap::from_config_str(
            "# comment\nQuit = Ctrl+q\nMoveDown = End\nNope = x\nMoveUp = TooLong\nbroken line\n",
        );
        assert_eq!(
            km.resolve(&key(KeyModifiers::CONTROL, KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            km.resolve(&key(KeyModifiers::NONE, KeyCode::End)),
            Some(KeyAction::MoveDown)
        );
        // Defaults survive.
        assert_eq!(
            km.resolve(&key(KeyModifiers::NONE, KeyCode::Esc)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn key_specs_format_and_parse_back() {
        for (mods, code) in [
            (KeyModifiers::CONTROL, KeyCode::Char('c')),
            (KeyModifiers::ALT, KeyCode::Char('x')),
            (KeyModifiers::NONE, KeyCode::PageDown),
            (KeyModifiers::NONE, KeyCode::Esc),
        ] {
            let spec = Keymap::format_key(mods, code);
            assert_eq!(parse_key(&spec), Some((mods, code)), "spec {spec}");
        }
    }

    #[test]
    fn key_for_reports_a_binding() {
        let km = Keymap::default();
        assert_eq!(km.key_for(KeyAction::ClearSearch).as_deref(), Some("Ctrl+u"));
        assert_eq!(km.key_for(KeyAction::Quit).as_deref(), Some("Ctrl+c"));
    }
}
