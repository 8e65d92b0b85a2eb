//! View state types and entry glue.
//!
//! Defines the user directory view, its theme, and helpers to construct
//! defaults and to run the application loop (re-exported as `run`).
//!
pub mod keymap;
pub mod update;

use std::path::Path;

use ratatui::style::Color;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::api::{ApiClient, FetchOutcome, PendingFetch};
use crate::i18n::Locale;
use crate::model::{UserId, UserRecord};
use crate::search::filter_users;
use keymap::Keymap;

/// Top-level mode of the view.
///
/// Starts in `Loading` and moves exactly once, to `Error` or `Ready`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Vec<UserRecord>),
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub error: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight: Color,
}

impl Theme {
    /// Plain ANSI palette.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            error: Color::Red,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight: Color::Yellow,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),      // text
            muted: Color::Rgb(0xa6, 0xad, 0xc8),     // subtext0
            title: Color::Rgb(0x89, 0xb4, 0xfa),     // blue
            border: Color::Rgb(0x58, 0x5b, 0x70),    // surface2
            error: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe), // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4), // text
            highlight: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            let Some(color) = Self::parse_color(val) else {
                continue;
            };
            match key {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "error" => theme.error = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight" => theme.highlight = color,
                _ => {}
            }
        }

        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB"), "index:N" or "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        if let Some(index) = lower.strip_prefix("index:") {
            return index.trim().parse().ok().map(Color::Indexed);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn color_to_str(c: Color) -> String {
        match c {
            Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
            Color::Reset => "reset".to_string(),
            // Named colors get a best-effort hex approximation
            Color::Black => "#000000".to_string(),
            Color::Red => "#FF0000".to_string(),
            Color::Green => "#00FF00".to_string(),
            Color::Yellow => "#FFFF00".to_string(),
            Color::Blue => "#0000FF".to_string(),
            Color::Magenta => "#FF00FF".to_string(),
            Color::Cyan => "#00FFFF".to_string(),
            Color::Gray => "#B3B3B3".to_string(),
            Color::DarkGray => "#4D4D4D".to_string(),
            Color::LightRed => "#FF6666".to_string(),
            Color::LightGreen => "#66FF66".to_string(),
            Color::LightYellow => "#FFFF66".to_string(),
            Color::LightBlue => "#6666FF".to_string(),
            Color::LightMagenta => "#FF66FF".to_string(),
            Color::LightCyan => "#66FFFF".to_string(),
            Color::White => "#FFFFFF".to_string(),
            Color::Indexed(i) => format!("index:{i}"),
        }
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-directory theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, index:N, or 'reset'\n\n");

        let entries = [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("error", self.error),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight", self.highlight),
        ];
        for (k, v) in entries {
            let _ = writeln!(&mut buf, "{k} = {}", Self::color_to_str(v));
        }

        std::fs::write(path, buf)
    }

    /// Load the theme at `path`, writing the defaults there first if it is missing.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(err) = t.write_file(path) {
            warn!(path = %path.display(), "could not write default theme: {err}");
        }
        t
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// The user directory: fetched list, search term, derived matches, selection.
pub struct UserDirectoryView {
    state: ViewState,
    search_term: String,
    filtered: Vec<UserRecord>,
    selected_index: usize,
    selected_id: Option<UserId>,
    cards_per_page: usize,
    pending: Option<PendingFetch>,
    initialized: bool,
    pub theme: Theme,
    pub keymap: Keymap,
    pub locale: Locale,
}

impl UserDirectoryView {
    /// A freshly mounted view, in `Loading`.
    pub fn new(theme: Theme, keymap: Keymap, locale: Locale) -> Self {
        Self {
            state: ViewState::Loading,
            search_term: String::new(),
            filtered: Vec::new(),
            selected_index: 0,
            selected_id: None,
            cards_per_page: 1,
            pending: None,
            initialized: false,
            theme,
            keymap,
            locale,
        }
    }

    /// Start the one and only fetch. Later calls do nothing.
    pub fn initialize(&mut self, client: ApiClient, runtime: &Handle) {
        if self.initialized {
            warn!("initialize called twice; the user list is fetched only once");
            return;
        }
        self.initialized = true;
        info!(endpoint = %client.endpoint(), "fetching user list");
        self.pending = Some(PendingFetch::spawn(client, runtime));
    }

    /// Apply the fetch outcome if it has arrived. Never blocks.
    pub fn poll_fetch(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if let Some(outcome) = pending.try_take() {
            self.pending = None;
            self.apply_fetch_outcome(outcome);
        }
    }

    /// Move out of `Loading`. Outcomes arriving in any other state are ignored.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if self.state != ViewState::Loading {
            warn!("fetch outcome arrived after the view settled; ignoring it");
            return;
        }
        match outcome {
            Ok(users) => {
                info!(count = users.len(), "user list ready");
                self.state = ViewState::Ready(users);
                self.recompute_filter();
            }
            Err(err) => {
                info!("user list unavailable: {err}");
                self.state = ViewState::Error(err.display_message(self.locale));
            }
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    /// The full fetched list; empty until `Ready`.
    pub fn users(&self) -> &[UserRecord] {
        match &self.state {
            ViewState::Ready(users) => users.as_slice(),
            ViewState::Loading | ViewState::Error(_) => &[],
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filtered_users(&self) -> &[UserRecord] {
        &self.filtered
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.filtered.get(self.selected_index)
    }

    /// Whether the search box is on screen and takes keystrokes.
    pub fn accepts_input(&self) -> bool {
        matches!(self.state, ViewState::Ready(_))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute_filter();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(c);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_search_term(term);
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Number of cards that fit on screen; paging moves by this much.
    pub fn set_cards_per_page(&mut self, n: usize) {
        self.cards_per_page = n.max(1);
    }

    pub fn cards_per_page(&self) -> usize {
        self.cards_per_page
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.select(self.selected_index + 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected_index.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        let last = self.filtered.len().saturating_sub(1);
        self.select(self.selected_index.saturating_add(self.cards_per_page).min(last));
    }

    pub fn page_up(&mut self) {
        self.select(self.selected_index.saturating_sub(self.cards_per_page));
    }

    fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.selected_id = self.filtered.get(index).map(|u| u.id.clone());
    }

    /// Rebuild `filtered` from the full list and keep the selected user, by id, when still shown.
    fn recompute_filter(&mut self) {
        self.filtered = filter_users(self.users(), &self.search_term);
        let kept = self
            .selected_id
            .as_ref()
            .and_then(|id| self.filtered.iter().position(|u| &u.id == id));
        self.select(kept.unwrap_or(0));
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
