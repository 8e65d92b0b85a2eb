use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

use crate::api::ApiClient;
use crate::app::UserDirectoryView;
use crate::app::keymap::KeyAction;
use crate::ui;

/// Whether the loop keeps going after a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one key press to the view.
///
/// Bound keys run their action. Unbound printable keys (Shift allowed,
/// Ctrl/Alt not) and Backspace edit the search term once the list is ready.
pub fn handle_key(view: &mut UserDirectoryView, key: KeyEvent) -> Flow {
    match view.keymap.resolve(&key) {
        Some(KeyAction::Quit) => return Flow::Quit,
        Some(KeyAction::MoveUp) => view.select_previous(),
        Some(KeyAction::MoveDown) => view.select_next(),
        Some(KeyAction::PageUp) => view.page_up(),
        Some(KeyAction::PageDown) => view.page_down(),
        Some(KeyAction::ClearSearch) => {
            if view.accepts_input() {
                view.clear_search();
            }
        }
        Some(KeyAction::Ignore) => {}
        None if view.accepts_input() => match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                view.push_search_char(c);
            }
            KeyCode::Backspace => view.pop_search_char(),
            _ => {}
        },
        None => {}
    }
    Flow::Continue
}

/// Draw one frame, sizing the card list to the current terminal first.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, view: &mut UserDirectoryView) -> Result<()> {
    let size = terminal.size()?;
    view.set_cards_per_page(ui::card_capacity(Rect::new(0, 0, size.width, size.height)));
    terminal.draw(|f| ui::render(f, view))?;
    Ok(())
}

/// Mount the view, start its fetch, and run until the user quits.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut view: UserDirectoryView,
    client: ApiClient,
    runtime: &Handle,
) -> Result<()> {
    view.initialize(client, runtime);

    loop {
        view.poll_fetch();
        draw(terminal, &mut view)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut view, key) == Flow::Quit {
                    break;
                }
            }
        }
    }

    info!("quit requested");
    Ok(())
}
