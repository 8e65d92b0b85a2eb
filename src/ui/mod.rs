pub mod cards;
pub mod components;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{UserDirectoryView, ViewState};

/// Width cap for the centered content column.
const MAX_CONTENT_WIDTH: u16 = 80;

struct Areas {
    header: Rect,
    search: Rect,
    cards: Rect,
    status: Rect,
}

fn layout(area: Rect) -> Areas {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(cards::CARD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);
    Areas {
        header: components::centered_column(root[0], MAX_CONTENT_WIDTH),
        search: components::centered_column(root[1], MAX_CONTENT_WIDTH),
        cards: components::centered_column(root[2], MAX_CONTENT_WIDTH),
        status: root[3],
    }
}

/// How many cards fit in a frame of this size.
pub fn card_capacity(area: Rect) -> usize {
    cards::capacity(layout(area).cards)
}

/// Draw the whole view. Reads the view; never changes it.
pub fn render(f: &mut Frame, view: &UserDirectoryView) {
    let areas = layout(f.area());
    let body = areas.header.union(areas.search).union(areas.cards);

    match view.state() {
        ViewState::Loading => {
            components::render_message(f, body, view.locale.loading(), view.theme.text);
        }
        ViewState::Error(message) => {
            components::render_message(
                f,
                body,
                &view.locale.error_line(message),
                view.theme.error,
            );
        }
        ViewState::Ready(_) => {
            render_header(f, areas.header, view);
            cards::render_search_box(f, areas.search, view);
            cards::render_cards(f, areas.cards, view);
        }
    }

    components::render_status_bar(f, areas.status, view);
}

fn render_header(f: &mut Frame, area: Rect, view: &UserDirectoryView) {
    let p = Paragraph::new(view.locale.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(view.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(view.theme.border)),
        );
    f.render_widget(p, area);
}
