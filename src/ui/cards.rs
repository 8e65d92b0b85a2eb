use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::UserDirectoryView;
use crate::model::UserRecord;

/// Rows taken by one card: border, name, email, border.
pub const CARD_HEIGHT: u16 = 4;

/// Cards that fit in `area`, at least one.
pub fn capacity(area: Rect) -> usize {
    usize::from((area.height / CARD_HEIGHT).max(1))
}

pub fn render_search_box(f: &mut Frame, area: Rect, view: &UserDirectoryView) {
    let term = view.search_term();
    let line = if term.is_empty() {
        Line::styled(
            view.locale.search_placeholder(),
            Style::default().fg(view.theme.muted).add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::styled(term.to_string(), Style::default().fg(view.theme.text))
    };
    let block = Block::default()
        .title(view.locale.search_title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(view.theme.highlight));
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(line).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let typed = u16::try_from(Line::raw(term).width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(typed.min(inner.width - 1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

/// The visible page of cards, or the no-match placeholder.
pub fn render_cards(f: &mut Frame, area: Rect, view: &UserDirectoryView) {
    let users = view.filtered_users();
    if users.is_empty() {
        let p = Paragraph::new(view.locale.no_matches())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(view.theme.muted));
        let rect = Rect { height: area.height.min(2), ..area };
        f.render_widget(p, Rect { y: rect.y.saturating_add(1), ..rect });
        return;
    }

    let per_page = capacity(area);
    let start = (view.selected_index() / per_page) * per_page;
    let end = (start + per_page).min(users.len());

    let mut y = area.y;
    for (offset, user) in users[start..end].iter().enumerate() {
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        render_card(f, rect, view, user, start + offset == view.selected_index());
        y = y.saturating_add(CARD_HEIGHT);
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    view: &UserDirectoryView,
    user: &UserRecord,
    selected: bool,
) {
    let border = if selected { view.theme.highlight } else { view.theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let lines = vec![
        Line::styled(
            user.name.clone(),
            Style::default().fg(view.theme.title).add_modifier(Modifier::BOLD),
        ),
        Line::styled(user.email.clone(), Style::default().fg(view.theme.muted)),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}
