//! Shared UI components (status bar, message panel, layout helpers).
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{UserDirectoryView, ViewState};

/// Render the bottom status bar with mode, counts and the quit key.
pub fn render_status_bar(f: &mut Frame, area: Rect, view: &UserDirectoryView) {
    let mode = match view.state() {
        ViewState::Loading => "LOADING",
        ViewState::Error(_) => "ERROR",
        ViewState::Ready(_) => "READY",
    };
    let mut msg = format!("mode: {mode}");
    if let ViewState::Ready(users) = view.state() {
        msg.push_str(&format!("  shown:{}/{}", view.filtered_users().len(), users.len()));
    }
    if let Some(quit) = view.keymap.key_for(KeyAction::Quit) {
        msg.push_str(&format!("  {quit}: quit"));
    }
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(view.theme.status_fg)
            .bg(view.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// A centered, wrapped message, vertically centered in `area`.
///
/// The paragraph runs to the bottom of `area`, so long messages are only cut
/// when the area itself is too small.
pub fn render_message(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let width = area.width.min(60);
    if width == 0 || area.height == 0 {
        return;
    }
    let rows = Line::raw(text).width().div_ceil(usize::from(width)).max(1);
    let rows = u16::try_from(rows).unwrap_or(u16::MAX).min(area.height);
    let top = centered_rect(width, rows, area);
    let rect = Rect {
        height: area.bottom() - top.y,
        ..top
    };
    let p = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color));
    f.render_widget(p, rect);
}

/// Compute a centered rectangle of `width`×`height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

/// Full-height column of at most `max_width`, centered horizontally in `area`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let w = max_width.min(area.width);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y,
        width: w,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 100, 20);
        assert_eq!(centered_rect(40, 4, area), Rect::new(30, 8, 40, 4));
        assert_eq!(centered_rect(200, 50, area), area);
    }

    #[test]
    fn centered_column_keeps_height() {
        let area = Rect::new(2, 3, 120, 10);
        assert_eq!(centered_column(area, 80), Rect::new(22, 3, 80, 10));
        assert_eq!(centered_column(Rect::new(0, 0, 50, 5), 80), Rect::new(0, 0, 50, 5));
    }
}
