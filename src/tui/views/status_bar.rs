//! Status bar view
//!
//! Shows the current notice, if any, and key hints for the mode

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::snapshot::Snapshot;

/// Render the status bar
pub fn render(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut spans = vec![];

    if let Some(notice) = &snapshot.notice {
        let color = notice.notification_type.color();
        spans.push(Span::styled(
            format!(" [{}] ", notice.notification_type.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(notice.message.as_str(), Style::default().fg(color)));
    }

    // Key hints (right-aligned)
    let hints = format!(" {} ", snapshot.hints());
    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
