//! Delete confirmation dialog
//!
//! Only `y` or `Y` deletes; every other key keeps the row.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::AuthRecord;
use crate::tui::event::Key;
use crate::tui::layout::centered_rect_fixed;

/// Row pending deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmState {
    pub row: usize,
    pub summary: String,
}

impl DeleteConfirmState {
    pub fn new(row: usize, record: &AuthRecord) -> Self {
        Self {
            row,
            summary: format!(
                "{} | {} | {} | {}",
                record.client, record.server, record.ip, record.enrollment_date
            ),
        }
    }

    /// Whether `key` confirms the deletion
    pub fn confirms(key: Key) -> bool {
        matches!(key, Key::Char('y') | Key::Char('Y'))
    }
}

/// Render the confirmation box
pub fn render(frame: &mut Frame, summary: &str) {
    let area = centered_rect_fixed(60, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(Span::styled(
            format!("DELETE ROW: {}", summary),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Are you sure? "),
            Span::styled("(y/n)", Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_and_keys() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = AuthRecord::new(
            NewRecord {
                client: "alice".into(),
                server: "l2tpd".into(),
                secret: "pw".into(),
                ip: "*".into(),
                enrollment_date: "01/01/2024".into(),
                validity_months: "6".into(),
            },
            now,
        );

        let state = DeleteConfirmState::new(3, &record);
        assert_eq!(state.summary, "alice | l2tpd | * | 01/01/2024");
        assert!(DeleteConfirmState::confirms(Key::Char('Y')));
        assert!(!DeleteConfirmState::confirms(Key::Char('n')));
        assert!(!DeleteConfirmState::confirms(Key::Enter));
    }
}
