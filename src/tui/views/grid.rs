//! Record grid view
//!
//! One row per record, seven columns. Expired rows are red; the selected
//! row is cyan and the selected cell is inverted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::RecordField;
use crate::tui::snapshot::Snapshot;

/// Render the grid
pub fn render(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let block = Block::default()
        .title(snapshot.title.as_str())
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if snapshot.rows.is_empty() {
        let text = Paragraph::new("No entries. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = RecordField::ALL.map(|field| Constraint::Length(field.width()));

    let header = Row::new(
        snapshot
            .headers
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let cursor = snapshot.cursor;
    let rows: Vec<Row> = snapshot
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let selected = index == cursor.row;
            let row_style = if selected {
                Style::default().fg(Color::Cyan)
            } else if row.expired {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            let cells = row.cells.iter().enumerate().map(|(col, text)| {
                let cell = Cell::from(truncate_string(text, RecordField::ALL[col].width() as usize));
                if selected && col == cursor.col {
                    cell.style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    cell
                }
            });

            Row::new(cells).style(row_style)
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    let mut state = TableState::default();
    state.select(Some(cursor.row));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum width
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len || max_len == 0 {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 8), "short");
        assert_eq!(truncate_string("longer-than-eight", 8), "longer-…");
    }
}
