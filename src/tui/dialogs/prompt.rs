//! Prompt dialog rendering
//!
//! Shared by the add and edit dialogs: earlier answers on top, the active
//! prompt with its cursor below.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::snapshot::PromptView;
use crate::tui::widgets::PromptLine;

const DIALOG_WIDTH: u16 = 70;
const LABEL_WIDTH: u16 = 20;

/// Render a prompt dialog centered over the grid
pub fn render(frame: &mut Frame, view: &PromptView) {
    let height = view.answered.len() as u16 + 3;
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(view.title.as_str())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = view
        .answered
        .iter()
        .map(|(label, text)| (label.as_str(), text.as_str(), false))
        .chain(std::iter::once((view.label.as_str(), view.text.as_str(), true)));

    for (offset, (label, text, focused)) in lines.enumerate() {
        let y = inner.y + offset as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let line_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(
            PromptLine {
                label,
                text,
                focused,
                label_width: LABEL_WIDTH,
            },
            line_area,
        );
    }
}
