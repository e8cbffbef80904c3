//! Text input widget
//!
//! A single-line entry buffer bounded by a maximum length. Only printable
//! ASCII is accepted; Backspace removes the last character, Enter commits
//! and Esc cancels. Masked inputs display one `*` per character.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::secure_memory::SecureString;
use crate::tui::event::Key;

/// Result of feeding one key to a [`TextInput`]
#[derive(Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Still editing
    Pending,
    /// Enter pressed; the buffer contents
    Committed(SecureString),
    /// Esc pressed
    Cancelled,
}

/// A bounded single-line text buffer
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Prompt label
    pub label: String,
    content: SecureString,
    max_len: usize,
    masked: bool,
}

impl TextInput {
    /// Create an empty input
    pub fn new(label: impl Into<String>, max_len: usize) -> Self {
        Self {
            label: label.into(),
            content: SecureString::default(),
            max_len,
            masked: false,
        }
    }

    /// Hide the typed characters
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Pre-fill the buffer; anything past the limit is dropped
    pub fn content(mut self, content: &str) -> Self {
        self.content.clear();
        for c in content.chars().take(self.max_len) {
            self.content.push(c);
        }
        self
    }

    /// Feed one key
    pub fn handle_key(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Esc | Key::Interrupt => return InputOutcome::Cancelled,
            Key::Enter => return InputOutcome::Committed(std::mem::take(&mut self.content)),
            Key::Backspace => {
                self.content.pop();
            }
            Key::Char(c) if is_printable_ascii(c) && self.content.len() < self.max_len => {
                self.content.push(c);
            }
            _ => {}
        }
        InputOutcome::Pending
    }

    /// Whether input is hidden
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Text to show on screen
    pub fn display_text(&self) -> String {
        if self.masked {
            "*".repeat(self.content.len())
        } else {
            self.content.as_str().to_string()
        }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        self.content.as_str()
    }
}

fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// One prompt line: label, current text, and a cursor block
#[derive(Debug, Clone)]
pub struct PromptLine<'a> {
    pub label: &'a str,
    pub text: &'a str,
    pub focused: bool,
    pub label_width: u16,
}

impl Widget for PromptLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self.label_width.max(self.label.len() as u16 + 1);
        let label_line = Line::from(Span::styled(self.label, Style::default().fg(Color::Cyan)));
        buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));

        let input_start = area.x + label_width;
        if input_start >= area.x + area.width {
            return;
        }

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        buf.set_stringn(
            input_start,
            area.y,
            self.text,
            (area.x + area.width - input_start) as usize,
            text_style,
        );

        if self.focused {
            let cursor_x = input_start + self.text.len() as u16;
            if cursor_x < area.x + area.width {
                buf.set_string(
                    cursor_x,
                    area.y,
                    "_",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
