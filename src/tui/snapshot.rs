//! Render snapshots
//!
//! Everything a renderer needs to draw one frame, detached from the editor
//! state. Secrets never appear here: the grid shows digests and prompt
//! text for secret fields is already masked.

use crate::models::RecordField;

use super::widgets::Notification;

/// Grid cursor position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Column under the cursor
    pub fn field(&self) -> RecordField {
        RecordField::from_index(self.col).unwrap_or(RecordField::Client)
    }
}

/// One grid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: [String; RecordField::COUNT],
    pub expired: bool,
}

/// A text prompt dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub title: String,
    /// Earlier prompts of the same dialog and what was entered
    pub answered: Vec<(String, String)>,
    pub label: String,
    /// Buffer contents, masked for secrets
    pub text: String,
    pub masked: bool,
}

/// The modal on top of the grid, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    Prompt(PromptView),
    ConfirmDelete { summary: String },
}

/// One frame's worth of editor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub title: String,
    pub headers: [&'static str; RecordField::COUNT],
    pub rows: Vec<RowView>,
    pub cursor: Cursor,
    pub dialog: Option<DialogView>,
    pub notice: Option<Notification>,
}

impl Snapshot {
    /// Key hints for the status line
    pub fn hints(&self) -> &'static str {
        match self.dialog {
            None => "Arrow: Move | Enter: Edit | a: Add | d: Delete Row | q: Quit",
            Some(DialogView::Prompt(_)) => "Enter: Confirm | Esc: Cancel",
            Some(DialogView::ConfirmDelete { .. }) => "y: Delete | any other key: Keep",
        }
    }
}
