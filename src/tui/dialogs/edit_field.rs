//! Edit field dialog
//!
//! Plain fields open pre-filled with their current value. The secret field
//! opens empty, is typed blind, and must be entered twice.

use crate::models::RecordField;
use crate::secure_memory::SecureString;
use crate::tui::event::Key;
use crate::tui::snapshot::PromptView;
use crate::tui::widgets::{InputOutcome, TextInput};

#[derive(Debug, Clone)]
enum Stage {
    Value,
    /// First secret entry, waiting for confirmation
    Confirm(SecureString),
}

/// What a keystroke did to the dialog
#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Pending,
    Cancelled,
    /// Empty commit on a plain field; nothing to write
    Unchanged,
    Mismatch,
    Commit(SecureString),
}

/// State for editing one cell
#[derive(Debug, Clone)]
pub struct EditFieldState {
    pub row: usize,
    pub field: RecordField,
    stage: Stage,
    input: TextInput,
}

impl EditFieldState {
    /// Open an editor for `field` of `row`, whose current value is `current`
    pub fn new(row: usize, field: RecordField, current: &str) -> Self {
        let max_len = field.max_len().unwrap_or(0);
        let input = if field == RecordField::Secret {
            TextInput::new("Enter new password:", max_len).masked(true)
        } else {
            TextInput::new("Editing:", max_len).content(current)
        };

        Self {
            row,
            field,
            stage: Stage::Value,
            input,
        }
    }

    /// Feed one key
    pub fn handle_key(&mut self, key: Key) -> EditOutcome {
        let value = match self.input.handle_key(key) {
            InputOutcome::Pending => return EditOutcome::Pending,
            InputOutcome::Cancelled => return EditOutcome::Cancelled,
            InputOutcome::Committed(value) => value,
        };

        if self.field != RecordField::Secret {
            return if value.is_empty() {
                EditOutcome::Unchanged
            } else {
                EditOutcome::Commit(value)
            };
        }

        match std::mem::replace(&mut self.stage, Stage::Value) {
            Stage::Value => {
                let max_len = self.field.max_len().unwrap_or(0);
                self.input = TextInput::new("Confirm password:", max_len).masked(true);
                self.stage = Stage::Confirm(value);
                EditOutcome::Pending
            }
            Stage::Confirm(first) if first == value => EditOutcome::Commit(value),
            Stage::Confirm(_) => EditOutcome::Mismatch,
        }
    }

    /// Prompt description for rendering
    pub fn view(&self) -> PromptView {
        let answered = match &self.stage {
            Stage::Value => Vec::new(),
            Stage::Confirm(first) => {
                vec![("Enter new password:".to_string(), "*".repeat(first.len()))]
            }
        };

        PromptView {
            title: format!(" Edit {} ", self.field),
            answered,
            label: self.input.label.clone(),
            text: self.input.display_text(),
            masked: self.input.is_masked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line(state: &mut EditFieldState, text: &str) -> EditOutcome {
        for c in text.chars() {
            assert_eq!(state.handle_key(Key::Char(c)), EditOutcome::Pending);
        }
        state.handle_key(Key::Enter)
    }

    #[test]
    fn test_plain_field_prefilled() {
        let mut state = EditFieldState::new(0, RecordField::Ip, "10.0.0.1");
        assert_eq!(state.view().text, "10.0.0.1");

        state.handle_key(Key::Backspace);
        match type_line(&mut state, "2") {
            EditOutcome::Commit(value) => assert_eq!(value.as_str(), "10.0.0.2"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_cleared_plain_field_is_unchanged() {
        let mut state = EditFieldState::new(0, RecordField::Months, "6");
        state.handle_key(Key::Backspace);
        assert_eq!(state.handle_key(Key::Enter), EditOutcome::Unchanged);
    }

    #[test]
    fn test_secret_needs_confirmation() {
        let mut state = EditFieldState::new(1, RecordField::Secret, "old");
        assert_eq!(state.view().text, "");
        assert_eq!(type_line(&mut state, "new"), EditOutcome::Pending);

        let view = state.view();
        assert_eq!(view.label, "Confirm password:");
        assert_eq!(view.answered.len(), 1);

        match type_line(&mut state, "new") {
            EditOutcome::Commit(value) => assert_eq!(value.as_str(), "new"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_secret_mismatch() {
        let mut state = EditFieldState::new(1, RecordField::Secret, "old");
        type_line(&mut state, "new");
        assert_eq!(type_line(&mut state, "other"), EditOutcome::Mismatch);
    }

    #[test]
    fn test_escape_cancels() {
        let mut state = EditFieldState::new(0, RecordField::Client, "alice");
        assert_eq!(state.handle_key(Key::Esc), EditOutcome::Cancelled);
    }
}
