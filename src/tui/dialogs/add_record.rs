//! Add record dialog
//!
//! Prompts for each column in turn. The secret is asked twice and the two
//! entries must match. Blank server and IP answers take the configured
//! defaults. Esc at any prompt drops the whole entry.

use crate::models::field::{MAX_MONTHS_LEN, MAX_NAME_LEN, MAX_SHORT_LEN};
use crate::models::NewRecord;
use crate::secure_memory::SecureString;
use crate::tui::event::Key;
use crate::tui::snapshot::PromptView;
use crate::tui::widgets::{InputOutcome, TextInput};

/// Prompts of the add dialog, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    Client,
    Server,
    Secret,
    ConfirmSecret,
    Ip,
    Date,
    Months,
}

impl AddStep {
    /// The prompt after this one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Client => Some(Self::Server),
            Self::Server => Some(Self::Secret),
            Self::Secret => Some(Self::ConfirmSecret),
            Self::ConfirmSecret => Some(Self::Ip),
            Self::Ip => Some(Self::Date),
            Self::Date => Some(Self::Months),
            Self::Months => None,
        }
    }

    fn max_len(self) -> usize {
        match self {
            Self::Client | Self::Server | Self::Secret | Self::ConfirmSecret => MAX_NAME_LEN,
            Self::Ip | Self::Date => MAX_SHORT_LEN,
            Self::Months => MAX_MONTHS_LEN,
        }
    }

    fn is_secret(self) -> bool {
        matches!(self, Self::Secret | Self::ConfirmSecret)
    }
}

/// What a keystroke did to the dialog
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Pending,
    Cancelled,
    /// Secret and confirmation differ; the entry is dropped
    Mismatch,
    Complete(NewRecord),
}

/// State for the add record dialog
#[derive(Debug, Clone)]
pub struct AddRecordState {
    step: AddStep,
    draft: NewRecord,
    secret: SecureString,
    input: TextInput,
    answered: Vec<(String, String)>,
    default_server: String,
    default_ip: String,
}

impl AddRecordState {
    /// Start at the client prompt
    pub fn new(default_server: impl Into<String>, default_ip: impl Into<String>) -> Self {
        let mut state = Self {
            step: AddStep::Client,
            draft: NewRecord::default(),
            secret: SecureString::default(),
            input: TextInput::new("", 0),
            answered: Vec::new(),
            default_server: default_server.into(),
            default_ip: default_ip.into(),
        };
        state.input = state.input_for(AddStep::Client);
        state
    }

    /// Current prompt
    pub fn step(&self) -> AddStep {
        self.step
    }

    /// Feed one key to the current prompt
    pub fn handle_key(&mut self, key: Key) -> AddOutcome {
        match self.input.handle_key(key) {
            InputOutcome::Pending => AddOutcome::Pending,
            InputOutcome::Cancelled => AddOutcome::Cancelled,
            InputOutcome::Committed(value) => self.commit(value),
        }
    }

    fn commit(&mut self, value: SecureString) -> AddOutcome {
        let shown = match self.step {
            AddStep::Client => {
                self.draft.client = value.as_str().to_string();
                self.draft.client.clone()
            }
            AddStep::Server => {
                self.draft.server = or_default(&value, &self.default_server);
                self.draft.server.clone()
            }
            AddStep::Secret => {
                let masked = "*".repeat(value.len());
                self.secret = value;
                masked
            }
            AddStep::ConfirmSecret => {
                if value != self.secret {
                    return AddOutcome::Mismatch;
                }
                "*".repeat(value.len())
            }
            AddStep::Ip => {
                self.draft.ip = or_default(&value, &self.default_ip);
                self.draft.ip.clone()
            }
            AddStep::Date => {
                self.draft.enrollment_date = value.as_str().to_string();
                self.draft.enrollment_date.clone()
            }
            AddStep::Months => {
                self.draft.validity_months = value.as_str().to_string();
                let mut record = std::mem::take(&mut self.draft);
                record.secret = self.secret.as_str().to_string();
                self.secret.clear();
                return AddOutcome::Complete(record);
            }
        };

        self.answered.push((self.input.label.clone(), shown));
        if let Some(next) = self.step.next() {
            self.step = next;
            self.input = self.input_for(next);
        }
        AddOutcome::Pending
    }

    fn input_for(&self, step: AddStep) -> TextInput {
        let label = match step {
            AddStep::Client => "Client:".to_string(),
            AddStep::Server => format!("Server [{}]:", self.default_server),
            AddStep::Secret => "Password:".to_string(),
            AddStep::ConfirmSecret => "Confirm Password:".to_string(),
            AddStep::Ip => format!("IP [{}]:", self.default_ip),
            AddStep::Date => "Date (MM/DD/YYYY):".to_string(),
            AddStep::Months => "Months:".to_string(),
        };
        TextInput::new(label, step.max_len()).masked(step.is_secret())
    }

    /// Prompt description for rendering
    pub fn view(&self) -> PromptView {
        PromptView {
            title: " Add New Entry ".to_string(),
            answered: self.answered.clone(),
            label: self.input.label.clone(),
            text: self.input.display_text(),
            masked: self.input.is_masked(),
        }
    }
}

fn or_default(value: &SecureString, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(state: &mut AddRecordState, text: &str) -> AddOutcome {
        for c in text.chars() {
            assert_eq!(state.handle_key(Key::Char(c)), AddOutcome::Pending);
        }
        state.handle_key(Key::Enter)
    }

    #[test]
    fn test_full_flow_with_defaults() {
        let mut state = AddRecordState::new("l2tpd", "*");
        assert_eq!(answer(&mut state, "alice"), AddOutcome::Pending);
        assert_eq!(answer(&mut state, ""), AddOutcome::Pending);
        assert_eq!(answer(&mut state, "s3cret"), AddOutcome::Pending);
        assert_eq!(answer(&mut state, "s3cret"), AddOutcome::Pending);
        assert_eq!(answer(&mut state, ""), AddOutcome::Pending);
        assert_eq!(answer(&mut state, "02/01/2024"), AddOutcome::Pending);
        assert_eq!(state.step(), AddStep::Months);

        let outcome = answer(&mut state, "6");
        assert_eq!(
            outcome,
            AddOutcome::Complete(NewRecord {
                client: "alice".into(),
                server: "l2tpd".into(),
                secret: "s3cret".into(),
                ip: "*".into(),
                enrollment_date: "02/01/2024".into(),
                validity_months: "6".into(),
            })
        );
    }

    #[test]
    fn test_explicit_server_and_ip() {
        let mut state = AddRecordState::new("l2tpd", "*");
        answer(&mut state, "bob");
        answer(&mut state, "pptpd");
        answer(&mut state, "pw");
        answer(&mut state, "pw");
        answer(&mut state, "10.0.0.9");
        answer(&mut state, "01/01/2024");
        match answer(&mut state, "~") {
            AddOutcome::Complete(record) => {
                assert_eq!(record.server, "pptpd");
                assert_eq!(record.ip, "10.0.0.9");
                assert_eq!(record.validity_months, "~");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut state = AddRecordState::new("l2tpd", "*");
        answer(&mut state, "bob");
        answer(&mut state, "");
        answer(&mut state, "one");
        assert_eq!(answer(&mut state, "two"), AddOutcome::Mismatch);
    }

    #[test]
    fn test_cancel_mid_flow() {
        let mut state = AddRecordState::new("l2tpd", "*");
        answer(&mut state, "bob");
        answer(&mut state, "");
        state.handle_key(Key::Char('x'));
        assert_eq!(state.handle_key(Key::Esc), AddOutcome::Cancelled);
    }

    #[test]
    fn test_view_masks_secret_prompts() {
        let mut state = AddRecordState::new("l2tpd", "*");
        answer(&mut state, "bob");
        answer(&mut state, "");
        for c in "abc".chars() {
            state.handle_key(Key::Char(c));
        }

        let view = state.view();
        assert_eq!(view.label, "Password:");
        assert_eq!(view.text, "***");
        assert!(view.masked);
        assert_eq!(
            view.answered,
            vec![
                ("Client:".to_string(), "bob".to_string()),
                ("Server [l2tpd]:".to_string(), "l2tpd".to_string()),
            ]
        );
    }

    #[test]
    fn test_months_prompt_limit() {
        let mut state = AddRecordState::new("l2tpd", "*");
        for answer_text in ["bob", "", "pw", "pw", "", "01/01/2024"] {
            answer(&mut state, answer_text);
        }
        for _ in 0..20 {
            state.handle_key(Key::Char('9'));
        }
        assert_eq!(state.view().text.len(), MAX_MONTHS_LEN);
    }
}
