//! Input events for the editor
//!
//! The editor pulls one [`Key`] at a time from an [`InputSource`]. The
//! terminal implementation blocks on crossterm's event reader; the scripted
//! one replays a fixed sequence so the editor can run headless.

use std::collections::VecDeque;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{VpnUsersError, VpnUsersResult};

/// A keystroke as the editor understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Char(char),
    /// Ctrl-C: cancel a dialog, or quit from the grid
    Interrupt,
    /// Terminal resized; nothing to do but draw again
    Redraw,
    /// Any key with no meaning here
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Self::Interrupt,
                _ => Self::Other,
            };
        }

        match key.code {
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Esc,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Char(c) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// Pull-based source of keystrokes
pub trait InputSource {
    /// Block until the next key; `None` once input is exhausted
    fn next_key(&mut self) -> VpnUsersResult<Option<Key>>;
}

/// Keys read from the terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_key(&mut self) -> VpnUsersResult<Option<Key>> {
        loop {
            let event = event::read()
                .map_err(|e| VpnUsersError::Tui(format!("Failed to read event: {}", e)))?;

            match event {
                // Releases and repeats are reported on some platforms
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(Key::from(key)));
                }
                CrosstermEvent::Resize(_, _) => return Ok(Some(Key::Redraw)),
                _ => {}
            }
        }
    }
}

/// A fixed sequence of keys
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Append every character of `text` as a `Key::Char`
    pub fn text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    /// Append one key
    pub fn key(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Append `text` followed by Enter
    pub fn line(self, text: &str) -> Self {
        self.text(text).key(Key::Enter)
    }

    /// Keys not yet consumed
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_key(&mut self) -> VpnUsersResult<Option<Key>> {
        Ok(self.keys.pop_front())
    }
}
