//! Terminal User Interface module
//!
//! The interactive record editor: a grid of secrets entries with modal
//! dialogs for adding, editing and deleting them. Key handling works on a
//! pulled [`event::Key`] stream and drawing works on a [`snapshot::Snapshot`],
//! so the editor runs the same against a real terminal or a script.

pub mod app;
pub mod event;
pub mod handler;
pub mod snapshot;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{App, Mode};
pub use event::{InputSource, Key, ScriptedInput, TerminalInput};
pub use snapshot::Snapshot;
pub use terminal::{run, run_tui, Renderer, TerminalRenderer};
