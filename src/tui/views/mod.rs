//! Editor views
//!
//! The record grid, the status bar, and any dialog on top of them.

pub mod grid;
pub mod status_bar;

use ratatui::Frame;

use super::dialogs;
use super::layout::AppLayout;
use super::snapshot::{DialogView, Snapshot};

/// Render one frame
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let layout = AppLayout::new(frame.area());

    grid::render(frame, snapshot, layout.grid);
    status_bar::render(frame, snapshot, layout.status_bar);

    match &snapshot.dialog {
        None => {}
        Some(DialogView::Prompt(view)) => dialogs::prompt::render(frame, view),
        Some(DialogView::ConfirmDelete { summary }) => dialogs::confirm::render(frame, summary),
    }
}
