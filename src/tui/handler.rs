//! Key handler for the editor
//!
//! Routes each key to the handler for the current mode. Dialog handlers
//! own their state while they run and put it back unless the dialog ends.

use crate::error::VpnUsersError;
use crate::models::RecordField;

use super::app::{App, Mode};
use super::dialogs::{
    AddOutcome, AddRecordState, DeleteConfirmState, EditFieldState, EditOutcome,
};
use super::event::Key;
use super::widgets::Notification;

/// Handle one key
pub fn handle_key(app: &mut App, key: Key) {
    if key == Key::Redraw {
        return;
    }
    app.clear_notice();

    match std::mem::take(&mut app.mode) {
        Mode::Browsing => handle_browsing_key(app, key),
        Mode::AddingRecord(state) => handle_add_key(app, state, key),
        Mode::EditingField(state) => handle_edit_key(app, state, key),
        Mode::ConfirmingDelete(state) => handle_delete_key(app, state, key),
    }
}

fn handle_browsing_key(app: &mut App, key: Key) {
    match key {
        Key::Char('q') | Key::Interrupt => app.quit(),
        Key::Up => app.move_up(),
        Key::Down => app.move_down(),
        Key::Left => app.move_left(),
        Key::Right => app.move_right(),
        Key::Enter => open_cell(app),
        Key::Char('a') | Key::Char('A') => {
            if app.table.is_full() {
                let err = VpnUsersError::CapacityExceeded {
                    capacity: app.table.capacity(),
                };
                app.notify(Notification::from(&err));
            } else {
                app.mode = Mode::AddingRecord(AddRecordState::new(
                    app.default_server.clone(),
                    app.default_ip.clone(),
                ));
            }
        }
        Key::Char('d') | Key::Char('D') => {
            if let Some(record) = app.table.get(app.cursor.row) {
                app.mode = Mode::ConfirmingDelete(DeleteConfirmState::new(app.cursor.row, record));
            }
        }
        _ => {}
    }
}

/// Enter on a cell; nothing happens on an empty table
fn open_cell(app: &mut App) {
    if app.table.is_empty() {
        return;
    }

    let field = app.cursor.field();
    if !field.is_editable() {
        app.notify(Notification::from(&VpnUsersError::ReadOnlyField(field)));
        return;
    }

    let row = app.cursor.row;
    if let Some(current) = app.table.get(row).and_then(|r| r.value(field)) {
        let state = EditFieldState::new(row, field, current);
        app.mode = Mode::EditingField(state);
    }
}

fn handle_add_key(app: &mut App, mut state: AddRecordState, key: Key) {
    match state.handle_key(key) {
        AddOutcome::Pending => app.mode = Mode::AddingRecord(state),
        AddOutcome::Cancelled => {}
        AddOutcome::Mismatch => {
            app.notify(Notification::from(&VpnUsersError::PasswordMismatch));
        }
        AddOutcome::Complete(record) => match app.table.add(record) {
            Ok(row) => {
                app.cursor.row = row;
                app.notify(Notification::success("Entry added"));
                report_save_error(app);
            }
            Err(e) => app.notify(Notification::from(&e)),
        },
    }
}

fn handle_edit_key(app: &mut App, mut state: EditFieldState, key: Key) {
    match state.handle_key(key) {
        EditOutcome::Pending => app.mode = Mode::EditingField(state),
        EditOutcome::Cancelled | EditOutcome::Unchanged => {}
        EditOutcome::Mismatch => {
            app.notify(Notification::from(&VpnUsersError::PasswordMismatch));
        }
        EditOutcome::Commit(value) => match app.table.edit(state.row, state.field, &value) {
            Ok(()) => {
                if state.field == RecordField::Secret {
                    app.notify(Notification::success("Password saved"));
                }
                report_save_error(app);
            }
            Err(e) => app.notify(Notification::from(&e)),
        },
    }
}

fn handle_delete_key(app: &mut App, state: DeleteConfirmState, key: Key) {
    if !DeleteConfirmState::confirms(key) {
        return;
    }

    match app.table.delete(state.row) {
        Ok(_) => {
            app.clamp_row();
            app.notify(Notification::success("Row deleted"));
            report_save_error(app);
        }
        Err(e) => app.notify(Notification::from(&e)),
    }
}

/// Replace the notice with a save failure, if the last write failed
fn report_save_error(app: &mut App) {
    if let Some(message) = app.table.take_save_error() {
        app.notify(Notification::error(format!(
            "Save failed, changes kept in memory: {}",
            message
        )));
    }
}
