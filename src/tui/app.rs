//! Application state for the editor
//!
//! The App holds the record table, the grid cursor, the current mode and
//! the pending notice. Rendering reads a [`Snapshot`] built from it.

use crate::config::settings::Settings;
use crate::models::RecordField;
use crate::services::RecordTable;

use super::dialogs::{AddRecordState, DeleteConfirmState, EditFieldState};
use super::snapshot::{Cursor, DialogView, RowView, Snapshot};
use super::widgets::Notification;

/// What the editor is doing
#[derive(Debug, Clone, Default)]
pub enum Mode {
    /// Moving around the grid
    #[default]
    Browsing,
    AddingRecord(AddRecordState),
    EditingField(EditFieldState),
    ConfirmingDelete(DeleteConfirmState),
}

/// Main application state
pub struct App {
    /// The loaded records
    pub table: RecordTable,

    /// Selected cell
    pub cursor: Cursor,

    /// Current mode
    pub mode: Mode,

    /// Notice shown until the next key
    pub notice: Option<Notification>,

    /// Server used when the add dialog's answer is blank
    pub default_server: String,

    /// IP used when the add dialog's answer is blank
    pub default_ip: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create an editor over a loaded table
    pub fn new(table: RecordTable, settings: &Settings) -> Self {
        Self {
            table,
            cursor: Cursor::default(),
            mode: Mode::Browsing,
            notice: None,
            default_server: settings.default_server.clone(),
            default_ip: settings.default_ip.clone(),
            should_quit: false,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a notice
    pub fn notify(&mut self, notice: Notification) {
        self.notice = Some(notice);
    }

    /// Drop the current notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Check if a dialog is open
    pub fn has_dialog(&self) -> bool {
        !matches!(self.mode, Mode::Browsing)
    }

    pub fn move_up(&mut self) {
        self.cursor.row = self.cursor.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.table.len() {
            self.cursor.row += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor.col + 1 < RecordField::COUNT {
            self.cursor.col += 1;
        }
    }

    /// Keep the cursor on an existing row after the table shrinks
    pub fn clamp_row(&mut self) {
        let last = self.table.len().saturating_sub(1);
        if self.cursor.row > last {
            self.cursor.row = last;
        }
    }

    /// Title line for the grid
    pub fn title(&self) -> String {
        format!(
            " VPN Users: {} ({}/{}) ",
            self.table.path().display(),
            self.table.len(),
            self.table.capacity()
        )
    }

    /// Everything needed to draw the current frame
    pub fn snapshot(&self) -> Snapshot {
        let rows = self
            .table
            .records()
            .iter()
            .map(|record| RowView {
                cells: record.display_row(),
                expired: record.is_expired(),
            })
            .collect();

        let dialog = match &self.mode {
            Mode::Browsing => None,
            Mode::AddingRecord(state) => Some(DialogView::Prompt(state.view())),
            Mode::EditingField(state) => Some(DialogView::Prompt(state.view())),
            Mode::ConfirmingDelete(state) => Some(DialogView::ConfirmDelete {
                summary: state.summary.clone(),
            }),
        };

        Snapshot {
            title: self.title(),
            headers: RecordField::ALL.map(RecordField::header),
            rows,
            cursor: self.cursor,
            dialog,
            notice: self.notice.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedClock, NewRecord};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn app_with_rows(rows: usize) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chap-secrets");
        std::fs::write(&path, "").unwrap();

        let settings = Settings::for_file(&path);
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut table = RecordTable::load(
            settings.secrets(),
            settings.capacity,
            Box::new(FixedClock(now)),
        )
        .unwrap();
        for i in 0..rows {
            table
                .add(NewRecord {
                    client: format!("user{}", i),
                    server: "l2tpd".into(),
                    secret: "pw".into(),
                    ip: "*".into(),
                    enrollment_date: "01/01/2024".into(),
                    validity_months: "1".into(),
                })
                .unwrap();
        }

        let app = App::new(table, &settings);
        (temp_dir, app)
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (_dir, mut app) = app_with_rows(2);
        app.move_up();
        app.move_left();
        assert_eq!(app.cursor, Cursor { row: 0, col: 0 });

        for _ in 0..10 {
            app.move_down();
            app.move_right();
        }
        assert_eq!(app.cursor, Cursor { row: 1, col: 6 });
        assert_eq!(app.cursor.field(), RecordField::Expiry);
    }

    #[test]
    fn test_cursor_on_empty_table() {
        let (_dir, mut app) = app_with_rows(0);
        app.move_down();
        assert_eq!(app.cursor.row, 0);
        app.clamp_row();
        assert_eq!(app.cursor.row, 0);
    }

    #[test]
    fn test_snapshot_rows() {
        let (_dir, app) = app_with_rows(2);
        let snapshot = app.snapshot();

        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].cells[0], "user0");
        assert_eq!(snapshot.rows[0].cells[2].len(), 32);
        assert_eq!(snapshot.rows[0].cells[6], "02/01/2024");
        assert!(snapshot.rows[0].expired);
        assert_eq!(snapshot.headers[2], "SECRET (MD5)");
        assert!(snapshot.title.contains("(2/100)"));
        assert!(snapshot.dialog.is_none());
    }
}
