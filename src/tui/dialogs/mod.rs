//! Modal dialogs for the editor

pub mod add_record;
pub mod confirm;
pub mod edit_field;
pub mod prompt;

pub use add_record::{AddOutcome, AddRecordState};
pub use confirm::DeleteConfirmState;
pub use edit_field::{EditFieldState, EditOutcome};
