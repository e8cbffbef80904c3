//! Custom error types for vpnusers
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::RecordField;

/// The main error type for vpnusers operations
#[derive(Error, Debug)]
pub enum VpnUsersError {
    /// The table already holds as many records as it may
    #[error("Maximum entries reached ({capacity})")]
    CapacityExceeded { capacity: usize },

    /// A secret and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Attempt to edit a derived column
    #[error("{0} column is calculated automatically")]
    ReadOnlyField(RecordField),

    /// Row index outside the table
    #[error("Row {row} out of range (table has {len} rows)")]
    InvalidRow { row: usize, len: usize },

    /// No record with the given client name
    #[error("Client not found: {0}")]
    NotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl VpnUsersError {
    /// Check if this error was caused by operator input rather than the system
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::PasswordMismatch
                | Self::ReadOnlyField(_)
                | Self::InvalidRow { .. }
                | Self::NotFound(_)
        )
    }
}

impl From<std::io::Error> for VpnUsersError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VpnUsersError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for vpnusers operations
pub type VpnUsersResult<T> = Result<T, VpnUsersError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VpnUsersError::CapacityExceeded { capacity: 100 };
        assert_eq!(err.to_string(), "Maximum entries reached (100)");
    }

    #[test]
    fn test_read_only_field_names_column() {
        let err = VpnUsersError::ReadOnlyField(RecordField::Expiry);
        assert_eq!(
            err.to_string(),
            "Expired column is calculated automatically"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VpnUsersError = io_err.into();
        assert!(matches!(err, VpnUsersError::Io(_)));
        assert!(!err.is_rejection());
    }
}
