//! Tracing setup
//!
//! The TUI owns the terminal, so log output only goes to a file and only
//! when one is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::VpnUsersError;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Install a file-backed subscriber if `log_file` is set
pub fn init_logging(log_file: Option<&Path>) -> Result<(), VpnUsersError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            VpnUsersError::Config(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| VpnUsersError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_noop() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn test_unopenable_log_file_is_config_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("vpnusers.log");
        let err = init_logging(Some(&path)).unwrap_err();
        assert!(matches!(err, VpnUsersError::Config(_)));
    }
}
