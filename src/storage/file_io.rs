//! File I/O utilities with atomic writes
//!
//! The secrets file is always rewritten whole. With atomic writes enabled
//! the new contents go to a sibling temp file which then replaces the
//! original, so a crash leaves either the old or the new file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::VpnUsersError;

/// Read the whole secrets file as raw bytes
///
/// A missing or unreadable file is an error; content is not validated here.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, VpnUsersError> {
    let path = path.as_ref();
    fs::read(path)
        .map_err(|e| VpnUsersError::Storage(format!("Cannot open {}: {}", path.display(), e)))
}

/// Truncate the file and write `contents` in place
pub fn write_text_in_place<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), VpnUsersError> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| VpnUsersError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| VpnUsersError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| VpnUsersError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

/// Write `contents` to a file atomically (write to temp, then rename)
///
/// The temp file takes the permissions of the file it replaces, so a
/// secrets file readable only by root stays that way.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), VpnUsersError> {
    let path = path.as_ref();

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| VpnUsersError::Storage(format!("Failed to create temp file: {}", e)))?;

    if let Ok(metadata) = fs::metadata(path) {
        file.set_permissions(metadata.permissions()).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            VpnUsersError::Storage(format!("Failed to copy permissions: {}", e))
        })?;
    }

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| VpnUsersError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| VpnUsersError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| VpnUsersError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        VpnUsersError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
