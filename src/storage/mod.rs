//! Storage layer for vpnusers
//!
//! Reads and writes the CHAP secrets file: the text codec and the
//! whole-file write strategies.

pub mod codec;
pub mod file_io;

pub use file_io::{read_bytes, write_text_atomic, write_text_in_place};

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::VpnUsersError;
use crate::models::AuthRecord;

/// The secrets file on disk
#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
    atomic: bool,
}

impl SecretsFile {
    /// Create a handle; nothing is read until [`SecretsFile::load`]
    pub fn new(path: impl Into<PathBuf>, atomic: bool) -> Self {
        Self {
            path: path.into(),
            atomic,
        }
    }

    /// Path of the secrets file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    pub fn load(&self, capacity: usize, now: NaiveDateTime) -> Result<Vec<AuthRecord>, VpnUsersError> {
        let contents = read_bytes(&self.path)?;
        Ok(codec::parse(&contents, capacity, now))
    }

    /// Rewrite the file with `records`
    pub fn save(&self, records: &[AuthRecord]) -> Result<(), VpnUsersError> {
        let contents = codec::serialize(records);
        if self.atomic {
            write_text_atomic(&self.path, &contents)
        } else {
            write_text_in_place(&self.path, &contents)
        }
    }
}
