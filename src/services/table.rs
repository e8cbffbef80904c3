//! Record table service
//!
//! Holds the loaded records in file order and applies add, edit and delete.
//! Every successful mutation rewrites the secrets file before returning.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{VpnUsersError, VpnUsersResult};
use crate::models::{AuthRecord, Clock, NewRecord, RecordField};
use crate::storage::SecretsFile;

/// Ordered, capacity-bounded collection of records backed by the secrets file
pub struct RecordTable {
    records: Vec<AuthRecord>,
    capacity: usize,
    store: SecretsFile,
    clock: Box<dyn Clock>,
    save_error: Option<String>,
}

impl RecordTable {
    /// Load the table from disk
    ///
    /// Failing to read the file is an error; malformed lines are not.
    pub fn load(store: SecretsFile, capacity: usize, clock: Box<dyn Clock>) -> VpnUsersResult<Self> {
        let records = store.load(capacity, clock.now())?;
        info!(
            path = %store.path().display(),
            count = records.len(),
            "Loaded secrets file"
        );

        Ok(Self {
            records,
            capacity,
            store,
            clock,
            save_error: None,
        })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if another record would exceed the capacity
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Record at `row`
    pub fn get(&self, row: usize) -> Option<&AuthRecord> {
        self.records.get(row)
    }

    /// All records in table order
    pub fn records(&self) -> &[AuthRecord] {
        &self.records
    }

    /// Row of the first record for `client`
    pub fn find_client(&self, client: &str) -> Option<usize> {
        self.records.iter().position(|r| r.client == client)
    }

    /// Append a record
    ///
    /// Duplicate clients are allowed. Returns the new row.
    pub fn add(&mut self, fields: NewRecord) -> VpnUsersResult<usize> {
        if self.is_full() {
            return Err(VpnUsersError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let record = AuthRecord::new(fields, self.clock.now());
        info!(client = %record.client, "Adding record");
        self.records.push(record);
        self.persist();

        Ok(self.records.len() - 1)
    }

    /// Replace one column of a record
    ///
    /// The value is truncated to the column limit. The secret's digest and
    /// the expiry are refreshed when their inputs change.
    pub fn edit(&mut self, row: usize, field: RecordField, value: &str) -> VpnUsersResult<()> {
        if !field.is_editable() {
            return Err(VpnUsersError::ReadOnlyField(field));
        }

        let len = self.records.len();
        let now = self.clock.now();
        let record = self
            .records
            .get_mut(row)
            .ok_or(VpnUsersError::InvalidRow { row, len })?;

        record.set_value(field, value, now);

        info!(row, client = %record.client, field = %field, "Edited record");
        self.persist();
        Ok(())
    }

    /// Remove a record; later rows move up by one
    pub fn delete(&mut self, row: usize) -> VpnUsersResult<AuthRecord> {
        if row >= self.records.len() {
            return Err(VpnUsersError::InvalidRow {
                row,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(row);
        info!(row, client = %removed.client, "Deleted record");
        self.persist();
        Ok(removed)
    }

    /// The last save failure not yet reported, if any
    pub fn take_save_error(&mut self) -> Option<String> {
        self.save_error.take()
    }

    /// Rewrite the file; failures are kept for the caller to report and
    /// never undo the in-memory change
    fn persist(&mut self) {
        match self.store.save(&self.records) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                warn!(path = %self.store.path().display(), error = %e, "Failed to save secrets file");
                self.save_error = Some(e.to_string());
            }
        }
    }
}
