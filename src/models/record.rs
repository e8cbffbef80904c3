//! Authentication record model
//!
//! One CHAP secrets entry plus the values derived from it: the secret's
//! digest for display and the computed expiry.

use chrono::NaiveDateTime;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use super::expiry::Expiry;
use super::field::{clamp_len, RecordField};

/// Hex MD5 of a secret, shown in place of the plaintext
pub fn secret_digest(secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Operator-supplied values for a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub client: String,
    pub server: String,
    pub secret: String,
    pub ip: String,
    pub enrollment_date: String,
    pub validity_months: String,
}

impl NewRecord {
    /// Set the value of an editable column
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RecordField::Client => self.client = value,
            RecordField::Server => self.server = value,
            RecordField::Secret => self.secret = value,
            RecordField::Ip => self.ip = value,
            RecordField::Date => self.enrollment_date = value,
            RecordField::Months => self.validity_months = value,
            RecordField::Expiry => {}
        }
    }
}

/// A CHAP secrets entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub client: String,
    pub server: String,

    /// Plaintext secret, as the daemon needs it
    pub secret: String,

    /// Derived from `secret`
    pub secret_digest: String,

    pub ip: String,

    /// Enrollment date as typed, nominally `MM/DD/YYYY`; empty when absent
    pub enrollment_date: String,

    /// Validity in months, or `~...` for unlimited
    pub validity_months: String,

    /// Derived from the date and months at the last recompute
    pub expiry: Expiry,
}

impl AuthRecord {
    /// Build a record, truncating values to their column limits and
    /// computing the derived fields
    pub fn new(fields: NewRecord, now: NaiveDateTime) -> Self {
        let secret = clamp(RecordField::Secret, &fields.secret);
        let mut record = Self {
            client: clamp(RecordField::Client, &fields.client),
            server: clamp(RecordField::Server, &fields.server),
            secret_digest: secret_digest(&secret),
            secret,
            ip: clamp(RecordField::Ip, &fields.ip),
            enrollment_date: clamp(RecordField::Date, &fields.enrollment_date),
            validity_months: clamp(RecordField::Months, &fields.validity_months),
            expiry: Expiry::default(),
        };
        record.recompute_expiry(now);
        record
    }

    /// Recalculate the expiry from the stored date and months
    pub fn recompute_expiry(&mut self, now: NaiveDateTime) {
        self.expiry = Expiry::compute(&self.enrollment_date, &self.validity_months, now);
    }

    /// Replace the secret and refresh its digest
    pub fn set_secret(&mut self, secret: &str) {
        self.secret = clamp(RecordField::Secret, secret);
        self.secret_digest = secret_digest(&self.secret);
    }

    /// Replace an editable column, truncated to its limit
    ///
    /// A new secret refreshes the digest; a new date or months token
    /// refreshes the expiry. The expiry column itself is ignored.
    pub fn set_value(&mut self, field: RecordField, value: &str, now: NaiveDateTime) {
        let value = clamp(field, value);
        match field {
            RecordField::Client => self.client = value,
            RecordField::Server => self.server = value,
            RecordField::Secret => self.set_secret(&value),
            RecordField::Ip => self.ip = value,
            RecordField::Date => self.enrollment_date = value,
            RecordField::Months => self.validity_months = value,
            RecordField::Expiry => return,
        }

        if field.affects_expiry() {
            self.recompute_expiry(now);
        }
    }

    /// Whether the record was expired at the last recompute
    pub fn is_expired(&self) -> bool {
        self.expiry.is_expired()
    }

    /// Stored value of an editable column; the secret column yields the
    /// plaintext, the expiry column yields `None`
    pub fn value(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Client => Some(&self.client),
            RecordField::Server => Some(&self.server),
            RecordField::Secret => Some(&self.secret),
            RecordField::Ip => Some(&self.ip),
            RecordField::Date => Some(&self.enrollment_date),
            RecordField::Months => Some(&self.validity_months),
            RecordField::Expiry => None,
        }
    }

    /// Text shown in the grid for a column
    pub fn display(&self, field: RecordField) -> String {
        match field {
            RecordField::Secret => self.secret_digest.clone(),
            RecordField::Expiry => self.expiry.to_string(),
            other => self.value(other).unwrap_or_default().to_string(),
        }
    }

    /// All seven grid cells in display order
    pub fn display_row(&self) -> [String; RecordField::COUNT] {
        RecordField::ALL.map(|field| self.display(field))
    }

    /// The editable values, without derived fields
    pub fn fields(&self) -> NewRecord {
        NewRecord {
            client: self.client.clone(),
            server: self.server.clone(),
            secret: self.secret.clone(),
            ip: self.ip.clone(),
            enrollment_date: self.enrollment_date.clone(),
            validity_months: self.validity_months.clone(),
        }
    }
}

fn clamp(field: RecordField, value: &str) -> String {
    match field.max_len() {
        Some(max) => clamp_len(value, max),
        None => value.to_string(),
    }
}
