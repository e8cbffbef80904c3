//! Core data models for vpnusers
//!
//! This module contains the record shape, its columns, and the expiry
//! calculation derived from the enrollment metadata.

pub mod expiry;
pub mod field;
pub mod record;

pub use expiry::{Clock, Expiry, FixedClock, SystemClock};
pub use field::RecordField;
pub use record::{secret_digest, AuthRecord, NewRecord};
