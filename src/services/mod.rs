//! Business logic layer for vpnusers
//!
//! The record table: CRUD over the loaded secrets with save-on-commit.

pub mod table;

pub use table::RecordTable;
