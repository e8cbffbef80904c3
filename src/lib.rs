//! vpnusers - Terminal editor for PPP CHAP secrets
//!
//! Manages the `chap-secrets` file read by pppd and xl2tpd. Every entry
//! carries, in a trailing comment the daemon ignores, an enrollment date and
//! a validity period in months, from which an expiry date is derived.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings and logging setup
//! - `error`: Custom error types
//! - `models`: Records, columns, and expiry calculation
//! - `storage`: The secrets file format and file I/O
//! - `services`: The record table and its mutations
//! - `tui`: The interactive editor
//! - `cli`, `display`: Non-interactive commands and their output
//!
//! # Example
//!
//! ```rust,ignore
//! use vpnusers::config::Settings;
//! use vpnusers::models::SystemClock;
//! use vpnusers::services::RecordTable;
//!
//! let settings = Settings::for_file("/etc/ppp/chap-secrets");
//! let table = RecordTable::load(settings.secrets(), settings.capacity, Box::new(SystemClock))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod secure_memory;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{VpnUsersError, VpnUsersResult};
