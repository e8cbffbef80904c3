//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record table.

pub mod records;

pub use records::{handle_list_command, handle_passwd_command, prompt_password};
