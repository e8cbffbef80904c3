//! Configuration module for vpnusers
//!
//! Settings are assembled from command-line flags and environment
//! variables; nothing is persisted besides the secrets file itself.

pub mod logging;
pub mod settings;

pub use settings::Settings;
