//! Runtime settings for vpnusers
//!
//! Where the secrets file lives, how many records it may hold, how saves
//! are written, and the defaults offered by the add dialog.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::VpnUsersError;
use crate::storage::SecretsFile;

/// Secrets file read by pppd/xl2tpd
pub const DEFAULT_SECRETS_FILE: &str = "/etc/ppp/chap-secrets";

/// Most records the table will hold
pub const DEFAULT_CAPACITY: usize = 100;

/// Settings for a vpnusers session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the CHAP secrets file
    #[serde(default = "default_secrets_file")]
    pub secrets_file: PathBuf,

    /// Table capacity
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Replace the file via temp file and rename instead of truncating it
    #[serde(default = "default_atomic_save")]
    pub atomic_save: bool,

    /// Server used when the add dialog's server prompt is left blank
    #[serde(default = "default_server")]
    pub default_server: String,

    /// IP used when the add dialog's IP prompt is left blank
    #[serde(default = "default_ip")]
    pub default_ip: String,

    /// Where tracing output goes, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_secrets_file() -> PathBuf {
    PathBuf::from(DEFAULT_SECRETS_FILE)
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_atomic_save() -> bool {
    true
}

fn default_server() -> String {
    "l2tpd".to_string()
}

fn default_ip() -> String {
    "*".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secrets_file: default_secrets_file(),
            capacity: default_capacity(),
            atomic_save: default_atomic_save(),
            default_server: default_server(),
            default_ip: default_ip(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Settings for a given secrets file, everything else default
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            secrets_file: path.into(),
            ..Self::default()
        }
    }

    /// Reject settings the table cannot work with
    pub fn validate(&self) -> Result<(), VpnUsersError> {
        if self.capacity == 0 {
            return Err(VpnUsersError::Config(
                "capacity must be at least 1".into(),
            ));
        }
        if self.secrets_file.as_os_str().is_empty() {
            return Err(VpnUsersError::Config("secrets file path is empty".into()));
        }
        Ok(())
    }

    /// Storage handle for the configured secrets file
    pub fn secrets(&self) -> SecretsFile {
        SecretsFile::new(&self.secrets_file, self.atomic_save)
    }

    /// Pretty JSON rendering, as printed by `vpnusers config`
    pub fn to_json(&self) -> Result<String, VpnUsersError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VpnUsersError::Config(format!("Failed to serialize settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.secrets_file, PathBuf::from("/etc/ppp/chap-secrets"));
        assert_eq!(settings.capacity, 100);
        assert!(settings.atomic_save);
        assert_eq!(settings.default_server, "l2tpd");
        assert_eq!(settings.default_ip, "*");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let settings = Settings {
            capacity: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(VpnUsersError::Config(_))));
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::for_file("/tmp/chap-secrets");
        let json = settings.to_json().unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"capacity": 5}"#).unwrap();
        assert_eq!(settings.capacity, 5);
        assert_eq!(settings.default_server, "l2tpd");
    }
}
