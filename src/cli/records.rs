//! Record CLI commands
//!
//! Non-interactive access to the secrets file: listing entries and
//! changing one client's password.

use tracing::info;

use crate::display::format_record_list;
use crate::error::{VpnUsersError, VpnUsersResult};
use crate::models::RecordField;
use crate::secure_memory::SecureString;
use crate::services::RecordTable;

/// Print the table, optionally only expired rows
pub fn handle_list_command(table: &RecordTable, expired_only: bool) {
    println!("{}", format_record_list(table.records(), expired_only));
}

/// Change the password of the first record for `client`
///
/// `prompt` reads one hidden line; it is called twice and both answers
/// must match.
pub fn handle_passwd_command<F>(table: &mut RecordTable, client: &str, mut prompt: F) -> VpnUsersResult<()>
where
    F: FnMut(&str) -> VpnUsersResult<SecureString>,
{
    let row = table
        .find_client(client)
        .ok_or_else(|| VpnUsersError::NotFound(client.to_string()))?;

    let first = prompt("New password: ")?;
    let second = prompt("Confirm password: ")?;
    if first != second {
        return Err(VpnUsersError::PasswordMismatch);
    }

    table.edit(row, RecordField::Secret, &first)?;
    if let Some(message) = table.take_save_error() {
        return Err(VpnUsersError::Storage(message));
    }

    info!(row, client, "Password changed from command line");
    println!("Password updated for '{}'", client);
    Ok(())
}

/// Prompt for a password (hidden input)
pub fn prompt_password(prompt: &str) -> VpnUsersResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| VpnUsersError::Io(format!("Failed to read password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn load(dir: &TempDir) -> RecordTable {
        let path = dir.path().join("chap-secrets");
        std::fs::write(
            &path,
            "# header\n# header\nalice\tl2tpd\t\"old\"\t*\t#01/01/2024\t6\n",
        )
        .unwrap();
        let settings = Settings::for_file(&path);
        let now = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        RecordTable::load(settings.secrets(), settings.capacity, Box::new(FixedClock(now))).unwrap()
    }

    #[test]
    fn test_passwd_changes_secret() {
        let dir = TempDir::new().unwrap();
        let mut table = load(&dir);

        handle_passwd_command(&mut table, "alice", |_| Ok(SecureString::from("new"))).unwrap();

        assert_eq!(table.get(0).unwrap().secret, "new");
        let saved = std::fs::read_to_string(dir.path().join("chap-secrets")).unwrap();
        assert!(saved.contains("\"new\""));
    }

    #[test]
    fn test_passwd_mismatch() {
        let dir = TempDir::new().unwrap();
        let mut table = load(&dir);
        let mut answers = vec!["two", "one"];

        let err = handle_passwd_command(&mut table, "alice", |_| {
            Ok(SecureString::from(answers.pop().unwrap()))
        })
        .unwrap_err();

        assert!(matches!(err, VpnUsersError::PasswordMismatch));
        assert_eq!(table.get(0).unwrap().secret, "old");
    }

    #[test]
    fn test_passwd_unknown_client() {
        let dir = TempDir::new().unwrap();
        let mut table = load(&dir);

        let err = handle_passwd_command(&mut table, "nobody", |_| {
            panic!("should not prompt")
        })
        .unwrap_err();

        assert!(matches!(err, VpnUsersError::NotFound(_)));
    }
}
