//! Record display formatting
//!
//! Formats the record table for terminal output. Secrets are shown as
//! their digest, as in the editor grid.

use tabled::{settings::Style, Table, Tabled};

use crate::models::AuthRecord;

#[derive(Tabled)]
struct RecordRow<'a> {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "CLIENT")]
    client: &'a str,
    #[tabled(rename = "SERVER")]
    server: &'a str,
    #[tabled(rename = "SECRET (MD5)")]
    secret_digest: &'a str,
    #[tabled(rename = "IP")]
    ip: &'a str,
    #[tabled(rename = "DATE")]
    date: &'a str,
    #[tabled(rename = "MONTHS")]
    months: &'a str,
    #[tabled(rename = "EXPIRED")]
    expiry: String,
}

/// Format records as a table
///
/// With `expired_only`, rows that have not expired are left out; row
/// numbers still refer to positions in the full table.
pub fn format_record_list(records: &[AuthRecord], expired_only: bool) -> String {
    let rows: Vec<RecordRow> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !expired_only || record.is_expired())
        .map(|(index, record)| RecordRow {
            row: index + 1,
            client: &record.client,
            server: &record.server,
            secret_digest: &record.secret_digest,
            ip: &record.ip,
            date: &record.enrollment_date,
            months: &record.validity_months,
            expiry: record.expiry.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return if expired_only {
            "No expired entries.".to_string()
        } else {
            "No entries found.".to_string()
        };
    }

    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n\n{} entr{}", table, count, if count == 1 { "y" } else { "ies" })
}
