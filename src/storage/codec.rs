//! CHAP secrets text format
//!
//! The file starts with a two-line header, then one entry per line:
//!
//! ```text
//! client<TAB>server<TAB>"secret"<TAB>ip<TAB>#MM/DD/YYYY<TAB>months
//! ```
//!
//! The daemon treats everything after `#` as a comment, which is where the
//! enrollment date and validity are kept. The comment is located by
//! searching for `#0` or `#1`, the possible first characters of a month.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::models::{AuthRecord, NewRecord};

/// Header written at the top of every saved file
pub const HEADER: &str = "# Secrets for authentication using CHAP\n\
                          # client\tserver\tsecret\t\t\t\tIP addresses\n";

/// Number of leading lines skipped on load
pub const HEADER_LINES: usize = 2;

/// Markers that open the metadata comment, in search order
const METADATA_MARKERS: [&str; 2] = ["#0", "#1"];

/// Parse a whole file into records
///
/// The file is taken as raw bytes and split into lines; each line is
/// decoded on its own. Malformed lines, including ones that are not valid
/// UTF-8, are skipped. Parsing stops once `capacity` records have been
/// read.
pub fn parse(contents: impl AsRef<[u8]>, capacity: usize, now: NaiveDateTime) -> Vec<AuthRecord> {
    let contents = contents.as_ref();
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    let mut records = Vec::new();

    for (index, raw) in body.split(|b| *b == b'\n').enumerate().skip(HEADER_LINES) {
        if records.len() >= capacity {
            warn!(
                line = index + 1,
                capacity, "Capacity reached, ignoring remaining lines"
            );
            break;
        }

        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = index + 1, "Skipping line that is not valid UTF-8");
            continue;
        };

        match parse_line(line) {
            Some(fields) => records.push(AuthRecord::new(fields, now)),
            None => debug!(line = index + 1, "Skipping line"),
        }
    }

    records
}

/// Parse one data line
///
/// Returns `None` for blank lines, comment lines, and lines with fewer than
/// four columns.
///
/// The metadata comment is found by its `#0`/`#1` marker alone, so some
/// values written by [`format_line`] do not come back: a date that does not
/// start with `0` or `1` (such as `2/5/2024`) or an empty date loses both the
/// date and the months, and a client, server, secret or ip containing `#0`
/// or `#1` cuts the line at that point.
pub fn parse_line(line: &str) -> Option<NewRecord> {
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = NewRecord::default();

    // Pass 1: lift the metadata comment off the end of the line
    let marker = METADATA_MARKERS.iter().find_map(|m| line.find(m));
    let columns = match marker {
        Some(at) => {
            let mut meta = line[at + 1..].split_whitespace();
            if let Some(date) = meta.next() {
                fields.enrollment_date = date.to_string();
            }
            if let Some(months) = meta.next() {
                fields.validity_months = months.to_string();
            }
            &line[..at]
        }
        None => line,
    };

    // Pass 2: the daemon's columns
    let mut tokens: Vec<&str> = columns.split_whitespace().take(4).collect();

    // Quotes come off the secret before the column count is checked, so a
    // quoted secret never stands in for a missing column
    if let Some(secret) = tokens.get_mut(2) {
        *secret = strip_quotes(secret);
    }

    if tokens.len() < 4 {
        return None;
    }

    fields.client = tokens[0].to_string();
    fields.server = tokens[1].to_string();
    fields.secret = tokens[2].to_string();
    fields.ip = tokens[3].to_string();

    Some(fields)
}

/// Serialize records, header included
pub fn serialize<'a>(records: impl IntoIterator<Item = &'a AuthRecord>) -> String {
    let mut out = String::from(HEADER);
    for record in records {
        out.push_str(&format_line(record));
        out.push('\n');
    }
    out
}

/// Format one record as a data line, without the newline
pub fn format_line(record: &AuthRecord) -> String {
    format!(
        "{}\t{}\t\"{}\"\t{}\t#{}\t{}",
        record.client,
        record.server,
        record.secret,
        record.ip,
        record.enrollment_date,
        record.validity_months
    )
}

fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}
