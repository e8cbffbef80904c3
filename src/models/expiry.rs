//! Expiry calculation
//!
//! Derives an expiry date from an enrollment date (`MM/DD/YYYY`) and a
//! validity token. A token starting with `~` never expires; otherwise it is
//! read as a number of calendar months.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a validity token as unlimited
pub const UNLIMITED_PREFIX: char = '~';

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant, for deterministic expiry
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Computed expiry state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expiry {
    /// Date unreadable or validity not a positive month count
    NotApplicable,
    /// Unlimited validity
    Never,
    /// Expires at the start of `date`
    On { date: NaiveDate, expired: bool },
}

impl Default for Expiry {
    fn default() -> Self {
        Self::NotApplicable
    }
}

impl Expiry {
    /// Compute the expiry for an enrollment date and validity token
    ///
    /// Rules are applied in order: an unreadable date gives `N/A`, a `~`
    /// token gives `Never`, a non-positive month count gives `N/A`.
    /// Otherwise months are added with calendar rollover and the day of
    /// month is carried as an offset, so `01/31` plus one month lands in
    /// early March.
    pub fn compute(enrollment_date: &str, validity_months: &str, now: NaiveDateTime) -> Self {
        let Some((month, day, year)) = scan_date(enrollment_date) else {
            return Self::NotApplicable;
        };

        if validity_months.starts_with(UNLIMITED_PREFIX) {
            return Self::Never;
        }

        let months = parse_leading_int(validity_months);
        if months <= 0 {
            return Self::NotApplicable;
        }

        match add_months(year, month, day, months) {
            Some(date) => {
                let expired = date.and_hms_opt(0, 0, 0).is_some_and(|start| start < now);
                Self::On { date, expired }
            }
            None => Self::NotApplicable,
        }
    }

    /// Whether the record was past its expiry at the last computation
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::On { expired: true, .. })
    }

    /// The expiry date, if there is one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On { date, .. } => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use chrono::Datelike;

        match self {
            Self::NotApplicable => write!(f, "N/A"),
            Self::Never => write!(f, "Never"),
            Self::On { date, .. } => write!(
                f,
                "{:02}/{:02}/{:04}",
                date.month(),
                date.day(),
                date.year()
            ),
        }
    }
}

/// Normalize `year`/`month + months`/`day` the way a calendar rollover does
fn add_months(year: i64, month: i64, day: i64, months: i64) -> Option<NaiveDate> {
    let month_index = month.checked_sub(1)?.checked_add(months)?;
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = month_index.rem_euclid(12) + 1;

    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month as u32, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Read `M/D/Y` as three integers; trailing text is ignored
fn scan_date(s: &str) -> Option<(i64, i64, i64)> {
    let (month, rest) = scan_int(s)?;
    let rest = rest.strip_prefix('/')?;
    let (day, rest) = scan_int(rest)?;
    let rest = rest.strip_prefix('/')?;
    let (year, _) = scan_int(rest)?;
    Some((month, day, year))
}

/// Read one signed decimal integer after optional leading whitespace
fn scan_int(s: &str) -> Option<(i64, &str)> {
    let s = s.trim_start_matches(is_c_space);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let value: i64 = digits[..len].parse().ok()?;
    Some((if negative { -value } else { value }, &digits[len..]))
}

/// Leading integer of a token; anything unreadable counts as zero
fn parse_leading_int(s: &str) -> i64 {
    scan_int(s).map(|(value, _)| value).unwrap_or(0)
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
