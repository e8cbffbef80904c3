//! Record columns
//!
//! The seven columns shown in the grid, in display order, with their
//! stored length limits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest client, server or secret value
pub const MAX_NAME_LEN: usize = 63;

/// Longest ip or enrollment date value
pub const MAX_SHORT_LEN: usize = 31;

/// Longest validity months token
pub const MAX_MONTHS_LEN: usize = 15;

/// A column of the secrets grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Client,
    Server,
    /// Displayed as the digest, edited as plaintext
    Secret,
    Ip,
    Date,
    Months,
    /// Derived from date and months, never edited
    Expiry,
}

impl RecordField {
    /// All columns in display order
    pub const ALL: [RecordField; 7] = [
        Self::Client,
        Self::Server,
        Self::Secret,
        Self::Ip,
        Self::Date,
        Self::Months,
        Self::Expiry,
    ];

    /// Number of displayed columns
    pub const COUNT: usize = Self::ALL.len();

    /// Column at a grid index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Grid index of this column
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Maximum stored length, or `None` for the derived column
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::Client | Self::Server | Self::Secret => Some(MAX_NAME_LEN),
            Self::Ip | Self::Date => Some(MAX_SHORT_LEN),
            Self::Months => Some(MAX_MONTHS_LEN),
            Self::Expiry => None,
        }
    }

    /// Whether the operator may edit this column
    pub fn is_editable(self) -> bool {
        self.max_len().is_some()
    }

    /// Whether changing this column invalidates the computed expiry
    pub fn affects_expiry(self) -> bool {
        matches!(self, Self::Date | Self::Months)
    }

    /// Grid header label
    pub fn header(self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Server => "SERVER",
            Self::Secret => "SECRET (MD5)",
            Self::Ip => "IP",
            Self::Date => "DATE",
            Self::Months => "MONTHS",
            Self::Expiry => "EXPIRED",
        }
    }

    /// Grid column width, in cells
    pub fn width(self) -> u16 {
        match self {
            Self::Client => 12,
            Self::Server => 8,
            Self::Secret => 34,
            Self::Ip => 8,
            Self::Date => 12,
            Self::Months => 8,
            Self::Expiry => 10,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "Client"),
            Self::Server => write!(f, "Server"),
            Self::Secret => write!(f, "Secret"),
            Self::Ip => write!(f, "IP"),
            Self::Date => write!(f, "Date"),
            Self::Months => write!(f, "Months"),
            Self::Expiry => write!(f, "Expired"),
        }
    }
}

/// Truncate a value to at most `max` bytes, on a char boundary
pub fn clamp_len(value: &str, max: usize) -> String {
    if value.len() <= max {
        return value.to_string();
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, field) in RecordField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(RecordField::from_index(i), Some(*field));
        }
        assert_eq!(RecordField::from_index(7), None);
    }

    #[test]
    fn test_only_expiry_is_read_only() {
        let read_only: Vec<_> = RecordField::ALL
            .iter()
            .filter(|f| !f.is_editable())
            .collect();
        assert_eq!(read_only, vec![&RecordField::Expiry]);
    }

    #[test]
    fn test_max_lengths() {
        assert_eq!(RecordField::Client.max_len(), Some(63));
        assert_eq!(RecordField::Ip.max_len(), Some(31));
        assert_eq!(RecordField::Date.max_len(), Some(31));
        assert_eq!(RecordField::Months.max_len(), Some(15));
    }

    #[test]
    fn test_clamp_len() {
        assert_eq!(clamp_len("abcdef", 3), "abc");
        assert_eq!(clamp_len("ab", 3), "ab");
    }
}
