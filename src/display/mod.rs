//! Display formatting for terminal output

pub mod records;

pub use records::format_record_list;
