//! Terminal display formatting
//!
//! Text rendering for record lists and report helpers.

pub mod record;
pub mod report;

pub use record::format_record_table;
