//! Output writers for summary data.
//!
//! This module handles writing data to disk:
//! - The results CSV consumed by the charting scripts
//! - An optional JSON run report with metadata

pub mod csv;
pub mod json;

// Re-export main functions
pub use csv::{read_summary, summary_to_csv, write_summary};
pub use json::{read_report, write_report};
