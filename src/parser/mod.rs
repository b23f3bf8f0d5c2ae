//! Benchmark output parsing and schema definitions.
//!
//! This module handles:
//! - Parsing the benchmark executable's comma-delimited stdout
//! - Defining the trial, summary row, and run report types

pub mod schema;
pub mod trial;

// Re-export main types
pub use schema::{RawTrial, RunReport, SummaryRow};
pub use trial::{parse_benchmark_output, parse_trial_line};
