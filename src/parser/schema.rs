//! Data model for trials, summary rows, and the JSON run report.
//!
//! `SummaryRow` is the unit of the CSV file consumed by the charting
//! scripts; `RunReport` is a versioned JSON envelope around the same rows.

use serde::{Deserialize, Serialize};

/// One parsed line of benchmark output
///
/// A trial is one timed execution of a kernel's inner loop, repeated
/// `repetitions` times over `problem_size` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrial {
    /// Kernel identifier (e.g. "Copy", "Triad")
    pub kernel: String,

    /// Number of elements processed per repetition
    pub problem_size: u64,

    /// Inner-loop repetitions within this trial
    pub repetitions: u64,

    /// Wall-clock time for the whole trial, in seconds
    pub elapsed_seconds: f64,
}

/// One aggregated record per (kernel, problem size) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Kernel identifier
    pub kernel: String,

    /// Number of elements processed per repetition
    pub problem_size: u64,

    /// Arithmetic mean of elapsed times over all contributing trials
    pub avg_elapsed_seconds: f64,

    /// problem_size * repetitions, from the first trial in the group
    pub total_operations: u64,

    /// Achieved memory bandwidth in GB/s (0 for compute-only kernels)
    pub bandwidth_gbs: f64,

    /// Floating-point throughput in MFLOPS (0 for memory-only kernels)
    pub mflops: f64,
}

/// Top-level run report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Benchmark executable that was driven
    pub executable: String,

    /// Number of full benchmark invocations averaged over
    pub num_runs: usize,

    /// Aggregated summary rows, kernel-major, sizes ascending
    pub rows: Vec<SummaryRow>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl RunReport {
    /// Build a report around aggregated rows, stamping the current time
    pub fn new(executable: impl Into<String>, num_runs: usize, rows: Vec<SummaryRow>) -> Self {
        use crate::utils::config::SCHEMA_VERSION;
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            executable: executable.into(),
            num_runs,
            rows,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
