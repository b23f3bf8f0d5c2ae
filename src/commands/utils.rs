//! Small command implementations: validate, schema, version.

use crate::output::read_summary;
use crate::utils::config::{RESULTS_HEADER, SCHEMA_VERSION, STREAM_KERNELS};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a results CSV file
///
/// Checks the header and row format, then verifies the ordering contract
/// the charting scripts rely on: within each kernel, problem sizes must
/// strictly ascend.
pub fn validate_results_file(file_path: PathBuf) -> Result<()> {
    println!("Validating results: {}", file_path.display());

    let rows = read_summary(&file_path)?;

    for pair in rows.windows(2) {
        if pair[0].kernel == pair[1].kernel && pair[0].problem_size >= pair[1].problem_size {
            anyhow::bail!(
                "ordering violation: {} size {} appears before {}",
                pair[0].kernel,
                pair[0].problem_size,
                pair[1].problem_size
            );
        }
    }

    let mut kernels: Vec<&str> = Vec::new();
    for row in &rows {
        if !kernels.contains(&row.kernel.as_str()) {
            kernels.push(&row.kernel);
        }
    }

    println!("✓ Valid results CSV");
    println!("  Rows: {}", rows.len());
    println!("  Kernels: {}", kernels.join(", "));
    if let (Some(min), Some(max)) = (
        rows.iter().map(|r| r.problem_size).min(),
        rows.iter().map(|r| r.problem_size).max(),
    ) {
        println!("  Problem sizes: {} - {}", min, max);
    }

    Ok(())
}

/// Display the output schema
pub fn display_schema(show_details: bool) {
    println!("Stream Bench Results Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("CSV columns ({}):", RESULTS_HEADER);
        println!("  Kernel           - kernel name, one of: {}", STREAM_KERNELS.join(", "));
        println!("  ProblemSize      - elements processed per repetition");
        println!("  AvgBandwidth_GBs - achieved memory bandwidth, 4 decimals (0 for compute-only kernels)");
        println!("  AvgMFLOPS        - floating-point throughput, 4 decimals (0 for memory-only kernels)");
        println!("  AvgTime          - mean elapsed seconds over repeated runs, 6 decimals");
        println!("  TotalOps         - ProblemSize * repetitions, integer");
        println!();
        println!("Rows are grouped by kernel (first-seen order) and ascend by ProblemSize.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Stream Bench v{}", env!("CARGO_PKG_VERSION"));
    println!("Results Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Benchmark driver and aggregation for STREAM-style memory kernels.");
}
