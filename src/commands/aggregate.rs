//! Aggregate command implementation.
//!
//! Re-aggregates previously captured benchmark stdout files into a summary
//! CSV without re-running the benchmark. Each input file is one full
//! invocation's capture (header line included).

use super::run::print_summary_table;
use crate::aggregator::aggregate;
use crate::output::write_summary;
use crate::parser::{parse_benchmark_output, RawTrial};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the aggregate command
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Capture files, one benchmark invocation each
    pub inputs: Vec<PathBuf>,

    /// Output path for the results CSV
    pub output_csv: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_aggregate(args: AggregateArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one capture file is required");
    }

    let mut trials: Vec<RawTrial> = Vec::new();
    for input in &args.inputs {
        info!("Reading capture: {}", input.display());

        let capture = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read capture file {}", input.display()))?;

        let parsed = parse_benchmark_output(&capture)
            .with_context(|| format!("Failed to parse capture file {}", input.display()))?;

        trials.extend(parsed);
    }

    info!("Aggregating {} trials from {} capture(s)", trials.len(), args.inputs.len());
    let rows = aggregate(&trials);

    write_summary(&rows, &args.output_csv).context("Failed to write results CSV")?;

    info!("✓ Results written to: {}", args.output_csv.display());

    if args.print_summary {
        print_summary_table(&rows);
    }

    Ok(())
}
