//! Run command implementation.
//!
//! The run command:
//! 1. Invokes the benchmark executable N times, capturing stdout
//! 2. Parses every capture into raw trials
//! 3. Aggregates all trials into the summary table
//! 4. Writes the results CSV (and optional JSON report)

use crate::aggregator::aggregate;
use crate::output::{write_report, write_summary};
use crate::parser::{parse_benchmark_output, RawTrial, RunReport};
use crate::runner::BenchRunner;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Path to the benchmark executable
    pub executable: PathBuf,

    /// Number of full benchmark invocations to average over
    pub num_runs: usize,

    /// Output path for the results CSV
    pub output_csv: PathBuf,

    /// Output path for the JSON run report (optional)
    pub output_report: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Extra arguments passed through to the benchmark
    pub bench_args: Vec<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        use crate::utils::config::DEFAULT_NUM_RUNS;

        Self {
            executable: PathBuf::from("./stream"),
            num_runs: DEFAULT_NUM_RUNS,
            output_csv: PathBuf::from("results/benchmark_results.csv"),
            output_report: None,
            print_summary: false,
            bench_args: Vec::new(),
        }
    }
}

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Benchmark spawn or exit failures
/// * Output parse errors (corrupted capture)
/// * File write errors
pub fn execute_run(args: RunArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Driving benchmark {} over {} run(s)",
        args.executable.display(),
        args.num_runs
    );

    // Step 1: Run the benchmark and collect trials
    info!("Step 1/4: Running benchmark...");
    let runner = BenchRunner::new(&args.executable)
        .context("Failed to prepare benchmark runner")?
        .with_args(args.bench_args.clone());

    let mut trials: Vec<RawTrial> = Vec::new();
    for iteration in 1..=args.num_runs {
        info!("Iteration {}/{}...", iteration, args.num_runs);

        let capture = runner
            .capture_output()
            .with_context(|| format!("Benchmark iteration {iteration} failed"))?;

        let parsed = parse_benchmark_output(&capture)
            .with_context(|| format!("Failed to parse output of iteration {iteration}"))?;

        debug!("Iteration {} contributed {} trials", iteration, parsed.len());
        trials.extend(parsed);
    }

    // Step 2: Aggregate
    info!("Step 2/4: Aggregating {} trials...", trials.len());
    let rows = aggregate(&trials);

    debug!("{} summary rows", rows.len());

    // Step 3: Write the results CSV
    info!("Step 3/4: Writing results CSV...");
    write_summary(&rows, &args.output_csv).context("Failed to write results CSV")?;

    info!("✓ Results written to: {}", args.output_csv.display());

    // Step 4: Write the JSON report (if requested)
    if let Some(report_path) = &args.output_report {
        info!("Step 4/4: Writing run report...");
        let report = RunReport::new(
            args.executable.display().to_string(),
            args.num_runs,
            rows.clone(),
        );
        write_report(&report, report_path).context("Failed to write run report")?;

        info!("✓ Report written to: {}", report_path.display());
    } else {
        info!("Step 4/4: Skipping run report (not requested)");
    }

    // Print text summary (if requested)
    if args.print_summary {
        print_summary_table(&rows);
    }

    let elapsed = start_time.elapsed();
    info!("Run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Print a human-readable summary table to stdout
///
/// **Public** - shared with the aggregate command
pub fn print_summary_table(rows: &[crate::parser::SummaryRow]) {
    println!("\n{}", "=".repeat(72));
    println!("BENCHMARK SUMMARY");
    println!("{}", "=".repeat(72));
    println!(
        "{:<10} {:>12} {:>14} {:>12} {:>14}",
        "Kernel", "Size", "GB/s", "MFLOPS", "AvgTime (s)"
    );

    for row in rows {
        println!(
            "{:<10} {:>12} {:>14.4} {:>12.4} {:>14.6}",
            row.kernel, row.problem_size, row.bandwidth_gbs, row.mflops, row.avg_elapsed_seconds
        );
    }

    println!("{}", "=".repeat(72));
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_args(args: &RunArgs) -> Result<()> {
    if args.executable.as_os_str().is_empty() {
        anyhow::bail!("Benchmark executable path cannot be empty");
    }

    if args.num_runs == 0 {
        anyhow::bail!("Number of runs must be greater than 0");
    }

    if args.num_runs > 1000 {
        anyhow::bail!("Number of runs is too large (max 1000)");
    }

    if args.output_csv.as_os_str().is_empty() {
        anyhow::bail!("Output CSV path cannot be empty");
    }

    Ok(())
}
