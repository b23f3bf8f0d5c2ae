//! Stream Bench CLI
//!
//! Drives a STREAM-style micro-benchmark executable, aggregates repeated
//! trials, and writes the summary table used for performance charting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use stream_bench::commands::{
    display_schema, display_version, execute_aggregate, execute_run, validate_args,
    validate_results_file, AggregateArgs, RunArgs,
};
use stream_bench::utils::config::DEFAULT_NUM_RUNS;

/// Stream Bench - benchmark driver and aggregation for STREAM kernels
#[derive(Parser, Debug)]
#[command(name = "stream-bench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the benchmark repeatedly and write the summary table
    Run {
        /// Path to the benchmark executable
        #[arg(short, long, default_value = "./stream")]
        executable: PathBuf,

        /// Number of full benchmark invocations to average over
        #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_RUNS)]
        runs: usize,

        /// Output path for the results CSV
        #[arg(short, long, default_value = "results/benchmark_results.csv")]
        output: PathBuf,

        /// Output path for a JSON run report (optional)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Extra arguments passed through to the benchmark
        #[arg(last = true)]
        bench_args: Vec<String>,
    },

    /// Aggregate previously captured benchmark output files
    Aggregate {
        /// Capture files, one benchmark invocation each
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output path for the results CSV
        #[arg(short, long, default_value = "results/benchmark_results.csv")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a results CSV file
    Validate {
        /// Path to results CSV file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Run {
            executable,
            runs,
            output,
            report,
            summary,
            bench_args,
        } => {
            let args = RunArgs {
                executable,
                num_runs: runs,
                output_csv: output,
                output_report: report,
                print_summary: summary,
                bench_args,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute run
            execute_run(args)?;
        }

        Commands::Aggregate {
            input,
            output,
            summary,
        } => {
            execute_aggregate(AggregateArgs {
                inputs: input,
                output_csv: output,
                print_summary: summary,
            })?;
        }

        Commands::Validate { file } => {
            validate_results_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
