//! Stream Bench
//!
//! Drives a STREAM-style micro-benchmark executable over repeated runs,
//! parses its per-trial output, and aggregates the trials into a summary
//! table of averaged timings with derived bandwidth (GB/s) and throughput
//! (MFLOPS) metrics.
//!
//! This crate provides the core implementation for the
//! `stream-bench` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! stream-bench run --executable ./stream --output results/benchmark_results.csv
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
