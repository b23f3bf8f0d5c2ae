//! Process driver for the external benchmark executable.

pub mod process;

pub use process::BenchRunner;
