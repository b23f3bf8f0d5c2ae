//! Configuration and constants for the CLI.

/// Current results schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of full benchmark invocations to average over
pub const DEFAULT_NUM_RUNS: usize = 5;

/// Minimum comma-separated fields for a data line to count as a trial
pub const MIN_TRIAL_FIELDS: usize = 5;

/// Header row of the summary CSV, consumed verbatim by the charting scripts
pub const RESULTS_HEADER: &str = "Kernel,ProblemSize,AvgBandwidth_GBs,AvgMFLOPS,AvgTime,TotalOps";

// Canonical kernel names emitted by the benchmark executable.
// The cost model (aggregator::cost_model) keys off these exact strings.
pub const STREAM_KERNELS: &[&str] = &["Copy", "Scale", "Add", "Triad", "TriadMem", "TriadComp"];
