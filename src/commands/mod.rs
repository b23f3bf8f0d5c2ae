//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use aggregate::{execute_aggregate, AggregateArgs};
pub use run::{execute_run, validate_args, RunArgs};
pub use utils::{display_schema, display_version, validate_results_file};
