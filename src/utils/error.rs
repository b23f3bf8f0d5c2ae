//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing benchmark output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: field '{field}' is not numeric: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid benchmark output: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while running the benchmark executable
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("benchmark executable not found: {0}")]
    ExecutableNotFound(String),

    #[error("failed to spawn benchmark process: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("benchmark exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("benchmark output is not valid UTF-8")]
    InvalidOutput,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),

    #[error("malformed results file: {0}")]
    MalformedResults(String),
}
