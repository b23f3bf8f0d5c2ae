//! Spawns the benchmark executable and captures its stdout.

use crate::utils::error::RunnerError;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Driver for one benchmark executable
pub struct BenchRunner {
    executable: PathBuf,
    args: Vec<String>,
}

impl BenchRunner {
    /// Create a runner for an existing executable
    pub fn new(executable: impl Into<PathBuf>) -> Result<Self, RunnerError> {
        let executable = executable.into();

        if !executable.exists() {
            return Err(RunnerError::ExecutableNotFound(
                executable.display().to_string(),
            ));
        }

        Ok(Self {
            executable,
            args: Vec::new(),
        })
    }

    /// Add extra arguments passed through to the benchmark
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Path of the driven executable
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run the benchmark once and capture its stdout as text
    ///
    /// **Public** - called once per iteration by the run command
    pub fn capture_output(&self) -> Result<String, RunnerError> {
        info!("Running benchmark: {}", self.executable.display());

        let output = Command::new(&self.executable)
            .args(&self.args)
            .output()
            .map_err(RunnerError::SpawnFailed)?;

        if !output.status.success() {
            return Err(RunnerError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| RunnerError::InvalidOutput)?;

        debug!("Captured {} bytes of benchmark output", stdout.len());

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_error() {
        let result = BenchRunner::new("/nonexistent/bench-binary");
        assert!(matches!(result, Err(RunnerError::ExecutableNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_output_from_echo() {
        let runner = BenchRunner::new("/bin/echo")
            .unwrap()
            .with_args(["Kernel, ProblemSize, RUNS, TotalOps, Time".to_string()]);

        let output = runner.capture_output().unwrap();
        assert!(output.starts_with("Kernel,"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_error() {
        let runner = BenchRunner::new("/bin/sh")
            .unwrap()
            .with_args(["-c".to_string(), "exit 3".to_string()]);

        let result = runner.capture_output();
        assert!(matches!(result, Err(RunnerError::NonZeroExit { .. })));
    }
}
