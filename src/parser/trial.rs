//! Parser for the benchmark executable's stdout.
//!
//! The benchmark prints one header line followed by one comma-delimited data
//! line per kernel/size combination:
//!
//! ```text
//! Kernel, ProblemSize, RUNS, TotalOps, Time
//! Copy, 1024, 10, 10240, 0.000012345
//! ```
//!
//! Field 4 (TotalOps) is recomputed during aggregation and ignored here.

use super::schema::RawTrial;
use crate::utils::config::MIN_TRIAL_FIELDS;
use crate::utils::error::ParseError;
use log::debug;

/// Parse one data line into a trial
///
/// **Public** - main entry point for line parsing
///
/// Returns `Ok(None)` for lines with fewer than five fields (trailing blank
/// lines, truncated captures). Numeric parse failures are hard errors so a
/// corrupted capture never feeds garbage into the averages.
///
/// `line_no` is the 1-based position in the capture, used only for error
/// messages.
pub fn parse_trial_line(line: &str, line_no: usize) -> Result<Option<RawTrial>, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() < MIN_TRIAL_FIELDS {
        return Ok(None);
    }

    let kernel = fields[0].to_string();
    let problem_size = parse_u64(fields[1], "problem_size", line_no)?;
    let repetitions = parse_u64(fields[2], "repetitions", line_no)?;
    // fields[3] is the benchmark's own TotalOps column, not used downstream
    let elapsed_seconds = parse_f64(fields[4], "elapsed_seconds", line_no)?;

    Ok(Some(RawTrial {
        kernel,
        problem_size,
        repetitions,
        elapsed_seconds,
    }))
}

/// Parse a full stdout capture from one benchmark invocation
///
/// **Public** - used by the run and aggregate commands
///
/// Skips the single header line the benchmark prints, then feeds every
/// remaining line through [`parse_trial_line`].
pub fn parse_benchmark_output(output: &str) -> Result<Vec<RawTrial>, ParseError> {
    let mut trials = Vec::new();

    for (index, line) in output.lines().enumerate().skip(1) {
        if let Some(trial) = parse_trial_line(line, index + 1)? {
            trials.push(trial);
        }
    }

    debug!("Parsed {} trials from capture", trials.len());

    Ok(trials)
}

fn parse_u64(value: &str, field: &'static str, line_no: usize) -> Result<u64, ParseError> {
    value.parse::<u64>().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
    })
}

fn parse_f64(value: &str, field: &'static str, line_no: usize) -> Result<f64, ParseError> {
    value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trial_line_basic() {
        let trial = parse_trial_line("Triad, 2048, 5, 0.0012, 0.0009", 2)
            .unwrap()
            .unwrap();

        assert_eq!(trial.kernel, "Triad");
        assert_eq!(trial.problem_size, 2048);
        assert_eq!(trial.repetitions, 5);
        assert_eq!(trial.elapsed_seconds, 0.0009);
    }

    #[test]
    fn test_parse_trial_line_short_line_skipped() {
        let result = parse_trial_line("Copy, 1024, 10", 3).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_trial_line_empty_line_skipped() {
        assert!(parse_trial_line("", 7).unwrap().is_none());
    }

    #[test]
    fn test_parse_trial_line_bad_size_is_error() {
        let err = parse_trial_line("Copy, oops, 10, 10240, 0.001", 4).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 4"), "got: {msg}");
        assert!(msg.contains("problem_size"), "got: {msg}");
    }

    #[test]
    fn test_parse_trial_line_bad_time_is_error() {
        let err = parse_trial_line("Copy, 1024, 10, 10240, fast", 5).unwrap_err();
        assert!(err.to_string().contains("elapsed_seconds"));
    }

    #[test]
    fn test_parse_benchmark_output_skips_header() {
        let output = "Kernel, ProblemSize, RUNS, TotalOps, Time\n\
                      Copy, 1024, 10, 10240, 0.000100000\n\
                      Scale, 1024, 10, 10240, 0.000200000\n";

        let trials = parse_benchmark_output(output).unwrap();

        assert_eq!(trials.len(), 2);
        assert_eq!(trials[0].kernel, "Copy");
        assert_eq!(trials[1].kernel, "Scale");
    }

    #[test]
    fn test_parse_benchmark_output_tolerates_trailing_noise() {
        let output = "Kernel, ProblemSize, RUNS, TotalOps, Time\n\
                      Add, 512, 20, 10240, 0.000050000\n\
                      \n\
                      done\n";

        let trials = parse_benchmark_output(output).unwrap();
        assert_eq!(trials.len(), 1);
    }

    #[test]
    fn test_parse_benchmark_output_empty_is_empty() {
        assert!(parse_benchmark_output("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_benchmark_output_propagates_line_number() {
        let output = "Kernel, ProblemSize, RUNS, TotalOps, Time\n\
                      Copy, 1024, 10, 10240, 0.000100000\n\
                      Copy, 2O48, 10, 20480, 0.000200000\n";

        let err = parse_benchmark_output(output).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
