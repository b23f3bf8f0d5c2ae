//! JSON run report writer.
//!
//! Optional sidecar to the CSV: the same rows wrapped in a versioned,
//! timestamped envelope for archival and tooling.

use super::csv::{create_parent_dirs, validate_output_path};
use crate::parser::schema::RunReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a run report to a JSON file, pretty printed
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &RunReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing run report to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a run report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<RunReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading run report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: RunReport = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} rows",
        report.version,
        report.rows.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::SummaryRow;
    use tempfile::NamedTempFile;

    fn create_test_report() -> RunReport {
        RunReport::new(
            "./stream",
            5,
            vec![SummaryRow {
                kernel: "Triad".to_string(),
                problem_size: 2048,
                avg_elapsed_seconds: 0.0009,
                total_operations: 10_240,
                bandwidth_gbs: 0.2731,
                mflops: 22.7556,
            }],
        )
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.executable, "./stream");
        assert_eq!(loaded.num_runs, 5);
        assert_eq!(loaded.rows.len(), 1);
        assert_eq!(loaded.rows[0].kernel, "Triad");
    }

    #[test]
    fn test_report_carries_timestamp() {
        let report = create_test_report();
        assert!(!report.generated_at.is_empty());
    }
}
