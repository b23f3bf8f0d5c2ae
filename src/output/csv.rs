//! CSV summary writer and reader.
//!
//! The CSV file is the sole interface to the downstream charting scripts,
//! which expect the exact header `Kernel,ProblemSize,AvgBandwidth_GBs,
//! AvgMFLOPS,AvgTime,TotalOps`, rows grouped by kernel and ascending by
//! problem size, bandwidth/MFLOPS to 4 decimal places and time to 6.

use crate::parser::schema::SummaryRow;
use crate::utils::config::RESULTS_HEADER;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render summary rows as the results CSV, including the header
///
/// **Public** - also used directly by tests and the summary printer
pub fn summary_to_csv(rows: &[SummaryRow]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(RESULTS_HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{},{},{:.4},{:.4},{:.6},{}\n",
            row.kernel,
            row.problem_size,
            row.bandwidth_gbs,
            row.mflops,
            row.avg_elapsed_seconds,
            row.total_operations
        ));
    }

    out
}

/// Write summary rows to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(rows: &[SummaryRow], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary CSV to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(summary_to_csv(rows).as_bytes())
        .map_err(OutputError::WriteFailed)?;

    info!("Summary written ({} rows)", rows.len());

    Ok(())
}

/// Read a results CSV back into summary rows
///
/// **Public** - backs the validate command and round-trip tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::MalformedResults` - Bad header or unparseable row
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<Vec<SummaryRow>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary CSV from: {}", input_path.display());

    let content = std::fs::read_to_string(input_path).map_err(OutputError::WriteFailed)?;
    let mut lines = content.lines();

    match lines.next() {
        Some(header) if header.trim() == RESULTS_HEADER => {}
        Some(header) => {
            return Err(OutputError::MalformedResults(format!(
                "unexpected header: {header:?}"
            )))
        }
        None => return Err(OutputError::MalformedResults("file is empty".to_string())),
    }

    let mut rows = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_summary_row(line, index + 2)?);
    }

    debug!("Loaded {} summary rows", rows.len());

    Ok(rows)
}

/// Parse one CSV data row
///
/// **Private** - internal helper for read_summary
fn parse_summary_row(line: &str, line_no: usize) -> Result<SummaryRow, OutputError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() != 6 {
        return Err(OutputError::MalformedResults(format!(
            "line {}: expected 6 fields, found {}",
            line_no,
            fields.len()
        )));
    }

    let numeric = |field: &str, name: &str| -> Result<f64, OutputError> {
        field.parse::<f64>().map_err(|_| {
            OutputError::MalformedResults(format!("line {line_no}: bad {name}: {field:?}"))
        })
    };
    let integer = |field: &str, name: &str| -> Result<u64, OutputError> {
        field.parse::<u64>().map_err(|_| {
            OutputError::MalformedResults(format!("line {line_no}: bad {name}: {field:?}"))
        })
    };

    Ok(SummaryRow {
        kernel: fields[0].to_string(),
        problem_size: integer(fields[1], "ProblemSize")?,
        bandwidth_gbs: numeric(fields[2], "AvgBandwidth_GBs")?,
        mflops: numeric(fields[3], "AvgMFLOPS")?,
        avg_elapsed_seconds: numeric(fields[4], "AvgTime")?,
        total_operations: integer(fields[5], "TotalOps")?,
    })
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
pub(crate) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories for an output file
///
/// **Private** - shared with the JSON writer
pub(crate) fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
