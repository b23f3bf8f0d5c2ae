//! Aggregate raw trials into one summary row per (kernel, problem size).
//!
//! Repeated benchmark invocations produce several trials per configuration;
//! this collapses them to a mean elapsed time plus derived bandwidth and
//! FLOP throughput. Pure function, no state survives a call.

use super::cost_model::{bytes_per_element, flops_per_element};
use crate::parser::schema::{RawTrial, SummaryRow};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

/// Accumulator for one (kernel, problem size) group
struct SampleGroup {
    /// Repetition count of the first trial seen for the group
    repetitions: u64,
    total_seconds: f64,
    count: usize,
}

/// Aggregate trials into summary rows
///
/// **Public** - main entry point for aggregation
///
/// Grouping is order-independent; the output is ordered kernel-major by
/// first appearance and strictly ascending by problem size within a kernel,
/// the ordering the charting scripts rely on for monotonic series.
///
/// Trials within a group are expected to share a repetition count (they are
/// repeated runs of the identical configuration). A mismatch is logged and
/// the first-seen value kept, matching the historical behavior.
pub fn aggregate(trials: &[RawTrial]) -> Vec<SummaryRow> {
    debug!("Aggregating {} trials", trials.len());

    // kernel -> problem_size -> samples; BTreeMap gives ascending sizes
    let mut groups: HashMap<&str, BTreeMap<u64, SampleGroup>> = HashMap::new();
    let mut kernel_order: Vec<&str> = Vec::new();

    for trial in trials {
        let sizes = groups.entry(trial.kernel.as_str()).or_insert_with(|| {
            kernel_order.push(trial.kernel.as_str());
            BTreeMap::new()
        });

        let group = sizes.entry(trial.problem_size).or_insert(SampleGroup {
            repetitions: trial.repetitions,
            total_seconds: 0.0,
            count: 0,
        });

        if group.repetitions != trial.repetitions {
            warn!(
                "{} @ {}: repetition count {} differs from first-seen {}, keeping the first",
                trial.kernel, trial.problem_size, trial.repetitions, group.repetitions
            );
        }

        group.total_seconds += trial.elapsed_seconds;
        group.count += 1;
    }

    let mut rows = Vec::new();
    for kernel in kernel_order {
        for (&problem_size, group) in &groups[kernel] {
            rows.push(finalize_row(kernel, problem_size, group));
        }
    }

    debug!("Aggregated into {} summary rows", rows.len());

    rows
}

/// Turn one finished group into its summary row
///
/// **Private** - internal finalization
fn finalize_row(kernel: &str, problem_size: u64, group: &SampleGroup) -> SummaryRow {
    let avg_elapsed_seconds = group.total_seconds / group.count as f64;
    let total_operations = problem_size * group.repetitions;

    SummaryRow {
        kernel: kernel.to_string(),
        problem_size,
        avg_elapsed_seconds,
        total_operations,
        bandwidth_gbs: scaled_rate(
            total_operations,
            bytes_per_element(kernel),
            avg_elapsed_seconds,
            1e9,
        ),
        mflops: scaled_rate(
            total_operations,
            flops_per_element(kernel),
            avg_elapsed_seconds,
            1e6,
        ),
    }
}

/// (total_operations * cost / avg_seconds) / scale, or exactly 0 when the
/// kernel carries no cost for the metric
///
/// **Private** - shared by both derived metrics
fn scaled_rate(total_operations: u64, cost_per_element: u64, avg_seconds: f64, scale: f64) -> f64 {
    if cost_per_element == 0 {
        return 0.0;
    }

    let total = (total_operations * cost_per_element) as f64;
    (total / avg_seconds) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(kernel: &str, size: u64, reps: u64, secs: f64) -> RawTrial {
        RawTrial {
            kernel: kernel.to_string(),
            problem_size: size,
            repetitions: reps,
            elapsed_seconds: secs,
        }
    }

    #[test]
    fn test_copy_group_metrics() {
        let trials = vec![
            trial("Copy", 1000, 10, 0.001),
            trial("Copy", 1000, 10, 0.003),
        ];

        let rows = aggregate(&trials);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.kernel, "Copy");
        assert_eq!(row.problem_size, 1000);
        assert_eq!(row.total_operations, 10_000);
        assert!((row.avg_elapsed_seconds - 0.002).abs() < 1e-12);
        // (1000 * 10 * 16 / 0.002) / 1e9
        assert!((row.bandwidth_gbs - 0.08).abs() < 1e-9);
        assert_eq!(row.mflops, 0.0);
    }

    #[test]
    fn test_averaging_idempotence() {
        for n in [1, 2, 7, 50] {
            let trials: Vec<RawTrial> =
                (0..n).map(|_| trial("Triad", 4096, 5, 0.00042)).collect();

            let rows = aggregate(&trials);

            assert_eq!(rows.len(), 1);
            assert!((rows[0].avg_elapsed_seconds - 0.00042).abs() < 1e-15);
        }
    }

    #[test]
    fn test_sizes_ascend_within_kernel() {
        let trials = vec![
            trial("Scale", 4096, 5, 0.002),
            trial("Scale", 256, 80, 0.001),
            trial("Scale", 1024, 20, 0.0015),
        ];

        let rows = aggregate(&trials);

        let sizes: Vec<u64> = rows.iter().map(|r| r.problem_size).collect();
        assert_eq!(sizes, vec![256, 1024, 4096]);
    }

    #[test]
    fn test_kernels_keep_first_seen_order() {
        let trials = vec![
            trial("Triad", 256, 10, 0.001),
            trial("Copy", 256, 10, 0.001),
            trial("Triad", 512, 10, 0.002),
        ];

        let rows = aggregate(&trials);

        let kernels: Vec<&str> = rows.iter().map(|r| r.kernel.as_str()).collect();
        assert_eq!(kernels, vec!["Triad", "Triad", "Copy"]);
    }

    #[test]
    fn test_each_pair_yields_one_row() {
        let trials = vec![
            trial("Copy", 256, 10, 0.001),
            trial("Copy", 512, 10, 0.002),
            trial("Copy", 256, 10, 0.0012),
            trial("Add", 256, 10, 0.0015),
            trial("Copy", 512, 10, 0.0021),
        ];

        let rows = aggregate(&trials);

        assert_eq!(rows.len(), 3);
        let mut pairs: Vec<(String, u64)> = rows
            .iter()
            .map(|r| (r.kernel.clone(), r.problem_size))
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_zero_cost_kernels_never_nan() {
        // Tiny average time would blow up a naive ratio
        let trials = vec![trial("TriadComp", 1 << 20, 100, 1e-12)];

        let rows = aggregate(&trials);

        assert_eq!(rows[0].bandwidth_gbs, 0.0);
        assert!(rows[0].bandwidth_gbs.is_finite());
        assert!(rows[0].mflops > 0.0);

        let mem_only = aggregate(&[trial("TriadMem", 1 << 20, 100, 1e-12)]);
        assert_eq!(mem_only[0].mflops, 0.0);
        assert!(mem_only[0].mflops.is_finite());
    }

    #[test]
    fn test_unknown_kernel_row_preserved() {
        let rows = aggregate(&[trial("Daxpy", 1024, 10, 0.005)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bandwidth_gbs, 0.0);
        assert_eq!(rows[0].mflops, 0.0);
        assert!((rows[0].avg_elapsed_seconds - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_mismatched_repetitions_first_wins() {
        let trials = vec![
            trial("Add", 1024, 5, 0.001),
            trial("Add", 1024, 10, 0.003),
        ];

        let rows = aggregate(&trials);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_operations, 1024 * 5);
        assert!((rows[0].avg_elapsed_seconds - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }
}
