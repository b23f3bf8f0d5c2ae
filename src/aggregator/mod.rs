//! Aggregation of raw trials into the summary table.
//!
//! This module transforms parsed benchmark trials into:
//! - One averaged row per (kernel, problem size) pair
//! - Derived bandwidth (GB/s) and throughput (MFLOPS) metrics
//!
//! The per-kernel cost tables live in `cost_model` and can grow without
//! touching the aggregation algorithm.

pub mod cost_model;
pub mod summary;

// Re-export main functions
pub use cost_model::{bytes_per_element, flops_per_element};
pub use summary::aggregate;
