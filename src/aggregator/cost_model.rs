//! Per-kernel cost model: bytes moved and FLOPs performed per element.
//!
//! These tables are policy data, not behavior. Copy and Scale stream one
//! load and one store of f64 per element (16 bytes); Add, Triad, and the
//! memory-only Triad variant stream two loads and one store (24 bytes).
//! TriadComp touches no arrays, so it carries no bandwidth cost; Copy and
//! TriadMem perform no arithmetic, so they carry no FLOP cost. Kernels
//! missing from a table cost 0 for that metric.

/// Bytes of memory traffic per element, keyed by kernel name
pub const BYTES_PER_ELEMENT: &[(&str, u64)] = &[
    ("Copy", 16),
    ("Scale", 16),
    ("Add", 24),
    ("Triad", 24),
    ("TriadMem", 24),
];

/// Floating-point operations per element, keyed by kernel name
pub const FLOPS_PER_ELEMENT: &[(&str, u64)] = &[
    ("Scale", 1),
    ("Add", 1),
    ("Triad", 2),
    ("TriadComp", 2),
];

/// Bytes of memory traffic one element of `kernel` costs (0 if unlisted)
pub fn bytes_per_element(kernel: &str) -> u64 {
    lookup(BYTES_PER_ELEMENT, kernel)
}

/// FLOPs one element of `kernel` costs (0 if unlisted)
pub fn flops_per_element(kernel: &str) -> u64 {
    lookup(FLOPS_PER_ELEMENT, kernel)
}

fn lookup(table: &[(&str, u64)], kernel: &str) -> u64 {
    table
        .iter()
        .find(|(name, _)| *name == kernel)
        .map(|(_, cost)| *cost)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_kernel_bytes() {
        assert_eq!(bytes_per_element("Copy"), 16);
        assert_eq!(bytes_per_element("Scale"), 16);
        assert_eq!(bytes_per_element("Add"), 24);
        assert_eq!(bytes_per_element("Triad"), 24);
        assert_eq!(bytes_per_element("TriadMem"), 24);
    }

    #[test]
    fn test_stream_kernel_flops() {
        assert_eq!(flops_per_element("Scale"), 1);
        assert_eq!(flops_per_element("Add"), 1);
        assert_eq!(flops_per_element("Triad"), 2);
        assert_eq!(flops_per_element("TriadComp"), 2);
    }

    #[test]
    fn test_unlisted_kernels_cost_zero() {
        assert_eq!(bytes_per_element("TriadComp"), 0);
        assert_eq!(flops_per_element("Copy"), 0);
        assert_eq!(flops_per_element("TriadMem"), 0);
        assert_eq!(bytes_per_element("Daxpy"), 0);
        assert_eq!(flops_per_element("Daxpy"), 0);
    }
}
