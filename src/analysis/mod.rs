//! Closed-form work counts for the interval DP
//!
//! For n keys with positive weights a full solve writes `sets_to_inspect(n)`
//! memo entries and evaluates `expected_runtime(n)` root candidates.

/// Number of non-empty intervals of `n` keys: Σ_{s=1..n} (n − s + 1).
pub fn sets_to_inspect(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Root candidates evaluated over all intervals: (n³ + 3n² + 2n) / 6.
///
/// An interval of length s is visited n − s + 1 times with s roots each.
pub fn expected_runtime(n: usize) -> usize {
    n * (n + 1) * (n + 2) / 6
}

/// Bytes held by a memo table with `entry_bytes` per entry, including the
/// write-once bitmap.
pub fn table_footprint(n: usize, entry_bytes: usize) -> usize {
    let entries = sets_to_inspect(n);
    entries * entry_bytes + entries.div_ceil(8)
}
