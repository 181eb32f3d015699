//! Optimal tree solver
//!
//! Bottom-up interval DP over all [a, b] of the key range:
//!
//! ```text
//! cost(a, b) = 0                                         a >= b
//! cost(a, b) = min_j 1 + W[a, j-1]/W[a, b] * cost(a, j-1)
//!                      + W[j+1, b]/W[a, b] * cost(j+1, b)  otherwise
//! ```
//!
//! where `W[x, y]` is the total weight of keys x..=y. Time O(n³), space O(n²).

mod diagonal;

#[cfg(feature = "visualize")]
use serde::Serialize;
use tracing::{debug, info_span, trace};

use crate::table::{Interval, MemoTable};
use crate::tree::TreeShape;
use crate::weights::{Weight, WeightSequence};
use crate::SolveError;

/// Cost of choosing root `j` for `[a, b]` with total weight `summed > 0`.
pub(crate) fn candidate_cost<W: Weight>(
    weights: &WeightSequence<W>,
    summed: &W,
    a: usize,
    j: usize,
    b: usize,
    left_cost: W,
    right_cost: W,
) -> W {
    let left = if j > a {
        weights.mass(a, j - 1) / summed.clone() * left_cost
    } else {
        W::zero()
    };
    let right = if j < b {
        weights.mass(j + 1, b) / summed.clone() * right_cost
    } else {
        W::zero()
    };
    W::one() + left + right
}

/// Cost of an interval whose keys all weigh zero.
#[inline]
pub(crate) fn zero_mass_cost<W: Weight>(left_cost: W, right_cost: W) -> W {
    W::one() + left_cost + right_cost
}

/// What a solve materialises besides the optimal cost.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Rebuild the optimal tree shape
    pub reconstruct_tree: bool,

    /// Hand the completed memo table back to the caller
    pub retain_table: bool,
}

impl SolverConfig {
    /// Tree on, table off.
    pub fn new() -> Self {
        Self {
            reconstruct_tree: true,
            retain_table: false,
        }
    }

    /// Cost only: neither tree nor table.
    pub fn cost_only() -> Self {
        Self {
            reconstruct_tree: false,
            retain_table: false,
        }
    }

    /// Enable or disable tree reconstruction.
    pub fn with_tree(mut self, enabled: bool) -> Self {
        self.reconstruct_tree = enabled;
        self
    }

    /// Enable or disable returning the memo table.
    pub fn with_table(mut self, enabled: bool) -> Self {
        self.retain_table = enabled;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Work done by a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub struct SolveStats {
    /// Number of keys
    pub keys: usize,

    /// Memo entries written
    pub intervals: usize,

    /// Root candidates evaluated across all intervals
    pub root_candidates: usize,
}

/// Result of a solve.
#[derive(Debug, Clone)]
pub struct Solution<W> {
    /// Minimum cost over the whole key range
    pub cost: W,

    /// Optimal shape, when requested
    pub tree: Option<TreeShape>,

    /// Completed memo table, when requested
    pub table: Option<MemoTable<W>>,

    /// Work counters
    pub stats: SolveStats,
}

/// Computes minimum-cost search trees for weight sequences.
///
/// Holds no state between solves; every call builds and drops its own table.
#[derive(Debug, Clone, Default)]
pub struct OptimalTreeSolver {
    config: SolverConfig,
}

impl OptimalTreeSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Validate `weights` and solve.
    ///
    /// Fails with [`SolveError::InvalidInput`] before any table work when a
    /// weight is negative or not finite.
    pub fn solve<W: Weight>(&self, weights: &[W]) -> Result<Solution<W>, SolveError> {
        let sequence = WeightSequence::from_slice(weights)?;
        Ok(self.solve_sequence(&sequence))
    }

    /// Solve an already validated sequence.
    pub fn solve_sequence<W: Weight>(&self, weights: &WeightSequence<W>) -> Solution<W> {
        let span = info_span!("solve", keys = weights.len());
        let _enter = span.enter();

        let (table, stats) = build_table(weights);

        let all = Interval::covering(weights.len());
        let cost = all.map_or_else(W::zero, |all| table.settled_cost(all.start, all.end));
        let tree = if self.config.reconstruct_tree {
            match all {
                Some(all) => table.reconstruct(all.start, all.end),
                None => Some(TreeShape::Empty),
            }
        } else {
            None
        };

        debug!(
            cost = cost.approx_f64(),
            total_weight = weights.total().approx_f64(),
            intervals = stats.intervals,
            root_candidates = stats.root_candidates,
            "solve finished"
        );

        Solution {
            cost,
            tree,
            table: self.config.retain_table.then_some(table),
            stats,
        }
    }
}

/// Fill the memo table for `weights`, shortest intervals first.
///
/// Diagonal L is committed only after it is fully evaluated, and only then
/// is diagonal L + 1 started.
pub fn build_table<W: Weight>(weights: &WeightSequence<W>) -> (MemoTable<W>, SolveStats) {
    let n = weights.len();
    let mut table = MemoTable::new(n);
    let mut stats = SolveStats {
        keys: n,
        ..SolveStats::default()
    };

    for len in 1..=n {
        let solved = diagonal::solve_diagonal(weights, &table, len);
        trace!(len, intervals = solved.len(), "diagonal solved");

        for (a, (entry, inspected)) in solved.into_iter().enumerate() {
            table.record(a, a + len - 1, entry);
            stats.intervals += 1;
            stats.root_candidates += inspected;
        }
    }

    debug_assert!(table.is_complete());
    (table, stats)
}
