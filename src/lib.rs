//! # Optimal Weighted Binary Search Trees
//!
//! Given n keys in search order with access weights, find the binary search
//! tree over them with minimum expected cost, using O(n³)-time interval
//! dynamic programming and an O(n²) memo table.
//!
//! ## Core Algorithm
//!
//! 1. **Prefix sums**: interval weights in O(1), computed once
//! 2. **Diagonal sweep**: solve every interval [a, b], shortest first
//! 3. **Root scan**: minimise `1 + ratio_left * cost_left + ratio_right * cost_right`,
//!    lowest index wins ties
//! 4. **Reconstruction**: read the stored roots back into a tree shape
//!
//! Intervals whose keys all weigh zero fall back to the leftmost root with
//! unweighted child costs.
//!
//! ## Usage Example
//!
//! ```
//! use optbst::solve;
//!
//! let (cost, tree) = solve(&[0.1, 0.5, 0.4], true)?;
//! assert_eq!(cost, 1.0);
//! assert_eq!(tree.map(|t| t.to_string()), Some("(1, (0,), (2,))".to_string()));
//! # Ok::<(), optbst::SolveError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod analysis; // Closed-form work counts
pub mod record;   // Java toString record decoding
pub mod solver;   // Interval DP
pub mod table;    // Memo table and intervals
pub mod tree;     // Tree shapes and traversal
pub mod weights;  // Numeric contract and weight sequences

// Re-exports for convenience
pub use solver::{OptimalTreeSolver, Solution, SolveStats, SolverConfig};
pub use table::{Interval, MemoEntry, MemoTable};
pub use tree::TreeShape;
pub use weights::{Weight, WeightSequence};

use thiserror::Error;

/// Errors that can occur when solving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A weight was negative or not a finite number, or the running total
    /// of the weights overflowed
    #[error("invalid weight {value} at index {index}: weights must be non-negative with a finite total")]
    InvalidInput {
        /// Position of the first offending weight
        index: usize,
        /// Debug rendering of the offending weight
        value: String,
    },
}

/// Minimum cost for `weights` and, if `want_tree`, the tree achieving it.
///
/// Shorthand for [`OptimalTreeSolver`] without a retained table.
pub fn solve<W: Weight>(weights: &[W], want_tree: bool) -> Result<(W, Option<TreeShape>), SolveError> {
    let solver = OptimalTreeSolver::new(SolverConfig::new().with_tree(want_tree));
    let solution = solver.solve(weights)?;
    Ok((solution.cost, solution.tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_is_a_leaf() {
        let (cost, tree) = solve(&[3.5], true).unwrap();
        assert_eq!(cost, 0.0);
        assert_eq!(tree, Some(TreeShape::Leaf(0)));
    }

    #[test]
    fn test_without_tree() {
        let (cost, tree) = solve(&[1.0, 1.0], false).unwrap();
        assert_eq!(cost, 1.0);
        assert!(tree.is_none());
    }

    #[test]
    fn test_error_message() {
        let err = solve(&[1.0, f64::NAN], true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid weight NaN at index 1: weights must be non-negative with a finite total"
        );
    }
}
