//! Binary search tree shape over key indices
//!
//! A shape over [a, b] is empty (a > b), a leaf, or a root j with
//! left shape over [a, j-1] and right shape over [j+1, b].

use std::fmt;

#[cfg(feature = "visualize")]
use serde::Serialize;

use super::InOrder;
use crate::solver::{candidate_cost, zero_mass_cost};
use crate::weights::{Weight, WeightSequence};

/// Tree shape produced by reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub enum TreeShape {
    /// No keys
    Empty,

    /// Single key without children
    Leaf(usize),

    /// Root key with at least one non-empty child
    Node {
        /// Key stored at this node
        root: usize,
        /// Keys smaller than `root`
        left: Box<TreeShape>,
        /// Keys larger than `root`
        right: Box<TreeShape>,
    },
}

impl TreeShape {
    /// Join `root` with its subtrees, collapsing to a leaf when both are empty.
    pub fn from_parts(root: usize, left: TreeShape, right: TreeShape) -> Self {
        if left.is_empty() && right.is_empty() {
            TreeShape::Leaf(root)
        } else {
            TreeShape::Node {
                root,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
    }

    /// Whether this is the empty marker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, TreeShape::Empty)
    }

    /// Key at the top of the shape.
    pub fn root(&self) -> Option<usize> {
        match self {
            TreeShape::Empty => None,
            TreeShape::Leaf(key) => Some(*key),
            TreeShape::Node { root, .. } => Some(*root),
        }
    }

    /// Number of keys in the shape.
    pub fn len(&self) -> usize {
        match self {
            TreeShape::Empty => 0,
            TreeShape::Leaf(_) => 1,
            TreeShape::Node { left, right, .. } => 1 + left.len() + right.len(),
        }
    }

    /// Number of levels; 0 for the empty marker, 1 for a leaf.
    pub fn height(&self) -> usize {
        match self {
            TreeShape::Empty => 0,
            TreeShape::Leaf(_) => 1,
            TreeShape::Node { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Keys in symmetric order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Whether the in-order key sequence is exactly `0, 1, ..., n-1`.
    pub fn is_search_tree_over(&self, n: usize) -> bool {
        let mut expected = 0;
        for key in self.in_order() {
            if key != expected {
                return false;
            }
            expected += 1;
        }
        expected == n
    }

    /// Cost of this shape under `weights`, using the same recurrence the
    /// solver minimises.
    ///
    /// Returns `None` unless the shape covers a contiguous run of keys that
    /// all exist in `weights`.
    pub fn expected_cost<W: Weight>(&self, weights: &WeightSequence<W>) -> Option<W> {
        let mut keys = self.in_order();
        if let Some(first) = keys.next() {
            let mut last = first;
            for key in keys {
                if key != last + 1 {
                    return None;
                }
                last = key;
            }
            if last >= weights.len() {
                return None;
            }
        }
        Some(self.cost_over(weights).0)
    }

    /// Cost and covered key range of a shape known to be contiguous.
    fn cost_over<W: Weight>(&self, weights: &WeightSequence<W>) -> (W, Option<(usize, usize)>) {
        match self {
            TreeShape::Empty => (W::zero(), None),
            TreeShape::Leaf(key) => (W::zero(), Some((*key, *key))),
            TreeShape::Node { root, left, right } => {
                let (left_cost, left_span) = left.cost_over(weights);
                let (right_cost, right_span) = right.cost_over(weights);
                let a = left_span.map_or(*root, |(lo, _)| lo);
                let b = right_span.map_or(*root, |(_, hi)| hi);

                if a == b {
                    return (W::zero(), Some((a, b)));
                }

                let summed = weights.mass(a, b);
                let cost = if summed.is_zero() {
                    zero_mass_cost(left_cost, right_cost)
                } else {
                    candidate_cost(weights, &summed, a, *root, b, left_cost, right_cost)
                };
                (cost, Some((a, b)))
            }
        }
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeShape::Empty => write!(f, "()"),
            TreeShape::Leaf(key) => write!(f, "({key},)"),
            TreeShape::Node { root, left, right } => write!(f, "({root}, {left}, {right})"),
        }
    }
}
