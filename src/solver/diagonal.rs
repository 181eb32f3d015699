//! Per-interval minimisation and diagonal sweeps
//!
//! Diagonal L = all intervals with L keys. Every interval on it reads only
//! entries from diagonals < L, so one diagonal can be evaluated in any order
//! (or in parallel) against a read-only table and committed afterwards.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{candidate_cost, zero_mass_cost};
use crate::table::{MemoEntry, MemoTable};
use crate::weights::{Weight, WeightSequence};

/// Best root of `[a, b]` plus the number of root candidates evaluated.
pub(super) fn solve_interval<W: Weight>(
    weights: &WeightSequence<W>,
    table: &MemoTable<W>,
    a: usize,
    b: usize,
) -> (MemoEntry<W>, usize) {
    if a == b {
        return (MemoEntry::new(W::zero(), a), 1);
    }

    let summed = weights.mass(a, b);
    if summed.is_zero() {
        // No mass to weight the subtrees by: leftmost root, unweighted sum
        let cost = zero_mass_cost(W::zero(), table.settled_cost(a + 1, b));
        return (MemoEntry::new(cost, a), 1);
    }

    let score = |j: usize| {
        let left = if j > a {
            table.settled_cost(a, j - 1)
        } else {
            W::zero()
        };
        let right = table.settled_cost(j + 1, b);
        candidate_cost(weights, &summed, a, j, b, left, right)
    };

    let mut best = MemoEntry::new(score(a), a);
    for j in a + 1..=b {
        let cost = score(j);
        // Strictly smaller only: ties keep the lower index
        if cost.total_order(&best.cost) == Ordering::Less {
            best = MemoEntry::new(cost, j);
        }
    }

    (best, b - a + 1)
}

/// Solve every interval with `len` keys, ordered by start index.
#[cfg(not(feature = "parallel"))]
pub(super) fn solve_diagonal<W: Weight>(
    weights: &WeightSequence<W>,
    table: &MemoTable<W>,
    len: usize,
) -> Vec<(MemoEntry<W>, usize)> {
    let starts = 0..=weights.len() - len;
    starts
        .map(|a| solve_interval(weights, table, a, a + len - 1))
        .collect()
}

/// Solve every interval with `len` keys, ordered by start index.
#[cfg(feature = "parallel")]
pub(super) fn solve_diagonal<W: Weight>(
    weights: &WeightSequence<W>,
    table: &MemoTable<W>,
    len: usize,
) -> Vec<(MemoEntry<W>, usize)> {
    let starts = 0..=weights.len() - len;
    starts
        .into_par_iter()
        .map(|a| solve_interval(weights, table, a, a + len - 1))
        .collect()
}
