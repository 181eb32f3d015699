//! Validated weight sequence with cumulative sums
//!
//! Keys are identified by their position; insertion order is key order.
//! Interval masses are answered in O(1) from prefix sums computed once.

use super::Weight;
use crate::SolveError;

/// Ordered, validated key weights.
#[derive(Debug, Clone)]
pub struct WeightSequence<W> {
    weights: Vec<W>,

    /// `prefix[i]` = sum of `weights[..i]`, length n + 1
    prefix: Vec<W>,
}

impl<W: Weight> WeightSequence<W> {
    /// Validate `weights` and precompute prefix sums.
    ///
    /// Fails on the first weight that is negative (or not a finite number)
    /// before any further work is done. Also fails at the first key where the
    /// running total stops being finite, since interval masses and their
    /// ratios would no longer be defined.
    pub fn new(weights: Vec<W>) -> Result<Self, SolveError> {
        if let Some((index, value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_admissible())
        {
            return Err(SolveError::InvalidInput {
                index,
                value: format!("{value:?}"),
            });
        }

        let mut prefix = Vec::with_capacity(weights.len() + 1);
        let mut running = W::zero();
        prefix.push(running.clone());
        for (index, w) in weights.iter().enumerate() {
            running = running + w.clone();
            if !running.is_admissible() {
                return Err(SolveError::InvalidInput {
                    index,
                    value: format!("{w:?}"),
                });
            }
            prefix.push(running.clone());
        }

        Ok(Self { weights, prefix })
    }

    /// Copy `weights` into a validated sequence.
    pub fn from_slice(weights: &[W]) -> Result<Self, SolveError> {
        Self::new(weights.to_vec())
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether there are no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Total weight of keys in the closed range `[a, b]`; zero when `a > b`.
    ///
    /// # Panics
    /// Panics if `a <= b` and `b >= len()`.
    #[inline]
    pub fn mass(&self, a: usize, b: usize) -> W {
        if a > b {
            return W::zero();
        }
        self.prefix[b + 1].clone() - self.prefix[a].clone()
    }

    /// Total weight of all keys.
    pub fn total(&self) -> W {
        self.prefix[self.weights.len()].clone()
    }
}
