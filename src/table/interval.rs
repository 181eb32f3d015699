//! Subproblem identity
//!
//! Interval = closed key range [start, end]
//! Empty when start > end (cost 0, no root)
//! Splitting at root j gives [start, j-1] and [j+1, end]

use std::fmt;

#[cfg(feature = "visualize")]
use serde::Serialize;

/// Closed range of key indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub struct Interval {
    /// First key (inclusive)
    pub start: usize,

    /// Last key (inclusive)
    pub end: usize,
}

impl Interval {
    /// Create the interval `[start, end]`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Interval covering keys `0..n`, or `None` when `n == 0`.
    pub fn covering(n: usize) -> Option<Self> {
        n.checked_sub(1).map(|end| Self::new(0, end))
    }

    /// Single-key interval
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Sub-intervals left and right of `root`.
    ///
    /// Either side is `None` when it holds no keys.
    pub fn split_at(&self, root: usize) -> (Option<Interval>, Option<Interval>) {
        debug_assert!(self.contains(root), "root {root} outside {self}");

        let left = (root > self.start).then(|| Interval::new(self.start, root - 1));
        let right = (root < self.end).then(|| Interval::new(root + 1, self.end));
        (left, right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "[{}]", self.start)
        } else {
            write!(f, "[{}, {}]", self.start, self.end)
        }
    }
}
