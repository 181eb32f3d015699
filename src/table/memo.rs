//! Triangular memo table
//!
//! One entry per non-empty interval [a, b] of an n-key sequence,
//! n(n+1)/2 entries in row-major triangular order.
//! Entries are written exactly once; a bitmap records which are settled.

use bitvec::prelude::*;

use super::Interval;
use crate::tree::TreeShape;
use crate::weights::Weight;

/// Optimal solution of one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoEntry<W> {
    /// Minimum cost over all roots of the interval
    pub cost: W,

    /// Smallest root index achieving `cost`
    pub root: usize,
}

impl<W> MemoEntry<W> {
    /// Create an entry.
    pub fn new(cost: W, root: usize) -> Self {
        Self { cost, root }
    }
}

/// Memoized interval solutions for a single weight sequence.
///
/// Space: O(n²) entries plus one bit per entry.
#[derive(Debug, Clone)]
pub struct MemoTable<W> {
    keys: usize,
    entries: Vec<MemoEntry<W>>,

    /// Write-once markers (1 bit per entry)
    settled: BitVec,
}

impl<W: Weight> MemoTable<W> {
    /// Allocate an unsettled table for `keys` keys.
    pub(crate) fn new(keys: usize) -> Self {
        let size = keys * (keys + 1) / 2;
        let mut entries = Vec::with_capacity(size);
        for a in 0..keys {
            for _ in a..keys {
                entries.push(MemoEntry::new(W::zero(), a));
            }
        }

        Self {
            keys,
            entries,
            settled: bitvec![0; size],
        }
    }

    /// Position of `[a, b]` in the triangular layout.
    ///
    /// Row `a` starts after rows `0..a`, which hold `n + (n-1) + ... + (n-a+1)`
    /// entries.
    #[inline]
    fn index(&self, a: usize, b: usize) -> usize {
        debug_assert!(a <= b && b < self.keys, "interval [{a}, {b}] out of range");
        a * (2 * self.keys - a + 1) / 2 + (b - a)
    }

    #[inline]
    fn in_range(&self, a: usize, b: usize) -> bool {
        a <= b && b < self.keys
    }

    /// Store the solution of `[a, b]`.
    pub(crate) fn record(&mut self, a: usize, b: usize, entry: MemoEntry<W>) {
        let idx = self.index(a, b);
        debug_assert!(!self.settled[idx], "interval [{a}, {b}] written twice");
        self.entries[idx] = entry;
        self.settled.set(idx, true);
    }

    /// Cost of `[a, b]` during table construction; zero for empty intervals.
    ///
    /// Callers only ask for intervals shorter than the one being solved, which
    /// are settled by then.
    #[inline]
    pub(crate) fn settled_cost(&self, a: usize, b: usize) -> W {
        if a > b {
            return W::zero();
        }
        let idx = self.index(a, b);
        debug_assert!(self.settled[idx], "interval [{a}, {b}] read before it was solved");
        self.entries[idx].cost.clone()
    }

    /// Number of interval entries, n(n+1)/2.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries (zero keys).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every interval has been solved.
    pub fn is_complete(&self) -> bool {
        self.settled.all()
    }

    /// Settled entry for `[a, b]`, if any.
    pub fn entry(&self, a: usize, b: usize) -> Option<&MemoEntry<W>> {
        if !self.in_range(a, b) {
            return None;
        }
        let idx = self.index(a, b);
        self.settled[idx].then(|| &self.entries[idx])
    }

    /// Optimal cost of `[a, b]`.
    ///
    /// Empty intervals (`a > b`) cost zero. Returns `None` for intervals
    /// reaching past the last key or not solved yet.
    pub fn cost(&self, a: usize, b: usize) -> Option<W> {
        if a > b {
            return Some(W::zero());
        }
        self.entry(a, b).map(|e| e.cost.clone())
    }

    /// Chosen root of `[a, b]`.
    pub fn best_root(&self, a: usize, b: usize) -> Option<usize> {
        self.entry(a, b).map(|e| e.root)
    }

    /// Settled entries with their intervals, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Interval, &MemoEntry<W>)> + '_ {
        let keys = self.keys;
        (0..keys)
            .flat_map(move |a| (a..keys).map(move |b| Interval::new(a, b)))
            .zip(self.entries.iter().zip(self.settled.iter().by_vals()))
            .filter_map(|(interval, (entry, settled))| settled.then_some((interval, entry)))
    }

    /// Rebuild the optimal tree over `[a, b]` from the stored roots.
    ///
    /// Pure lookup: no cost is recomputed. Returns [`TreeShape::Empty`] for
    /// `a > b`, and `None` when `b` is not a key index of this table or a
    /// needed interval has not been solved.
    pub fn reconstruct(&self, a: usize, b: usize) -> Option<TreeShape> {
        if a > b {
            return Some(TreeShape::Empty);
        }
        self.shape_of(Interval::new(a, b))
    }

    fn shape_of(&self, interval: Interval) -> Option<TreeShape> {
        let root = self.entry(interval.start, interval.end)?.root;
        let (left, right) = interval.split_at(root);

        let left = match left {
            Some(sub) => self.shape_of(sub)?,
            None => TreeShape::Empty,
        };
        let right = match right {
            Some(sub) => self.shape_of(sub)?,
            None => TreeShape::Empty,
        };

        Some(TreeShape::from_parts(root, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_table() -> MemoTable<f64> {
        // Roots hand-picked for a 3-key table
        let mut table = MemoTable::new(3);
        table.record(0, 0, MemoEntry::new(0.0, 0));
        table.record(1, 1, MemoEntry::new(0.0, 1));
        table.record(2, 2, MemoEntry::new(0.0, 2));
        table.record(0, 1, MemoEntry::new(1.0, 1));
        table.record(1, 2, MemoEntry::new(1.0, 1));
        table.record(0, 2, MemoEntry::new(1.5, 2));
        table
    }

    #[test]
    fn test_triangular_layout_is_dense() {
        let table = MemoTable::<f64>::new(5);
        assert_eq!(table.len(), 15);

        let mut seen = Vec::new();
        for a in 0..5 {
            for b in a..5 {
                seen.push(table.index(a, b));
            }
        }
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_before_and_after_record() {
        let mut table = MemoTable::<f64>::new(2);
        assert_eq!(table.entry(0, 1), None);
        assert_eq!(table.cost(1, 0), Some(0.0));
        assert!(!table.is_complete());

        table.record(0, 1, MemoEntry::new(1.0, 0));
        assert_eq!(table.best_root(0, 1), Some(0));
        assert_eq!(table.cost(0, 1), Some(1.0));
        assert_eq!(table.entry(0, 2), None);
    }

    #[test]
    fn test_reconstruct_follows_roots() {
        let table = filled_table();
        assert!(table.is_complete());

        let tree = table.reconstruct(0, 2).unwrap();
        assert_eq!(tree.to_string(), "(2, (1, (0,), ()), ())");
        assert_eq!(table.reconstruct(1, 1), Some(TreeShape::Leaf(1)));
        assert_eq!(table.reconstruct(2, 1), Some(TreeShape::Empty));
    }

    #[test]
    fn test_iter_yields_settled_only() {
        let mut table = MemoTable::<f64>::new(3);
        table.record(1, 2, MemoEntry::new(1.0, 1));
        let items: Vec<_> = table.iter().map(|(i, e)| (i, e.root)).collect();
        assert_eq!(items, vec![(Interval::new(1, 2), 1)]);

        assert_eq!(filled_table().iter().count(), 6);
    }

    #[test]
    fn test_reconstruct_out_of_range_is_none() {
        let table = filled_table();
        assert_eq!(table.reconstruct(0, 3), None);
        assert_eq!(table.reconstruct(5, 9), None);
        assert_eq!(table.reconstruct(9, 5), Some(TreeShape::Empty));
    }

    #[test]
    fn test_reconstruct_unsolved_is_none() {
        let mut table = MemoTable::<f64>::new(3);
        table.record(0, 2, MemoEntry::new(1.0, 1));
        // Root 1 needs [0] and [2], which are still unsettled
        assert_eq!(table.reconstruct(0, 2), None);

        table.record(0, 0, MemoEntry::new(0.0, 0));
        table.record(2, 2, MemoEntry::new(0.0, 2));
        assert_eq!(table.reconstruct(0, 2).unwrap().to_string(), "(1, (0,), (2,))");
    }
}
