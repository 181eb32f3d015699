//! In-order traversal with an explicit stack
//!
//! Stack depth: O(height)
//! No recursion, so degenerate chains do not grow the call stack

use super::TreeShape;

/// Iterator over the keys of a [`TreeShape`] in symmetric order.
#[derive(Debug)]
pub struct InOrder<'a> {
    /// Nodes whose left subtree is pending or done, top = next to yield
    stack: Vec<&'a TreeShape>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: &'a TreeShape) -> Self {
        let mut traversal = Self { stack: Vec::new() };
        traversal.descend_left(root);
        traversal
    }

    /// Push `node` and its chain of left descendants
    fn descend_left(&mut self, mut node: &'a TreeShape) {
        loop {
            match node {
                TreeShape::Empty => return,
                TreeShape::Leaf(_) => {
                    self.stack.push(node);
                    return;
                }
                TreeShape::Node { left, .. } => {
                    self.stack.push(node);
                    node = left.as_ref();
                }
            }
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.stack.pop()? {
            TreeShape::Leaf(key) => Some(*key),
            TreeShape::Node { root, right, .. } => {
                self.descend_left(right);
                Some(*root)
            }
            TreeShape::Empty => None,
        }
    }
}
