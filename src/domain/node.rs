//! Binary tree node with exclusively owned children.

use std::fmt;

/// One node of a max-split binary tree.
///
/// Each child is owned by exactly one parent, so the structure is always a
/// tree. Nodes are built once by [`crate::domain::TreeBuilder`] and read
/// afterwards; there is no public way to mutate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    value: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub(crate) fn new(
        value: i64,
        left: Option<Box<TreeNode>>,
        right: Option<Box<TreeNode>>,
    ) -> Self {
        Self { value, left, right }
    }

    /// Node without children.
    #[cfg(test)]
    pub(crate) fn leaf(value: i64) -> Self {
        Self::new(value, None, None)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
