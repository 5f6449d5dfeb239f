//! Max-split tree construction.
//!
//! The tree for a sequence has the maximum as its root, the tree of
//! everything left of the maximum as its left child and the tree of
//! everything right of it as its right child. With equal maxima the first
//! occurrence is the split point. This is a max-priority Cartesian tree over
//! the sequence positions.

use clap::ValueEnum;
use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::SlotArena;
use crate::domain::node::TreeNode;

/// Algorithm used to construct the tree. Both produce the same shape.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStrategy {
    /// Split at the maximum and recurse on both halves, O(n²) worst case
    #[default]
    Recursive,
    /// Single left-to-right pass keeping the right spine on a stack, O(n)
    MonotonicStack,
}

/// Builds max-split trees from integer sequences.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    strategy: BuildStrategy,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: BuildStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Build the tree for `values`; an empty sequence yields no tree.
    #[instrument(level = "debug", skip(self, values), fields(len = values.len(), strategy = ?self.strategy))]
    pub fn build(&self, values: &[i64]) -> Option<TreeNode> {
        let tree = match self.strategy {
            BuildStrategy::Recursive => build_recursive(values).map(|node| *node),
            BuildStrategy::MonotonicStack => build_monotonic(values),
        };
        debug!(root = ?tree.as_ref().map(TreeNode::value), "tree built");
        tree
    }

    /// Like [`TreeBuilder::build`], treating an absent sequence as empty.
    pub fn build_from(&self, values: Option<&[i64]>) -> Option<TreeNode> {
        values.and_then(|v| self.build(v))
    }
}

fn build_recursive(values: &[i64]) -> Option<Box<TreeNode>> {
    let max = *values.iter().max()?;
    // position() returns the first match, max_by_key() would return the last
    let split = values.iter().position(|&v| v == max)?;
    let left = build_recursive(&values[..split]);
    let right = build_recursive(&values[split + 1..]);
    Some(Box::new(TreeNode::new(max, left, right)))
}

fn build_monotonic(values: &[i64]) -> Option<TreeNode> {
    let mut arena = SlotArena::with_capacity(values.len());
    // right spine of the tree built so far, root at the bottom
    let mut spine: Vec<Index> = Vec::with_capacity(values.len());

    for &value in values {
        let current = arena.insert(value);

        // strictly smaller only: an equal earlier value stays the ancestor
        let mut last_popped = None;
        while let Some(&top) = spine.last() {
            if !arena.get(top).is_some_and(|slot| slot.value < value) {
                break;
            }
            last_popped = spine.pop();
        }

        if let Some(slot) = arena.get_mut(current) {
            slot.left = last_popped;
        }
        if let Some(&parent) = spine.last() {
            if let Some(slot) = arena.get_mut(parent) {
                slot.right = Some(current);
            }
        }
        spine.push(current);
    }

    let root = *spine.first()?;
    arena.into_tree(root)
}
