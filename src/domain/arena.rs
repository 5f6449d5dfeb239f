use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::node::TreeNode;

/// Arena entry used while a tree is still being linked together.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub value: i64,
    /// Index of the left child in the arena, None if absent
    pub left: Option<Index>,
    /// Index of the right child in the arena, None if absent
    pub right: Option<Index>,
}

/// Index-linked scratch storage for tree construction.
///
/// Links are plain arena indices, so nodes can be re-parented cheaply while
/// building. Once the shape is final, [`SlotArena::into_tree`] moves the
/// nodes out into the owned [`TreeNode`] representation.
#[derive(Debug)]
pub(crate) struct SlotArena {
    arena: Arena<Slot>,
}

impl SlotArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, value: i64) -> Index {
        self.arena.insert(Slot {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn get(&self, idx: Index) -> Option<&Slot> {
        self.arena.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: Index) -> Option<&mut Slot> {
        self.arena.get_mut(idx)
    }

    /// Moves the subtree rooted at `root` out of the arena.
    ///
    /// Slots not reachable from `root` are dropped with the arena.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn into_tree(mut self, root: Index) -> Option<TreeNode> {
        self.take(root).map(|node| *node)
    }

    fn take(&mut self, idx: Index) -> Option<Box<TreeNode>> {
        let slot = self.arena.remove(idx)?;
        let left = slot.left.and_then(|l| self.take(l));
        let right = slot.right.and_then(|r| self.take(r));
        Some(Box::new(TreeNode::new(slot.value, left, right)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //    2
    //   / \
    //  1   3
    #[test]
    fn given_linked_slots_when_converting_then_builds_owned_tree() {
        let mut arena = SlotArena::with_capacity(3);
        let root = arena.insert(2);
        let left = arena.insert(1);
        let right = arena.insert(3);
        {
            let slot = arena.get_mut(root).unwrap();
            slot.left = Some(left);
            slot.right = Some(right);
        }
        assert_eq!(arena.get(left).map(|slot| slot.value), Some(1));

        let tree = arena.into_tree(root).unwrap();
        assert_eq!(tree.value(), 2);
        assert_eq!(tree.left().map(TreeNode::value), Some(1));
        assert_eq!(tree.right().map(TreeNode::value), Some(3));
    }

    #[test]
    fn given_unlinked_slot_when_converting_then_it_is_dropped() {
        let mut arena = SlotArena::with_capacity(2);
        let root = arena.insert(9);
        arena.insert(4);

        let tree = arena.into_tree(root).unwrap();
        assert!(tree.is_leaf());
    }
}
