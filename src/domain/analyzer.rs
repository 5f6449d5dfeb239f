//! Read-only views over a built tree.
//!
//! Every function takes `Option<&TreeNode>`; `None` is the empty tree and
//! yields the identity result (empty sequence, zero).

use std::collections::VecDeque;

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::node::TreeNode;

/// Node visiting order for [`traverse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    /// left, node, right
    #[default]
    In,
    /// node, left, right
    Pre,
    /// left, right, node
    Post,
    /// breadth-first, left before right
    Level,
}

/// Scalar facts about a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub root: Option<i64>,
    pub height: usize,
    pub node_count: usize,
    pub leaf_count: usize,
}

impl TreeStats {
    pub fn of(root: Option<&TreeNode>) -> Self {
        Self {
            root: root.map(TreeNode::value),
            height: height(root),
            node_count: count_nodes(root),
            leaf_count: leaf_values(root).len(),
        }
    }
}

pub fn in_order(root: Option<&TreeNode>) -> Vec<i64> {
    let mut out = Vec::new();
    collect_in_order(root, &mut out);
    out
}

fn collect_in_order(node: Option<&TreeNode>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_in_order(node.left(), out);
        out.push(node.value());
        collect_in_order(node.right(), out);
    }
}

pub fn pre_order(root: Option<&TreeNode>) -> Vec<i64> {
    let mut out = Vec::new();
    collect_pre_order(root, &mut out);
    out
}

fn collect_pre_order(node: Option<&TreeNode>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        out.push(node.value());
        collect_pre_order(node.left(), out);
        collect_pre_order(node.right(), out);
    }
}

pub fn post_order(root: Option<&TreeNode>) -> Vec<i64> {
    let mut out = Vec::new();
    collect_post_order(root, &mut out);
    out
}

fn collect_post_order(node: Option<&TreeNode>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_post_order(node.left(), out);
        collect_post_order(node.right(), out);
        out.push(node.value());
    }
}

/// Breadth-first traversal using a queue.
pub fn level_order(root: Option<&TreeNode>) -> Vec<i64> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(node.value());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    out
}

pub fn height(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

pub fn count_nodes(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count_nodes(node.left()) + count_nodes(node.right()),
    }
}

/// Values of childless nodes, left to right.
pub fn leaf_values(root: Option<&TreeNode>) -> Vec<i64> {
    match root {
        None => Vec::new(),
        Some(node) if node.is_leaf() => vec![node.value()],
        Some(node) => {
            let mut leaves = leaf_values(node.left());
            leaves.extend(leaf_values(node.right()));
            leaves
        }
    }
}

pub fn traverse(root: Option<&TreeNode>, order: TraversalOrder) -> Vec<i64> {
    match order {
        TraversalOrder::In => in_order(root),
        TraversalOrder::Pre => pre_order(root),
        TraversalOrder::Post => post_order(root),
        TraversalOrder::Level => level_order(root),
    }
}
