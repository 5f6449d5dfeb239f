//! Text renderings of a tree for human consumption.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::TreeNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// Rotated 90°: right subtree above the node, left subtree below
    #[default]
    Rotated,
    /// Top-down outline with `L:`/`R:` labelled children
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Rotated rendering, one node per line.
///
/// ```text
/// ┌── 5
/// │   └── 0
/// 6
/// │       ┌── 1
/// │   ┌── 2
/// └── 3
/// ```
#[instrument(level = "debug", skip(root))]
pub fn render(root: Option<&TreeNode>) -> String {
    let mut out = String::new();
    if let Some(node) = root {
        if let Some(right) = node.right() {
            render_branch(right, "", Side::Right, &mut out);
        }
        out.push_str(&format!("{}\n", node.value()));
        if let Some(left) = node.left() {
            render_branch(left, "", Side::Left, &mut out);
        }
    }
    out
}

fn render_branch(node: &TreeNode, prefix: &str, side: Side, out: &mut String) {
    // the bar runs from this node's connector towards its parent
    let (above, below, connector) = match side {
        Side::Right => ("    ", "│   ", "┌── "),
        Side::Left => ("│   ", "    ", "└── "),
    };

    if let Some(right) = node.right() {
        render_branch(right, &format!("{prefix}{above}"), Side::Right, out);
    }
    out.push_str(&format!("{prefix}{connector}{}\n", node.value()));
    if let Some(left) = node.left() {
        render_branch(left, &format!("{prefix}{below}"), Side::Left, out);
    }
}

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for TreeNode {
    fn to_term_tree(&self) -> Tree<String> {
        outline_node(self, None)
    }
}

fn outline_node(node: &TreeNode, label: Option<&str>) -> Tree<String> {
    let text = match label {
        Some(label) => format!("{}: {}", label, node.value()),
        None => node.value().to_string(),
    };
    let mut tree = Tree::new(text);
    if let Some(left) = node.left() {
        tree.push(outline_node(left, Some("L")));
    }
    if let Some(right) = node.right() {
        tree.push(outline_node(right, Some("R")));
    }
    tree
}

/// Top-down rendering through `termtree`.
pub fn render_outline(root: Option<&TreeNode>) -> String {
    root.map(|node| node.to_term_tree().to_string())
        .unwrap_or_default()
}

pub fn render_with(root: Option<&TreeNode>, style: RenderStyle) -> String {
    match style {
        RenderStyle::Rotated => render(root),
        RenderStyle::Outline => render_outline(root),
    }
}
