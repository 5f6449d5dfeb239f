//! Domain layer: tree construction and analysis
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod analyzer;
mod arena;
pub mod builder;
pub mod error;
pub mod node;
pub mod renderer;
pub mod sequence;

pub use analyzer::{
    count_nodes, height, in_order, leaf_values, level_order, post_order, pre_order, traverse,
    TraversalOrder, TreeStats,
};
pub use builder::{BuildStrategy, TreeBuilder};
pub use error::DomainError;
pub use node::TreeNode;
pub use renderer::{render, render_outline, render_with, RenderStyle, ToTermTree};
pub use sequence::{has_duplicates, parse_sequence};
