//! Max-split binary trees over integer sequences.
//!
//! A sequence is turned into a tree whose root is the maximum, whose left
//! subtree is built from the values before it and whose right subtree from
//! the values after it. The [`domain`] layer holds construction, analysis and
//! rendering; [`application`] adds input policy and reporting on top.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
