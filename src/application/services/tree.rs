//! Tree analysis service
//!
//! Validates an input sequence against the configured limits, builds the
//! tree and derives every view a caller may want to serialise.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    self, has_duplicates, parse_sequence, TraversalOrder, TreeBuilder, TreeNode, TreeStats,
};
use crate::infrastructure::traits::FileSystem;

/// Everything derived from one input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub input: Vec<i64>,
    pub root: Option<i64>,
    pub in_order: Vec<i64>,
    pub pre_order: Vec<i64>,
    pub post_order: Vec<i64>,
    pub level_order: Vec<i64>,
    pub leaves: Vec<i64>,
    pub height: usize,
    pub node_count: usize,
    pub rendering: String,
}

/// Service for building and analysing max-split trees.
pub struct TreeService {
    settings: Arc<Settings>,
    fs: Arc<dyn FileSystem>,
}

impl TreeService {
    pub fn new(settings: Arc<Settings>, fs: Arc<dyn FileSystem>) -> Self {
        Self { settings, fs }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read and parse a sequence file.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<i64>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read sequence", path)?;
        Ok(parse_sequence(&content)?)
    }

    /// Build the tree for `values` after checking the input limits.
    ///
    /// Returns `Ok(None)` only for an empty sequence with `allow_empty` set.
    #[instrument(level = "debug", skip(self, values), fields(len = values.len()))]
    pub fn build(&self, values: &[i64]) -> ApplicationResult<Option<TreeNode>> {
        self.validate(values)?;
        let builder = TreeBuilder::with_strategy(self.settings.build.strategy);
        Ok(builder.build(values))
    }

    pub fn analyze(&self, values: &[i64]) -> ApplicationResult<TreeReport> {
        let tree = self.build(values)?;
        let root = tree.as_ref();
        let stats = TreeStats::of(root);

        let report = TreeReport {
            input: values.to_vec(),
            root: stats.root,
            in_order: domain::in_order(root),
            pre_order: domain::pre_order(root),
            post_order: domain::post_order(root),
            level_order: domain::level_order(root),
            leaves: domain::leaf_values(root),
            height: stats.height,
            node_count: stats.node_count,
            rendering: domain::render_with(root, self.settings.output.style),
        };
        debug!(
            "analyze: root={:?} height={} nodes={}",
            report.root, report.height, report.node_count
        );
        Ok(report)
    }

    pub fn analyze_text(&self, input: &str) -> ApplicationResult<TreeReport> {
        let values = parse_sequence(input)?;
        self.analyze(&values)
    }

    pub fn render(&self, values: &[i64]) -> ApplicationResult<String> {
        let tree = self.build(values)?;
        Ok(domain::render_with(tree.as_ref(), self.settings.output.style))
    }

    pub fn traverse(&self, values: &[i64], order: TraversalOrder) -> ApplicationResult<Vec<i64>> {
        let tree = self.build(values)?;
        Ok(domain::traverse(tree.as_ref(), order))
    }

    fn validate(&self, values: &[i64]) -> ApplicationResult<()> {
        let limits = &self.settings.limits;
        if values.len() > limits.max_input_len {
            return Err(ApplicationError::InputTooLarge {
                len: values.len(),
                max: limits.max_input_len,
            });
        }
        if values.is_empty() && !limits.allow_empty {
            return Err(ApplicationError::EmptySequence);
        }
        if has_duplicates(values) {
            warn!("sequence contains duplicate values, first occurrence wins");
        }
        Ok(())
    }
}
