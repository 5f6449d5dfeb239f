//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;
use crate::domain::{BuildStrategy, RenderStyle, TraversalOrder};

/// Build max-split (Cartesian) binary trees from integer sequences
#[derive(Parser, Debug)]
#[command(name = "cartree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the sequence comes from and how the tree is built.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Sequence values (read from --file or stdin when omitted)
    #[arg(allow_negative_numbers = true, value_delimiter = ',')]
    pub values: Vec<i64>,

    /// File holding the sequence, e.g. "[3, 2, 1, 6, 0, 5]"
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "values")]
    pub file: Option<PathBuf>,

    /// Construction algorithm
    #[arg(long, value_enum)]
    pub strategy: Option<BuildStrategy>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the tree and print the full report
    Build {
        #[command(flatten)]
        input: InputArgs,
        /// Report format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Rendering style
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Print the tree shape only
    Render {
        #[command(flatten)]
        input: InputArgs,
        /// Rendering style
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Print one traversal, comma separated
    Traverse {
        #[command(flatten)]
        input: InputArgs,
        /// Visiting order
        #[arg(short, long, value_enum, default_value_t = TraversalOrder::In)]
        order: TraversalOrder,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}
