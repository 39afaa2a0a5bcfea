//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Traversal;

/// Binary search tree teaching tool: build a tree from integers, show it and its traversals
#[derive(Parser, Debug)]
#[command(name = "bstview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the integers come from. Without `--file` or `--values` they are read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Record file: one value per line, first field is used
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "values")]
    pub file: Option<PathBuf>,

    /// Values typed inline, e.g. "5,3,8"
    #[arg(short = 'v', long)]
    pub values: Option<String>,

    /// Value separator (default: from config, ",")
    #[arg(long)]
    pub delimiter: Option<char>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the tree, draw it and print all traversals
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// Skip the tree drawing
        #[arg(long)]
        no_tree: bool,
    },

    /// Print a single traversal
    Traverse {
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = OrderArg::In)]
        order: OrderArg,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print node positions and edges for a renderer
    Layout {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = LayoutFormat::Text)]
        format: LayoutFormat,
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
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show the global config file location
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for Traversal {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Pre => Traversal::Pre,
            OrderArg::In => Traversal::In,
            OrderArg::Post => Traversal::Post,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Text,
    Toml,
}
