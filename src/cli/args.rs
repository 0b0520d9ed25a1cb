//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::dot::RankDir;

/// Turn hierarchically coded work-breakdown CSV files into Graphviz DOT diagrams
#[derive(Parser, Debug)]
#[command(name = "wbs2dot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit a Graphviz DOT diagram for a WBS CSV file
    Dot {
        /// WBS CSV input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Write the DOT document to a file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,

        /// Layout direction
        #[arg(long, value_enum, default_value_t = RankDir::TopBottom)]
        rankdir: RankDir,

        /// Fail on missing ancestor codes instead of auto-creating them
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        strict: bool,
    },

    /// Print the parsed hierarchy as a tree
    Tree {
        /// WBS CSV input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Fail on missing ancestor codes instead of auto-creating them
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        strict: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
