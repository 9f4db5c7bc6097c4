//! Defines the command-line arguments and subcommands for the treelit CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Largest accepted `--min-len`, in bytes.
pub const MAX_MIN_LEN: u64 = 4096;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "treelit",
    version,
    about = "Canonicalize literals and pretty-print program trees."
)]
pub struct TreelitArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pretty-print a JSON-encoded program tree.
    Print {
        /// The path to the JSON tree file.
        #[arg(required = true)]
        file: PathBuf,
        /// Prefix every form with its file, line and column.
        #[arg(long)]
        metadata: bool,
        /// Print the whole tree on one line.
        #[arg(long, conflicts_with = "metadata")]
        compact: bool,
        /// YAML file overriding width, indent or block operator.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Count the leaves of a tree.
    Size {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Canonicalize literals given on the command line.
    Canon {
        #[arg(required = true)]
        literals: Vec<String>,
    },
    /// Encode a literal as big-endian bytes.
    Bytes {
        #[arg(required = true)]
        literal: String,
        /// Pad the encoding to at least this many bytes.
        #[arg(
            long,
            default_value_t = 0,
            value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_MIN_LEN)
        )]
        min_len: usize,
    },
    /// Canonicalize every numeric leaf of a tree and print the result.
    CanonTree {
        #[arg(required = true)]
        file: PathBuf,
        /// Show a line diff between the original and canonical renderings.
        #[arg(long)]
        trace: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Convert text to lowercase hex, or back with --decode.
    Hex {
        #[arg(required = true)]
        text: String,
        #[arg(long)]
        decode: bool,
    },
}
