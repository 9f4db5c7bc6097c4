//! The treelit Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. Trees are read as JSON, since turning source
//! text into trees belongs to the parser.

use crate::ast::{Metadata, Node};
use crate::bytes::to_bytes;
use crate::cli::args::{Command, TreelitArgs};
use crate::cli::output::{print_heading, OutputSink, StdoutSink};
use crate::config::{load_config, PrinterConfig};
use crate::errors::{print_error, AtLocation, CompileError, ErrorKind};
use crate::hex::{bin_to_hex, hex_to_bin};
use crate::literal::{canonicalize, canonicalize_tree};
use crate::printer::{print_compact, print_flat, tree_size, Printer};
use crate::source::read_file;
use clap::Parser;
use std::path::Path;
use std::process;

pub mod args;
pub mod output;

/// File name used in locations of command-line arguments.
const ARGS_FILE: &str = "<args>";

/// The main entry point for the CLI.
pub fn run() {
    let args = TreelitArgs::parse();
    let mut sink = StdoutSink;

    if let Err(e) = execute(args.command, &mut sink) {
        print_error(e);
        process::exit(1);
    }
}

/// Dispatches one subcommand, writing results to `sink`.
pub fn execute(command: Command, sink: &mut dyn OutputSink) -> Result<(), CompileError> {
    match command {
        Command::Print {
            file,
            metadata,
            compact,
            config,
        } => handle_print(&file, metadata, compact, config.as_deref(), sink),
        Command::Size { file } => {
            let tree = load_tree(&file)?;
            sink.emit(&tree_size(&tree).to_string());
            Ok(())
        }
        Command::Canon { literals } => handle_canon(&literals, sink),
        Command::Bytes { literal, min_len } => handle_bytes(&literal, min_len, sink),
        Command::CanonTree {
            file,
            trace,
            config,
        } => handle_canon_tree(&file, trace, config.as_deref(), sink),
        Command::Hex { text, decode } => handle_hex(&text, decode, sink),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn handle_print(
    file: &Path,
    metadata: bool,
    compact: bool,
    config: Option<&Path>,
    sink: &mut dyn OutputSink,
) -> Result<(), CompileError> {
    let tree = load_tree(file)?;
    if compact {
        sink.emit(&print_compact(&tree));
    } else {
        let printer = Printer::new(resolve_config(config)?);
        sink.emit(&printer.wrapped(&tree, metadata));
    }
    Ok(())
}

fn handle_canon(literals: &[String], sink: &mut dyn OutputSink) -> Result<(), CompileError> {
    for (i, literal) in literals.iter().enumerate() {
        let meta = Metadata::new(ARGS_FILE, 1, i + 1);
        let value = canonicalize(literal).at(&meta)?;
        sink.emit(value.as_str());
    }
    Ok(())
}

fn handle_bytes(literal: &str, min_len: usize, sink: &mut dyn OutputSink) -> Result<(), CompileError> {
    let meta = Metadata::new(ARGS_FILE, 1, 1);
    let value = canonicalize(literal).at(&meta)?;
    sink.emit(&print_flat(&to_bytes(&value, &meta, min_len)));
    Ok(())
}

fn handle_canon_tree(
    file: &Path,
    trace: bool,
    config: Option<&Path>,
    sink: &mut dyn OutputSink,
) -> Result<(), CompileError> {
    let printer = Printer::new(resolve_config(config)?);
    let tree = load_tree(file)?;
    let before = printer.wrapped(&tree, false);
    let after = printer.wrapped(&canonicalize_tree(tree), false);
    if trace {
        print_heading("canonicalization trace");
        sink.emit_diff(&before, &after);
    } else {
        sink.emit(&after);
    }
    Ok(())
}

fn handle_hex(text: &str, decode: bool, sink: &mut dyn OutputSink) -> Result<(), CompileError> {
    if decode {
        let meta = Metadata::new(ARGS_FILE, 1, 1);
        let bytes = hex_to_bin(text).at(&meta)?;
        let decoded = String::from_utf8(bytes).map_err(|e| {
            CompileError::at(
                format!(
                    "decoded bytes are not UTF-8 text (invalid byte at offset {})",
                    e.utf8_error().valid_up_to()
                ),
                meta.clone(),
            )
            .with_help("omit --decode to see the hex form, or decode only text bytes")
        })?;
        sink.emit(&decoded);
    } else {
        sink.emit(&bin_to_hex(text.as_bytes()));
    }
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

fn load_tree(file: &Path) -> Result<Node, CompileError> {
    let text = read_file(file)?;
    serde_json::from_str(&text).map_err(|e| {
        CompileError::new(
            ErrorKind::InvalidTree {
                message: e.to_string(),
            },
            Metadata::new(file.display().to_string(), e.line().max(1), e.column().max(1)),
        )
        .with_help("expected a JSON tree of {\"kind\": \"leaf\" | \"compound\", ...} objects")
    })
}

fn resolve_config(path: Option<&Path>) -> Result<PrinterConfig, CompileError> {
    match path {
        Some(path) => load_config(path).at(&Metadata::new(path.display().to_string(), 1, 1)),
        None => Ok(PrinterConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputBuffer;

    #[test]
    fn canon_reports_failing_argument_position() {
        let mut out = OutputBuffer::new();
        let err = execute(
            Command::Canon {
                literals: vec!["0x10".into(), "0xq".into()],
            },
            &mut out,
        )
        .unwrap_err();
        assert_eq!(out.as_str(), "16");
        assert_eq!(err.metadata, Metadata::new("<args>", 1, 2));
    }

    #[test]
    fn bytes_pads_to_min_len() {
        let mut out = OutputBuffer::new();
        execute(
            Command::Bytes {
                literal: "0x100".into(),
                min_len: 4,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(out.as_str(), "0 0 1 0");
    }

    #[test]
    fn hex_round_trip() {
        let mut out = OutputBuffer::new();
        execute(Command::Hex { text: "AB".into(), decode: false }, &mut out).unwrap();
        execute(Command::Hex { text: "4142".into(), decode: true }, &mut out).unwrap();
        assert_eq!(out.as_str(), "4142\nAB");
    }

    #[test]
    fn hex_decode_rejects_non_utf8() {
        let mut out = OutputBuffer::new();
        let err = execute(Command::Hex { text: "41ff".into(), decode: true }, &mut out).unwrap_err();
        assert!(out.as_str().is_empty());
        assert!(err.message().contains("offset 1"));
        assert_eq!(err.error_code(), "treelit::general");
    }
}
