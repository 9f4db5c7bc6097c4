//! Handles all user-facing output for the CLI.
//!
//! Command handlers write through an [`OutputSink`], so the same code drives
//! the terminal and in-memory capture in tests.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and StdoutSink implementations
// ============================================================================

use difference::{Changeset, Difference};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Destination for command output.
pub trait OutputSink {
    fn emit(&mut self, text: &str);

    /// Emits a line diff between two renderings.
    fn emit_diff(&mut self, before: &str, after: &str) {
        let changeset = Changeset::new(before, after, "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(x) => self.emit(&prefix_lines(" ", x)),
                Difference::Add(x) => self.emit(&prefix_lines("+", x)),
                Difference::Rem(x) => self.emit(&prefix_lines("-", x)),
            }
        }
    }
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// StdoutSink: writes output to stdout, colouring diffs when the terminal allows.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }

    fn emit_diff(&mut self, before: &str, after: &str) {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        let changeset = Changeset::new(before, after, "\n");
        print_diff(&mut stdout, &changeset.diffs);
        let _ = stdout.reset();
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints a bold yellow section header to stderr.
pub fn print_heading(text: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stderr, "--- {} ---", text);
    let _ = stderr.reset();
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn prefix_lines(prefix: &str, text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(x) => {
                let _ = stdout.reset();
                let _ = writeln!(stdout, "{}", prefix_lines(" ", x));
            }
            Difference::Add(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                let _ = writeln!(stdout, "{}", prefix_lines("+", x));
            }
            Difference::Rem(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                let _ = writeln!(stdout, "{}", prefix_lines("-", x));
            }
        }
    }
}
