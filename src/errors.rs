//! treelit error handling
//!
//! Compile-time problems are values: a [`CompileError`] carries what went
//! wrong and the node location it belongs to. Nothing here prints on
//! construction; the caller decides how to display it.

use crate::ast::Metadata;
use crate::config::ConfigError;
use crate::decimal::DecimalError;
use crate::hex::HexError;
use crate::literal::LiteralError;
use miette::Diagnostic;
use std::fmt;

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub metadata: Metadata,
    pub help: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// A literal that could not be canonicalized.
    Literal(LiteralError),
    Arithmetic(DecimalError),
    Hex(HexError),
    Io { path: String, message: String },
    Config(ConfigError),
    InvalidTree { message: String },
    /// Free-form diagnostics raised by later compiler stages.
    General { message: String },
}

impl ErrorKind {
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Arithmetic(_) => "arithmetic",
            Self::Hex(_) => "hex",
            Self::Io { .. } => "io",
            Self::Config(_) => "config",
            Self::InvalidTree { .. } => "invalid_tree",
            Self::General { .. } => "general",
        }
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl CompileError {
    pub fn new(kind: ErrorKind, metadata: Metadata) -> Self {
        Self {
            kind,
            metadata,
            help: None,
        }
    }

    /// A general diagnostic at `metadata`, the replacement for report-and-throw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treelit::ast::Metadata;
    /// use treelit::errors::CompileError;
    /// let err = CompileError::at("Unknown operator", Metadata::new("a.se", 2, 4));
    /// assert_eq!(err.to_string(), "Error (file \"a.se\", line 2, char 4): Unknown operator");
    /// ```
    pub fn at(message: impl Into<String>, metadata: Metadata) -> Self {
        Self::new(
            ErrorKind::General {
                message: message.into(),
            },
            metadata,
        )
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn error_code(&self) -> String {
        format!("treelit::{}", self.kind.code_suffix())
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Literal(e) => e.to_string(),
            ErrorKind::Arithmetic(e) => e.to_string(),
            ErrorKind::Hex(e) => e.to_string(),
            ErrorKind::Io { path, message } => format!("cannot read '{}': {}", path, message),
            ErrorKind::Config(e) => e.to_string(),
            ErrorKind::InvalidTree { message } | ErrorKind::General { message } => message.clone(),
        }
    }
}

/// Lifts a module error into a [`CompileError`] at a given location.
pub trait AtLocation<T> {
    fn at(self, metadata: &Metadata) -> Result<T, CompileError>;
}

impl<T, E> AtLocation<T> for Result<T, E>
where
    E: Into<ErrorKind>,
{
    fn at(self, metadata: &Metadata) -> Result<T, CompileError> {
        self.map_err(|e| CompileError::new(e.into(), metadata.clone()))
    }
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}

impl From<DecimalError> for ErrorKind {
    fn from(e: DecimalError) -> Self {
        ErrorKind::Arithmetic(e)
    }
}

impl From<HexError> for ErrorKind {
    fn from(e: HexError) -> Self {
        ErrorKind::Hex(e)
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

// ============================================================================
// DISPLAY AND DIAGNOSTICS
// ============================================================================

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error (file \"{}\", line {}, char {}): {}",
            self.metadata.file,
            self.metadata.line,
            self.metadata.column,
            self.message()
        )
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Literal(e) => Some(e),
            ErrorKind::Arithmetic(e) => Some(e),
            ErrorKind::Hex(e) => Some(e),
            ErrorKind::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.error_code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Prints a CompileError with full miette diagnostics.
pub fn print_error(error: CompileError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
