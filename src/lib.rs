//! Literal canonicalization and diagnostic tree printing for a small
//! lisp-shaped language front end.

pub use crate::errors::{CompileError, ErrorKind};

pub mod ast;
pub mod bytes;
pub mod cli;
pub mod config;
pub mod context;
pub mod decimal;
pub mod errors;
pub mod hex;
pub mod literal;
pub mod printer;
pub mod source;
pub mod text;
