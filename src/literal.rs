//! # Literal Canonicalization
//!
//! Recognizes numeric-looking leaf text and normalizes it to a canonical
//! [`Decimal`]. Three literal forms are understood, checked in this order:
//!
//! - **Quoted byte strings**: `"AB"` or `'AB'`; each byte of the body is a
//!   base-256 digit, most significant first. An empty body is `0`.
//! - **Hex**: `0x` followed by lowercase hex digits.
//! - **Decimal**: ASCII digits only. Leading zeros are stripped.
//!
//! Failures are reported as [`LiteralError`] so callers can tell text that is
//! simply not a number apart from a malformed numeric literal.

use crate::ast::Node;
use crate::decimal::Decimal;
use thiserror::Error;

/// Legacy "not a number" marker returned by [`canonicalize_or_sentinel`].
pub const NOT_NUMERIC: &str = "";

const HEX_PREFIX: &str = "0x";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("invalid hex digit '{found}' at position {position} in '{literal}'")]
    InvalidHexDigit {
        literal: String,
        position: usize,
        found: char,
    },
    #[error("'{literal}' is not a numeric literal")]
    NotNumeric { literal: String },
    #[error("'{literal}' is outside the byte range 0..=255")]
    ByteOutOfRange { literal: String },
}

impl LiteralError {
    /// True when the text looked like a number but could not be read as one.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LiteralError::InvalidHexDigit { .. })
    }
}

// ============================================================================
// CANONICALIZATION
// ============================================================================

/// Converts literal text to its canonical decimal value.
///
/// # Examples
///
/// ```rust
/// use treelit::literal::canonicalize;
/// assert_eq!(canonicalize("0xff").unwrap().as_str(), "255");
/// assert_eq!(canonicalize("\"AB\"").unwrap().as_str(), "16706");
/// assert!(canonicalize("abc").is_err());
/// ```
pub fn canonicalize(raw: &str) -> Result<Decimal, LiteralError> {
    if raw.is_empty() {
        return Err(LiteralError::Empty);
    }
    if let Some(body) = quoted_body(raw) {
        return Ok(body
            .bytes()
            .fold(Decimal::zero(), |acc, b| acc.shift_add(256, b as u32)));
    }
    if let Some(digits) = raw.strip_prefix(HEX_PREFIX) {
        return parse_hex(raw, digits);
    }
    Decimal::parse(raw).map_err(|_| LiteralError::NotNumeric {
        literal: raw.to_string(),
    })
}

/// Canonicalizes, collapsing every failure to [`NOT_NUMERIC`].
pub fn canonicalize_or_sentinel(raw: &str) -> String {
    canonicalize(raw)
        .map(Decimal::into_string)
        .unwrap_or_else(|_| NOT_NUMERIC.to_string())
}

fn quoted_body(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        if raw.len() >= 2 && raw.starts_with(q) && raw.ends_with(q) {
            Some(&raw[1..raw.len() - 1])
        } else {
            None
        }
    })
}

fn parse_hex(raw: &str, digits: &str) -> Result<Decimal, LiteralError> {
    let mut value = Decimal::zero();
    for (offset, c) in digits.char_indices() {
        let digit = match c {
            '0'..='9' | 'a'..='f' => c.to_digit(16),
            _ => None,
        }
        .ok_or_else(|| LiteralError::InvalidHexDigit {
            literal: raw.to_string(),
            position: HEX_PREFIX.len() + offset,
            found: c,
        })?;
        value = value.shift_add(16, digit);
    }
    Ok(value)
}

// ============================================================================
// NODE HELPERS
// ============================================================================

/// True for leaves whose text canonicalizes successfully.
pub fn is_number_like(node: &Node) -> bool {
    match node {
        Node::Leaf { value, .. } => canonicalize(value).is_ok(),
        Node::Compound { .. } => false,
    }
}

/// Replaces a numeric leaf's text with its canonical value, keeping metadata.
///
/// Non-numeric leaves come back unchanged.
pub fn to_canonical_node(node: &Node) -> Node {
    match node {
        Node::Leaf { value, metadata } => match canonicalize(value) {
            Ok(decimal) => Node::leaf(decimal.into_string(), metadata.clone()),
            Err(_) => node.clone(),
        },
        Node::Compound { .. } => node.clone(),
    }
}

/// Canonicalizes a leaf; compound nodes pass through without recursion.
pub fn try_canonicalize(node: Node) -> Node {
    match node {
        Node::Leaf { .. } => to_canonical_node(&node),
        compound => compound,
    }
}

/// Canonicalizes every numeric leaf in a tree.
pub fn canonicalize_tree(node: Node) -> Node {
    node.map_leaves(&mut try_canonicalize)
}
