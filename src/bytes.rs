//! Big-endian byte encoding of canonical values.
//!
//! Produces byte-valued leaves for a lower-level emitter, padded to a caller
//! chosen minimum width. At least one byte is always emitted.

use crate::ast::{Metadata, Node};
use crate::decimal::Decimal;
use crate::literal::{canonicalize, LiteralError};
use std::num::NonZeroU32;

const BYTE_BASE: u32 = 256;
const BASE: NonZeroU32 = match NonZeroU32::new(BYTE_BASE) {
    Some(base) => base,
    None => panic!("byte base must be non-zero"),
};

/// Encodes `value` as byte leaves, most significant byte first.
///
/// # Examples
///
/// ```rust
/// use treelit::ast::Metadata;
/// use treelit::bytes::to_bytes;
/// use treelit::decimal::Decimal;
/// let bytes = to_bytes(&Decimal::from(256), &Metadata::default(), 1);
/// let values: Vec<&str> = bytes.iter().map(|b| b.value()).collect();
/// assert_eq!(values, ["1", "0"]);
/// ```
pub fn to_bytes(value: &Decimal, metadata: &Metadata, min_len: usize) -> Vec<Node> {
    let mut bytes = Vec::new();
    let mut rest = value.clone();
    loop {
        let (quotient, byte) = rest.div_rem_small(BASE);
        bytes.push(Node::leaf(byte.to_string(), metadata.clone()));
        rest = quotient;
        if rest.is_zero() && bytes.len() >= min_len {
            break;
        }
    }
    bytes.reverse();
    bytes
}

/// Reassembles a big-endian run of byte leaves into one value.
///
/// Every leaf must canonicalize to a value in `0..=255`.
pub fn from_bytes(bytes: &[Node]) -> Result<Decimal, LiteralError> {
    bytes.iter().try_fold(Decimal::zero(), |acc, node| {
        let byte = canonicalize(node.value())?;
        match byte.to_u64() {
            Some(b) if b < BYTE_BASE as u64 => Ok(acc.shift_add(BYTE_BASE, b as u32)),
            _ => Err(LiteralError::ByteOutOfRange {
                literal: node.value().to_string(),
            }),
        }
    })
}
