//! Conversion between raw bytes and lowercase hex text.

use thiserror::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex digit '{found}' at position {position}")]
pub struct HexError {
    pub position: usize,
    pub found: char,
}

/// Encodes bytes as two lowercase hex digits each.
pub fn bin_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decodes pairs of lowercase hex digits. A dangling final digit is ignored.
pub fn hex_to_bin(text: &str) -> Result<Vec<u8>, HexError> {
    let digits = text
        .char_indices()
        .map(|(position, found)| {
            HEX_DIGITS
                .iter()
                .position(|&d| d as char == found)
                .map(|v| v as u8)
                .ok_or(HexError { position, found })
        })
        .collect::<Result<Vec<u8>, HexError>>()?;
    Ok(digits.chunks_exact(2).map(|pair| pair[0] << 4 | pair[1]).collect())
}
