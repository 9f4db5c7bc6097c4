//! # Canonical Decimal Arithmetic
//!
//! Arbitrary-precision non-negative integers stored as canonical decimal
//! digit strings: no leading zeros, except `"0"` itself. A `Decimal` can
//! only be built through [`Decimal::parse`], [`Decimal::zero`] or `From<u64>`,
//! so every value in circulation is canonical.
//!
//! ## Operations
//!
//! - **Arithmetic**: `add`, `sub`, `mul`, `div`, `rem`
//! - **Encoder support**: `div_rem_small` for cheap division by a byte base

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid decimal digit '{found}' at position {position} in '{text}'")]
    InvalidDigit {
        text: String,
        position: usize,
        found: char,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("subtraction underflow: {lhs} - {rhs} is negative")]
    Underflow { lhs: String, rhs: String },
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Decimal {
    pub fn zero() -> Self {
        Decimal("0".to_string())
    }

    /// Parses a string of ASCII digits, stripping leading zeros.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treelit::decimal::Decimal;
    /// assert_eq!(Decimal::parse("007").unwrap().as_str(), "7");
    /// assert_eq!(Decimal::parse("000").unwrap().as_str(), "0");
    /// assert!(Decimal::parse("12a").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DecimalError> {
        if text.is_empty() {
            return Err(DecimalError::Empty);
        }
        if let Some((position, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(DecimalError::InvalidDigit {
                text: text.to_string(),
                position,
                found,
            });
        }
        Ok(Self::from_digits_unchecked(text))
    }

    /// Strips leading zeros from a digit string already known to be valid.
    fn from_digits_unchecked(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self::zero()
        } else {
            Decimal(trimmed.to_string())
        }
    }

    fn from_le_digits(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            return Self::zero();
        }
        Decimal(digits.iter().rev().map(|d| char::from(b'0' + d)).collect())
    }

    fn le_digits(&self) -> Vec<u8> {
        self.0.bytes().rev().map(|b| b - b'0').collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Returns the value as a `u64` when it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

impl Decimal {
    pub fn add(&self, rhs: &Decimal) -> Decimal {
        let (a, b) = (self.le_digits(), rhs.le_digits());
        let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
        let mut carry = 0u8;
        for i in 0..a.len().max(b.len()) {
            let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
            out.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(carry);
        }
        Self::from_le_digits(out)
    }

    pub fn sub(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        if *self < *rhs {
            return Err(DecimalError::Underflow {
                lhs: self.0.clone(),
                rhs: rhs.0.clone(),
            });
        }
        let (a, b) = (self.le_digits(), rhs.le_digits());
        let mut out = Vec::with_capacity(a.len());
        let mut borrow = 0i8;
        for (i, &digit) in a.iter().enumerate() {
            let mut diff = digit as i8 - b.get(i).copied().unwrap_or(0) as i8 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            }
            out.push(diff as u8);
        }
        Ok(Self::from_le_digits(out))
    }

    pub fn mul(&self, rhs: &Decimal) -> Decimal {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let (a, b) = (self.le_digits(), rhs.le_digits());
        let mut acc = vec![0u32; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                acc[i + j] += x as u32 * y as u32;
            }
            // Normalize per row so the accumulator never overflows.
            let mut carry = 0;
            for slot in acc.iter_mut() {
                let total = *slot + carry;
                *slot = total % 10;
                carry = total / 10;
            }
        }
        Self::from_le_digits(acc.into_iter().map(|d| d as u8).collect())
    }

    /// Long division, returning quotient and remainder.
    pub fn div_rem(&self, rhs: &Decimal) -> Result<(Decimal, Decimal), DecimalError> {
        if rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let mut quotient = String::with_capacity(self.0.len());
        let mut remainder = Self::zero();
        for digit in self.0.chars() {
            let mut shifted = remainder.0.clone();
            shifted.push(digit);
            remainder = Self::from_digits_unchecked(&shifted);
            let mut q = 0u8;
            while remainder >= *rhs {
                remainder = remainder.sub(rhs)?;
                q += 1;
            }
            quotient.push(char::from(b'0' + q));
        }
        Ok((Self::from_digits_unchecked(&quotient), remainder))
    }

    pub fn div(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn rem(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Divides by a small non-zero divisor in a single pass.
    pub fn div_rem_small(&self, divisor: NonZeroU32) -> (Decimal, u32) {
        let divisor = divisor.get() as u64;
        let mut quotient = String::with_capacity(self.0.len());
        let mut remainder = 0u64;
        for b in self.0.bytes() {
            let current = remainder * 10 + (b - b'0') as u64;
            quotient.push(char::from(b'0' + (current / divisor) as u8));
            remainder = current % divisor;
        }
        (Self::from_digits_unchecked(&quotient), remainder as u32)
    }

    /// Computes `self * base + digit`, the accumulation step of positional parsing.
    pub fn shift_add(&self, base: u32, digit: u32) -> Decimal {
        self.mul(&Decimal::from(base as u64))
            .add(&Decimal::from(digit as u64))
    }
}

// ============================================================================
// TRAITS
// ============================================================================

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal(value.to_string())
    }
}

impl TryFrom<String> for Decimal {
    type Error = DecimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Decimal::parse(&value)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl std::str::FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
