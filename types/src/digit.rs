//! Single decimal digits.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A decimal digit in `0..=9`.
///
/// Every answer column and every authored numeral is built from these, so a
/// value outside the range is unrepresentable past the construction boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit must be in 0..=9, got {0}")]
    OutOfRange(u8),
    #[error("{0:?} is not a decimal digit")]
    NotADigit(char),
}

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const NINE: Self = Self(9);

    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit on the wheel; 9 wraps to 0.
    #[must_use]
    pub const fn spin_up(self) -> Self {
        if self.0 == 9 { Self(0) } else { Self(self.0 + 1) }
    }

    /// Previous digit on the wheel; 0 wraps to 9.
    #[must_use]
    pub const fn spin_down(self) -> Self {
        if self.0 == 0 { Self(9) } else { Self(self.0 - 1) }
    }

    /// Parse a whole slice of raw values, failing on the first out-of-range entry.
    pub fn parse_all(values: &[u8]) -> Result<Vec<Self>, DigitError> {
        values.iter().copied().map(Self::new).collect()
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let raw = value.to_digit(10).ok_or(DigitError::NotADigit(value))?;
        Self::new(raw as u8)
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl From<Digit> for u32 {
    fn from(value: Digit) -> Self {
        u32::from(value.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
