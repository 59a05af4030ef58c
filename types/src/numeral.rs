//! Positional (base-10) numeral arithmetic.
//!
//! All sequences are most-significant first, matching how levels are authored
//! and how columns are laid out on screen.

use crate::Digit;

/// Upper bound on the number of columns a level may use.
///
/// Nine columns keep every numeral, including post-borrow live values, well
/// inside `u64`.
pub const MAX_COLUMNS: usize = 9;

/// Value of a digit sequence read as a base-10 numeral.
#[must_use]
pub fn numeral_value(digits: &[Digit]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, d| acc * 10 + u64::from(d.value()))
}

/// Positional value of a column sequence whose entries may exceed 9.
///
/// `[4, 4, 12]` is 4·100 + 4·10 + 12 = 452.
#[must_use]
pub fn positional_value(columns: &[u32]) -> u64 {
    columns
        .iter()
        .fold(0u64, |acc, &c| acc * 10 + u64::from(c))
}

/// Render `value` as exactly `width` digits, zero-padded on the left.
///
/// Returns `None` when `value` needs more than `width` digits.
#[must_use]
pub fn digits_of(value: u64, width: usize) -> Option<Vec<Digit>> {
    let mut out = vec![Digit::ZERO; width];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = Digit::new((rest % 10) as u8).ok()?;
        rest /= 10;
    }
    (rest == 0).then_some(out)
}
