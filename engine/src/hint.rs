//! Advisory diagnosis of a wrong answer.
//!
//! Nothing here feeds back into the verdict.

use numvault_types::{Digit, Level, LevelMode, digits_of};

use crate::AnswerLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchHint {
    /// Same non-zero digits as the expected numeral, in the wrong places.
    /// Usually a missing or extra placeholder zero.
    PlacesShifted,
    /// The non-zero digits themselves differ.
    WrongDigits,
}

impl MismatchHint {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::PlacesShifted => "Right digits, wrong places. Check your placeholder zeros.",
            Self::WrongDigits => "Some digits are off. Work through it column by column.",
        }
    }
}

/// Diagnose a wrong answer. Returns `None` when the answer is correct.
#[must_use]
pub fn diagnose(level: &Level, answer: &AnswerLedger) -> Option<MismatchHint> {
    let expected = expected_digits(level)?;
    if answer.digits() == expected.as_slice() {
        return None;
    }
    if non_zero_sorted(answer.digits()) == non_zero_sorted(&expected) {
        Some(MismatchHint::PlacesShifted)
    } else {
        Some(MismatchHint::WrongDigits)
    }
}

fn expected_digits(level: &Level) -> Option<Vec<Digit>> {
    match level.mode() {
        LevelMode::NumberInput(problem) => Some(problem.target().to_vec()),
        LevelMode::VerticalSubtraction(problem) => {
            digits_of(problem.difference(), problem.minuend().len())
        }
    }
}

fn non_zero_sorted(digits: &[Digit]) -> Vec<Digit> {
    let mut out: Vec<Digit> = digits.iter().copied().filter(|&d| d != Digit::ZERO).collect();
    out.sort_unstable();
    out
}
