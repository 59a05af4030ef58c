//! Pass/fail decisions.
//!
//! Verification reads the authored level and the answer ledger only. The
//! live borrow state is a visual aid and never enters the decision: a
//! learner who reaches the right digits without borrowing, or after
//! resetting mid-borrow, still passes.

use numvault_types::{Level, LevelMode};

use crate::AnswerLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

/// Decide whether `answer` solves `level`. All-or-nothing.
#[must_use]
pub fn verify(level: &Level, answer: &AnswerLedger) -> Verdict {
    match level.mode() {
        // Slice equality covers both length and every position.
        LevelMode::NumberInput(problem) => Verdict::from(answer.digits() == problem.target()),
        LevelMode::VerticalSubtraction(problem) => {
            Verdict::from(answer.value() == problem.difference())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numvault_types::Digit;

    fn ledger(raw: &[u8]) -> AnswerLedger {
        AnswerLedger::from(Digit::parse_all(raw).unwrap())
    }

    #[test]
    fn number_input_requires_exact_digits() {
        let level = Level::number_input("pv", "three thousand fifty", &[3, 0, 5, 0]).unwrap();
        assert_eq!(verify(&level, &ledger(&[3, 0, 5, 0])), Verdict::Pass);
        assert_eq!(verify(&level, &ledger(&[3, 5, 0, 0])), Verdict::Fail);
        assert_eq!(verify(&level, &ledger(&[3, 0, 5])), Verdict::Fail);
    }

    #[test]
    fn number_input_compares_digits_not_value() {
        let level = Level::number_input("pv", "fifty", &[0, 5, 0]).unwrap();
        assert_eq!(verify(&level, &ledger(&[5, 0])), Verdict::Fail);
        assert_eq!(verify(&level, &ledger(&[0, 5, 0])), Verdict::Pass);
    }

    #[test]
    fn subtraction_checks_numeric_difference() {
        let level = Level::vertical_subtraction("v", &[4, 5, 2], &[1, 3, 8]).unwrap();
        assert_eq!(verify(&level, &ledger(&[3, 1, 4])), Verdict::Pass);
        assert_eq!(verify(&level, &ledger(&[3, 2, 6])), Verdict::Fail);
        assert_eq!(verify(&level, &ledger(&[0, 0, 0])), Verdict::Fail);
    }

    #[test]
    fn zero_difference_passes_on_fresh_ledger() {
        let level = Level::vertical_subtraction("v", &[5, 5], &[5, 5]).unwrap();
        assert_eq!(verify(&level, &AnswerLedger::new(2)), Verdict::Pass);
    }
}
