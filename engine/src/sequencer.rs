//! Level ordering and per-level attempt state.

use numvault_types::{Curriculum, Level, LevelMode};
use tracing::info;

use crate::{AnswerLedger, BorrowEngine};

/// Mutable state for one attempt at one level.
///
/// Built fresh whenever the current level changes or is reset, which also
/// drops any borrow still in flight from the previous attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    ledger: AnswerLedger,
    vault: Option<BorrowEngine>,
}

impl Attempt {
    /// Zeroed ledger sized to the level; a borrow engine only for subtraction.
    #[must_use]
    pub fn load(level: &Level) -> Self {
        let vault = match level.mode() {
            LevelMode::NumberInput(_) => None,
            LevelMode::VerticalSubtraction(problem) => Some(BorrowEngine::new(problem.minuend())),
        };
        Self {
            ledger: AnswerLedger::new(level.column_count()),
            vault,
        }
    }

    #[must_use]
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut AnswerLedger {
        &mut self.ledger
    }

    #[must_use]
    pub fn vault(&self) -> Option<&BorrowEngine> {
        self.vault.as_ref()
    }

    pub fn vault_mut(&mut self) -> Option<&mut BorrowEngine> {
        self.vault.as_mut()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the level at `index`.
    Next { index: usize },
    /// Already at the last level; nothing changed.
    Complete,
}

/// Walks a curriculum in order, owning the attempt for the current level.
#[derive(Debug, Clone)]
pub struct LevelSequencer {
    curriculum: Curriculum,
    index: usize,
    attempt: Attempt,
}

impl LevelSequencer {
    #[must_use]
    pub fn new(curriculum: Curriculum) -> Self {
        let attempt = Attempt::load(&curriculum.levels()[0]);
        Self {
            curriculum,
            index: 0,
            attempt,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Level {
        &self.curriculum.levels()[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curriculum.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curriculum.is_empty()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.curriculum.len()
    }

    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn attempt_mut(&mut self) -> &mut Attempt {
        &mut self.attempt
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            info!(levels = self.curriculum.len(), "Curriculum complete");
            return Advance::Complete;
        }
        self.index += 1;
        self.attempt = Attempt::load(self.current());
        info!(index = self.index, id = %self.current().id(), "Level loaded");
        Advance::Next { index: self.index }
    }

    pub fn reset_current(&mut self) {
        self.attempt = Attempt::load(self.current());
        info!(index = self.index, id = %self.current().id(), "Level reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numvault_types::Digit;

    fn curriculum() -> Curriculum {
        Curriculum::new(vec![
            Level::number_input("pv-1", "three hundred five", &[3, 0, 5]).unwrap(),
            Level::vertical_subtraction("vault-1", &[4, 5, 2], &[1, 3, 8]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn first_level_loaded_on_construction() {
        let seq = LevelSequencer::new(curriculum());
        assert_eq!(seq.current().id().as_str(), "pv-1");
        assert_eq!(seq.attempt().ledger().len(), 3);
        assert!(seq.attempt().vault().is_none());
    }

    #[test]
    fn advance_loads_vault_then_completes() {
        let mut seq = LevelSequencer::new(curriculum());
        seq.attempt_mut()
            .ledger_mut()
            .set_column(0, Digit::new(3).unwrap());

        assert_eq!(seq.advance(), Advance::Next { index: 1 });
        assert_eq!(seq.current().id().as_str(), "vault-1");
        assert_eq!(seq.attempt().ledger().digits(), [Digit::ZERO; 3]);
        assert_eq!(seq.attempt().vault().unwrap().live(), [4, 5, 2]);

        assert_eq!(seq.advance(), Advance::Complete);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn reset_cancels_in_flight_borrow() {
        let mut seq = LevelSequencer::new(curriculum());
        seq.advance();
        let vault = seq.attempt_mut().vault_mut().unwrap();
        assert!(vault.borrow_from(1).is_started());
        assert!(vault.is_transitioning());

        seq.reset_current();
        let vault = seq.attempt().vault().unwrap();
        assert!(!vault.is_transitioning());
        assert_eq!(vault.live(), [4, 5, 2]);
        assert_eq!(seq.index(), 1);
    }
}
