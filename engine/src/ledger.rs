//! The learner's per-column digit entries.

use numvault_types::{Digit, numeral_value};

/// One digit per answer column, most-significant first.
///
/// Independent of the borrow state: nothing here knows about the live
/// minuend, and nothing here clamps or wraps. Wraparound is the digit
/// wheel's job (see [`Digit::spin_up`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLedger {
    cells: Vec<Digit>,
}

impl AnswerLedger {
    /// All-zero ledger with `len` columns.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Digit::ZERO; len],
        }
    }

    pub fn reset(&mut self, len: usize) {
        self.cells.clear();
        self.cells.resize(len, Digit::ZERO);
    }

    /// Replace the digit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers address only columns the
    /// current level exposes.
    pub fn set_column(&mut self, index: usize, digit: Digit) {
        assert!(
            index < self.cells.len(),
            "answer column {index} out of range for {} columns",
            self.cells.len()
        );
        self.cells[index] = digit;
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Digit> {
        self.cells.get(index).copied()
    }

    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The entries read as one numeral.
    #[must_use]
    pub fn value(&self) -> u64 {
        numeral_value(&self.cells)
    }
}

impl From<Vec<Digit>> for AnswerLedger {
    fn from(cells: Vec<Digit>) -> Self {
        Self { cells }
    }
}
