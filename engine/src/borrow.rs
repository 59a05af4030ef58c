//! Borrow state machine for vertical subtraction.
//!
//! Columns are indexed in authored order: `0` is the highest place and
//! `len - 1` is the units column. A borrow from column `i` takes one unit
//! from `i` and hands ten to `i + 1`, so the positional value of the live
//! minuend never changes.
//!
//! The highest place, index `0`, may lend like any other non-empty column.
//! Only the units column is refused (`NoLowerPlace`), since nothing sits
//! below it to take the ten.
//!
//! ```text
//! Idle ──borrow_from(i)──▶ Transitioning { from: i, to: i + 1 } ──settle()──▶ Idle
//! ```
//!
//! The value move happens inside `borrow_from`. `Transitioning` only exists so
//! a presentation layer can run its fade on its own clock; while it holds, any
//! further borrow is rejected so a move can never be applied twice.

use std::fmt;

use numvault_types::{Digit, positional_value};
use tracing::debug;

/// The column pair of a borrow that has been applied but not yet settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowEvent {
    from: usize,
    to: usize,
}

impl BorrowEvent {
    /// Column that lent one unit.
    #[must_use]
    pub fn from(self) -> usize {
        self.from
    }

    /// Column that received ten.
    #[must_use]
    pub fn to(self) -> usize {
        self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorrowPhase {
    #[default]
    Idle,
    Transitioning(BorrowEvent),
}

/// Why a borrow request left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowRejection {
    /// The column is the units column (or past it); nothing lower can receive.
    NoLowerPlace,
    /// The column has nothing left to lend.
    EmptyColumn,
    /// A previous borrow has not settled yet.
    InFlight,
    /// The current level has no minuend to borrow from.
    NotAVault,
}

impl fmt::Display for BorrowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoLowerPlace => "no lower place to receive",
            Self::EmptyColumn => "column is empty",
            Self::InFlight => "borrow already in progress",
            Self::NotAVault => "level has nothing to borrow",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Started(BorrowEvent),
    Rejected(BorrowRejection),
}

impl BorrowOutcome {
    #[must_use]
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Live minuend plus the idle/transitioning phase for one level attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowEngine {
    live: Vec<u32>,
    phase: BorrowPhase,
}

impl BorrowEngine {
    /// Fresh, idle engine holding a copy of `minuend`.
    #[must_use]
    pub fn new(minuend: &[Digit]) -> Self {
        Self {
            live: minuend.iter().copied().map(u32::from).collect(),
            phase: BorrowPhase::Idle,
        }
    }

    /// Column values after borrowing; entries may exceed 9.
    #[must_use]
    pub fn live(&self) -> &[u32] {
        &self.live
    }

    #[must_use]
    pub fn phase(&self) -> BorrowPhase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, BorrowPhase::Transitioning(_))
    }

    /// Positional value of the live minuend. Equal to the authored minuend at all times.
    #[must_use]
    pub fn value(&self) -> u64 {
        positional_value(&self.live)
    }

    /// Validate a borrow against the current live state without applying it.
    pub fn check(&self, column: usize) -> Result<BorrowEvent, BorrowRejection> {
        if self.is_transitioning() {
            return Err(BorrowRejection::InFlight);
        }
        if column >= self.live.len().saturating_sub(1) {
            return Err(BorrowRejection::NoLowerPlace);
        }
        if self.live[column] == 0 {
            return Err(BorrowRejection::EmptyColumn);
        }
        Ok(BorrowEvent {
            from: column,
            to: column + 1,
        })
    }

    #[must_use]
    pub fn can_borrow_from(&self, column: usize) -> bool {
        self.check(column).is_ok()
    }

    /// Lend one unit from `column` to the next lower place.
    ///
    /// Rejected requests change nothing.
    pub fn borrow_from(&mut self, column: usize) -> BorrowOutcome {
        let event = match self.check(column) {
            Ok(event) => event,
            Err(reason) => {
                debug!(column, %reason, "Borrow rejected");
                return BorrowOutcome::Rejected(reason);
            }
        };
        self.live[event.from] -= 1;
        self.live[event.to] += 10;
        self.phase = BorrowPhase::Transitioning(event);
        debug!(from = event.from, to = event.to, live = ?self.live, "Borrow applied");
        BorrowOutcome::Started(event)
    }

    /// Finish the in-flight transition, returning the event that settled.
    pub fn settle(&mut self) -> Option<BorrowEvent> {
        match std::mem::take(&mut self.phase) {
            BorrowPhase::Idle => None,
            BorrowPhase::Transitioning(event) => Some(event),
        }
    }
}
