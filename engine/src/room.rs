//! The vault room: one learner's session over a curriculum.
//!
//! `Room` is the only object a presentation layer talks to. It is passed by
//! `&mut` and owns the sequencer, the current attempt, session stats, and
//! the event queue. Invalid requests are no-ops, reported through events.

use numvault_types::{Curriculum, Digit, Level};
use tracing::{debug, info};

use crate::hint::diagnose;
use crate::notifications::{EventQueue, RoomEvent};
use crate::sequencer::{Advance, LevelSequencer};
use crate::verifier::verify;
use crate::{
    AnswerLedger, BorrowEngine, BorrowEvent, BorrowOutcome, BorrowPhase, BorrowRejection,
    MismatchHint, SessionStats, Verdict,
};

#[derive(Debug)]
pub struct Room {
    sequencer: LevelSequencer,
    events: EventQueue,
    stats: SessionStats,
    last_verdict: Option<Verdict>,
    last_hint: Option<MismatchHint>,
    /// The current level has passed at least once; later passes are not re-counted.
    solved: bool,
    complete: bool,
}

impl Room {
    #[must_use]
    pub fn new(curriculum: Curriculum) -> Self {
        let mut room = Self {
            sequencer: LevelSequencer::new(curriculum),
            events: EventQueue::new(),
            stats: SessionStats::default(),
            last_verdict: None,
            last_hint: None,
            solved: false,
            complete: false,
        };
        info!(levels = room.sequencer.len(), "Room opened");
        room.announce_level();
        room
    }

    // ── Read access ──────────────────────────────────────────

    #[must_use]
    pub fn level(&self) -> &Level {
        self.sequencer.current()
    }

    #[must_use]
    pub fn level_index(&self) -> usize {
        self.sequencer.index()
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.sequencer.len()
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerLedger {
        self.sequencer.attempt().ledger()
    }

    /// Live minuend, or `None` on levels without one.
    #[must_use]
    pub fn live_minuend(&self) -> Option<&[u32]> {
        self.vault().map(BorrowEngine::live)
    }

    #[must_use]
    pub fn borrow_phase(&self) -> Option<BorrowPhase> {
        self.vault().map(BorrowEngine::phase)
    }

    #[must_use]
    pub fn can_borrow_from(&self, column: usize) -> bool {
        self.vault().is_some_and(|v| v.can_borrow_from(column))
    }

    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    #[must_use]
    pub fn last_hint(&self) -> Option<MismatchHint> {
        self.last_hint
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// `advance` has been called on the last level.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Drain pending events, oldest first.
    pub fn take_events(&mut self) -> Vec<RoomEvent> {
        self.events.take()
    }

    // ── Answer entry ─────────────────────────────────────────

    /// Store `digit` in answer column `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not an answer column of the current level.
    pub fn set_column(&mut self, column: usize, digit: Digit) {
        self.sequencer
            .attempt_mut()
            .ledger_mut()
            .set_column(column, digit);
        self.last_verdict = None;
        self.last_hint = None;
        debug!(column, digit = digit.value(), "Answer column set");
    }

    /// Turn the digit wheel of `column` one step up (9 wraps to 0).
    pub fn spin_up(&mut self, column: usize) {
        let digit = self.column_digit(column).spin_up();
        self.set_column(column, digit);
    }

    /// Turn the digit wheel of `column` one step down (0 wraps to 9).
    pub fn spin_down(&mut self, column: usize) {
        let digit = self.column_digit(column).spin_down();
        self.set_column(column, digit);
    }

    fn column_digit(&self, column: usize) -> Digit {
        let ledger = self.answer();
        match ledger.get(column) {
            Some(digit) => digit,
            None => panic!(
                "answer column {column} out of range for {} columns",
                ledger.len()
            ),
        }
    }

    // ── Borrowing ────────────────────────────────────────────

    pub fn borrow_from(&mut self, column: usize) -> BorrowOutcome {
        let outcome = match self.sequencer.attempt_mut().vault_mut() {
            Some(vault) => vault.borrow_from(column),
            None => BorrowOutcome::Rejected(BorrowRejection::NotAVault),
        };
        match outcome {
            BorrowOutcome::Started(event) => self.events.push(RoomEvent::BorrowStarted(event)),
            BorrowOutcome::Rejected(reason) => {
                self.events
                    .push(RoomEvent::BorrowRejected { column, reason });
            }
        }
        outcome
    }

    /// Finish the in-flight borrow. Called by the renderer once its fade ends.
    pub fn settle_borrow(&mut self) {
        let settled = self
            .sequencer
            .attempt_mut()
            .vault_mut()
            .and_then(BorrowEngine::settle);
        if let Some(event) = settled {
            self.events.push(RoomEvent::BorrowSettled(event));
        }
    }

    // ── Verification & navigation ───────────────────────────

    pub fn verify(&mut self) -> Verdict {
        let level = self.sequencer.current();
        let answer = self.sequencer.attempt().ledger();
        let verdict = verify(level, answer);
        let hint = match verdict {
            Verdict::Pass => None,
            Verdict::Fail => diagnose(level, answer),
        };
        info!(
            id = %level.id(),
            answer = answer.value(),
            verdict = verdict.as_str(),
            "Answer verified"
        );

        if !self.solved {
            self.stats.record(verdict);
            self.solved = verdict.is_pass();
        }
        self.last_verdict = Some(verdict);
        self.last_hint = hint;
        self.events.push(RoomEvent::Verified { verdict, hint });
        verdict
    }

    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }
        let in_flight = self.in_flight();
        let advance = self.sequencer.advance();
        match advance {
            Advance::Next { .. } => {
                self.push_cancelled(in_flight);
                self.clear_attempt_flags();
                self.announce_level();
            }
            Advance::Complete => {
                self.complete = true;
                self.events.push(RoomEvent::CurriculumComplete);
            }
        }
        advance
    }

    pub fn reset_current(&mut self) {
        let in_flight = self.in_flight();
        self.sequencer.reset_current();
        self.push_cancelled(in_flight);
        self.clear_attempt_flags();
        self.announce_level();
    }

    // ── Internals ────────────────────────────────────────────

    fn vault(&self) -> Option<&BorrowEngine> {
        self.sequencer.attempt().vault()
    }

    fn in_flight(&self) -> Option<BorrowEvent> {
        match self.borrow_phase() {
            Some(BorrowPhase::Transitioning(event)) => Some(event),
            _ => None,
        }
    }

    fn push_cancelled(&mut self, in_flight: Option<BorrowEvent>) {
        if let Some(event) = in_flight {
            debug!(from = event.from(), to = event.to(), "Borrow cancelled");
            self.events.push(RoomEvent::BorrowCancelled(event));
        }
    }

    fn clear_attempt_flags(&mut self) {
        self.last_verdict = None;
        self.last_hint = None;
        self.solved = false;
    }

    fn announce_level(&mut self) {
        self.events.push(RoomEvent::LevelLoaded {
            index: self.sequencer.index(),
            id: self.sequencer.current().id().clone(),
        });
    }
}
