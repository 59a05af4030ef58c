//! Room events for the presentation layer.
//!
//! The room never waits on a clock. Anything a renderer wants to animate or
//! announce is pushed here and drained once per frame.

use numvault_types::LevelId;

use crate::{BorrowEvent, BorrowRejection, MismatchHint, Verdict};

/// Something that happened in the room since the last drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// A level became current (first load, advance, or reset).
    LevelLoaded { index: usize, id: LevelId },
    /// Value moved; the renderer may fade the lending column until it settles.
    BorrowStarted(BorrowEvent),
    BorrowSettled(BorrowEvent),
    /// An in-flight borrow was dropped by a reset or level change.
    BorrowCancelled(BorrowEvent),
    BorrowRejected {
        column: usize,
        reason: BorrowRejection,
    },
    Verified {
        verdict: Verdict,
        hint: Option<MismatchHint>,
    },
    /// `advance` was called on the last level.
    CurriculumComplete,
}

/// Ordered queue of pending room events.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<RoomEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RoomEvent) {
        self.pending.push(event);
    }

    /// Take all pending events, clearing the queue.
    ///
    /// Returns the events in the order they were pushed.
    pub fn take(&mut self) -> Vec<RoomEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
