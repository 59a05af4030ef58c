//! Presentation state layered over a `Room`.
//!
//! The room owns the arithmetic; the view owns what only matters on screen:
//! which column has focus, the running fade, and the status line.

use std::time::Duration;

use tracing::debug;

use numvault_engine::{MismatchHint, Room, RoomEvent, RoomSettings, Verdict};

use crate::effects::BorrowFade;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed(Option<MismatchHint>),
    Notice(String),
    Complete,
}

#[derive(Debug)]
pub struct RoomView {
    settings: RoomSettings,
    selected: usize,
    fade: Option<BorrowFade>,
    status: Option<Status>,
}

impl RoomView {
    #[must_use]
    pub fn new(settings: RoomSettings) -> Self {
        Self {
            settings,
            selected: 0,
            fade: None,
            status: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> RoomSettings {
        self.settings
    }

    /// Answer column with focus.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn fade(&self) -> Option<&BorrowFade> {
        self.fade.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.status = Some(Status::Notice(text.into()));
    }

    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_right(&mut self, room: &Room) {
        let last = room.level().column_count().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Drain room events and advance the fade by `delta`.
    ///
    /// A finished fade settles the borrow in the room. The resulting
    /// `BorrowSettled` event is picked up on the next tick.
    pub fn tick(&mut self, room: &mut Room, delta: Duration) {
        for event in room.take_events() {
            self.apply(event);
        }

        if let Some(fade) = self.fade.as_mut() {
            fade.advance(delta);
            if fade.is_finished() {
                self.fade = None;
                room.settle_borrow();
            }
        }
    }

    fn apply(&mut self, event: RoomEvent) {
        match event {
            RoomEvent::LevelLoaded { index, id } => {
                debug!(index, %id, "View reset for level");
                self.selected = 0;
                self.fade = None;
                self.status = None;
            }
            RoomEvent::BorrowStarted(borrow) => {
                self.fade = Some(BorrowFade::new(borrow, self.settings.transition()));
                self.status = None;
            }
            RoomEvent::BorrowSettled(_) | RoomEvent::BorrowCancelled(_) => {
                self.fade = None;
            }
            RoomEvent::BorrowRejected { column, reason } => {
                self.status = Some(Status::Notice(format!(
                    "Can't borrow from column {}: {reason}",
                    column + 1
                )));
            }
            RoomEvent::Verified { verdict, hint } => {
                self.status = Some(match verdict {
                    Verdict::Pass => Status::Passed,
                    Verdict::Fail => Status::Failed(hint),
                });
            }
            RoomEvent::CurriculumComplete => {
                self.status = Some(Status::Complete);
            }
        }
    }
}
