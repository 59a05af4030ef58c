//! Vault room state machine for numvault.
//!
//! Leaf to root:
//!
//! ```text
//! BorrowEngine  AnswerLedger          (per-attempt state)
//!        \         /
//!         Attempt ── LevelSequencer   (curriculum order, reload on change)
//!                          |
//!         verify / diagnose|          (authored level + ledger only)
//!                          v
//!                        Room ──▶ RoomEvent queue ──▶ presentation
//! ```
//!
//! Everything here is synchronous and clock-free. Presentation layers own
//! timing and call [`Room::settle_borrow`] when their fade completes.

mod borrow;
mod hint;
mod ledger;
mod notifications;
mod room;
mod sequencer;
mod stats;
mod verifier;

pub use borrow::{BorrowEngine, BorrowEvent, BorrowOutcome, BorrowPhase, BorrowRejection};
pub use hint::{MismatchHint, diagnose};
pub use ledger::AnswerLedger;
pub use notifications::{EventQueue, RoomEvent};
pub use room::Room;
pub use sequencer::{Advance, Attempt, LevelSequencer};
pub use stats::SessionStats;
pub use verifier::{Verdict, verify};

pub use numvault_types::{Curriculum, Digit, Level, LevelId, LevelMode, RoomSettings};
