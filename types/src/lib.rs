//! Core domain types for numvault.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod curriculum;
mod digit;
mod level;
pub mod numeral;
mod proofs;
mod settings;

pub use curriculum::{Curriculum, CurriculumError};
pub use digit::{Digit, DigitError};
pub use level::{Level, LevelError, LevelId, LevelMode, NumberInput, VerticalSubtraction};
pub use numeral::{MAX_COLUMNS, digits_of, numeral_value, positional_value};
pub use proofs::{EmptyStringError, NonEmptyString};
pub use settings::{DEFAULT_TRANSITION, MAX_TRANSITION, RoomSettings};
