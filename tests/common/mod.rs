//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use numvault_engine::{Curriculum, Digit, Level, LevelMode, Room};

/// The curriculum compiled into the binary.
pub const BUILTIN_CURRICULUM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/curriculum.toml"));

pub fn digits(values: &[u8]) -> Vec<Digit> {
    Digit::parse_all(values).unwrap()
}

/// 452 − 138, the worked example used throughout.
pub fn vault_452() -> Level {
    Level::vertical_subtraction("vault-452", &[4, 5, 2], &[1, 3, 8]).unwrap()
}

pub fn room_with(levels: Vec<Level>) -> Room {
    Room::new(Curriculum::new(levels).unwrap())
}

/// Write `values` into the answer, most significant first.
pub fn enter(room: &mut Room, values: &[u8]) {
    for (column, digit) in digits(values).into_iter().enumerate() {
        room.set_column(column, digit);
    }
}

/// The correct answer for `level`, one digit per column.
pub fn expected_answer(level: &Level) -> Vec<u8> {
    match level.mode() {
        LevelMode::NumberInput(task) => task.target().iter().map(|&d| u8::from(d)).collect(),
        LevelMode::VerticalSubtraction(problem) => {
            numvault_types::digits_of(problem.difference(), problem.minuend().len())
                .unwrap()
                .into_iter()
                .map(u8::from)
                .collect()
        }
    }
}
