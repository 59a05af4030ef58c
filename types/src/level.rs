//! Level descriptors.
//!
//! Pure domain types with no IO. Invariants are enforced at construction
//! time and again at the serde boundary, so a `Level` in hand always has a
//! usable column count and, for subtraction, a non-negative difference.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::numeral::{MAX_COLUMNS, numeral_value};
use crate::{Digit, DigitError, NonEmptyString};

// ── Identifiers ──────────────────────────────────────────────

/// Opaque level identifier, unique within a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LevelId(NonEmptyString);

impl LevelId {
    pub fn new(value: impl Into<String>) -> Result<Self, LevelError> {
        NonEmptyString::new(value)
            .map(Self)
            .map_err(|_| LevelError::EmptyId)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Errors ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level id must not be empty")]
    EmptyId,
    #[error("instruction text must not be empty")]
    EmptyInstruction,
    #[error(transparent)]
    Digit(#[from] DigitError),
    #[error("level must have at least one column")]
    NoColumns,
    #[error("level has {count} columns; at most {MAX_COLUMNS} are supported")]
    TooManyColumns { count: usize },
    #[error("minuend has {minuend} columns but subtrahend has {subtrahend}")]
    LengthMismatch { minuend: usize, subtrahend: usize },
    #[error("minuend {minuend} is smaller than subtrahend {subtrahend}")]
    NegativeResult { minuend: u64, subtrahend: u64 },
}

fn check_columns(count: usize) -> Result<(), LevelError> {
    match count {
        0 => Err(LevelError::NoColumns),
        n if n > MAX_COLUMNS => Err(LevelError::TooManyColumns { count: n }),
        _ => Ok(()),
    }
}

// ── Modes ────────────────────────────────────────────────────

/// Place-value exercise: build the numeral described in words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    instruction: NonEmptyString,
    target: Vec<Digit>,
}

impl NumberInput {
    pub fn new(instruction: impl Into<String>, target: Vec<Digit>) -> Result<Self, LevelError> {
        let instruction =
            NonEmptyString::new(instruction).map_err(|_| LevelError::EmptyInstruction)?;
        check_columns(target.len())?;
        Ok(Self {
            instruction,
            target,
        })
    }

    #[must_use]
    pub fn instruction(&self) -> &str {
        self.instruction.as_str()
    }

    #[must_use]
    pub fn target(&self) -> &[Digit] {
        &self.target
    }
}

/// Column subtraction exercise laid out vertically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalSubtraction {
    minuend: Vec<Digit>,
    subtrahend: Vec<Digit>,
}

impl VerticalSubtraction {
    pub fn new(minuend: Vec<Digit>, subtrahend: Vec<Digit>) -> Result<Self, LevelError> {
        check_columns(minuend.len())?;
        if minuend.len() != subtrahend.len() {
            return Err(LevelError::LengthMismatch {
                minuend: minuend.len(),
                subtrahend: subtrahend.len(),
            });
        }
        let (top, bottom) = (numeral_value(&minuend), numeral_value(&subtrahend));
        if top < bottom {
            return Err(LevelError::NegativeResult {
                minuend: top,
                subtrahend: bottom,
            });
        }
        Ok(Self {
            minuend,
            subtrahend,
        })
    }

    #[must_use]
    pub fn minuend(&self) -> &[Digit] {
        &self.minuend
    }

    #[must_use]
    pub fn subtrahend(&self) -> &[Digit] {
        &self.subtrahend
    }

    /// `minuend − subtrahend`, never negative by construction.
    #[must_use]
    pub fn difference(&self) -> u64 {
        numeral_value(&self.minuend) - numeral_value(&self.subtrahend)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelMode {
    NumberInput(NumberInput),
    VerticalSubtraction(VerticalSubtraction),
}

impl LevelMode {
    /// Wire name of the mode, as written in curriculum files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberInput(_) => "number_input",
            Self::VerticalSubtraction(_) => "vertical_math",
        }
    }
}

// ── Level ────────────────────────────────────────────────────

/// Immutable description of one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct Level {
    id: LevelId,
    mode: LevelMode,
}

impl Level {
    #[must_use]
    pub fn new(id: LevelId, mode: LevelMode) -> Self {
        Self { id, mode }
    }

    pub fn number_input(
        id: impl Into<String>,
        instruction: impl Into<String>,
        target: &[u8],
    ) -> Result<Self, LevelError> {
        let target = Digit::parse_all(target)?;
        Ok(Self::new(
            LevelId::new(id)?,
            LevelMode::NumberInput(NumberInput::new(instruction, target)?),
        ))
    }

    pub fn vertical_subtraction(
        id: impl Into<String>,
        minuend: &[u8],
        subtrahend: &[u8],
    ) -> Result<Self, LevelError> {
        let minuend = Digit::parse_all(minuend)?;
        let subtrahend = Digit::parse_all(subtrahend)?;
        Ok(Self::new(
            LevelId::new(id)?,
            LevelMode::VerticalSubtraction(VerticalSubtraction::new(minuend, subtrahend)?),
        ))
    }

    #[must_use]
    pub fn id(&self) -> &LevelId {
        &self.id
    }

    #[must_use]
    pub fn mode(&self) -> &LevelMode {
        &self.mode
    }

    /// Number of answer columns this level asks for.
    #[must_use]
    pub fn column_count(&self) -> usize {
        match &self.mode {
            LevelMode::NumberInput(n) => n.target().len(),
            LevelMode::VerticalSubtraction(v) => v.minuend().len(),
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum RawLevel {
    NumberInput {
        id: String,
        instruction: String,
        target: Vec<u8>,
    },
    VerticalMath {
        id: String,
        minuend: Vec<u8>,
        subtrahend: Vec<u8>,
    },
}

impl TryFrom<RawLevel> for Level {
    type Error = LevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        match raw {
            RawLevel::NumberInput {
                id,
                instruction,
                target,
            } => Self::number_input(id, instruction, &target),
            RawLevel::VerticalMath {
                id,
                minuend,
                subtrahend,
            } => Self::vertical_subtraction(id, &minuend, &subtrahend),
        }
    }
}
