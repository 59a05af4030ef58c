//! Ordered, validated level lists.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::{Level, LevelId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurriculumError {
    #[error("curriculum must contain at least one level")]
    Empty,
    #[error("level id `{0}` appears more than once")]
    DuplicateId(LevelId),
}

/// A non-empty list of levels with unique ids, played in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCurriculum")]
pub struct Curriculum {
    levels: Vec<Level>,
}

#[derive(Deserialize)]
struct RawCurriculum {
    levels: Vec<Level>,
}

impl Curriculum {
    pub fn new(levels: Vec<Level>) -> Result<Self, CurriculumError> {
        if levels.is_empty() {
            return Err(CurriculumError::Empty);
        }
        let mut seen = HashSet::with_capacity(levels.len());
        for level in &levels {
            if !seen.insert(level.id()) {
                return Err(CurriculumError::DuplicateId(level.id().clone()));
            }
        }
        Ok(Self { levels })
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }
}

impl TryFrom<RawCurriculum> for Curriculum {
    type Error = CurriculumError;

    fn try_from(raw: RawCurriculum) -> Result<Self, Self::Error> {
        Self::new(raw.levels)
    }
}
