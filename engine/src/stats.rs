//! In-memory session tallies.

use crate::Verdict;

/// Counts for the running session. Nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    attempts: u32,
    solved: u32,
    streak: u32,
    best_streak: u32,
}

impl SessionStats {
    pub fn record(&mut self, verdict: Verdict) {
        self.attempts = self.attempts.saturating_add(1);
        match verdict {
            Verdict::Pass => {
                self.solved = self.solved.saturating_add(1);
                self.streak = self.streak.saturating_add(1);
                self.best_streak = self.best_streak.max(self.streak);
            }
            Verdict::Fail => self.streak = 0,
        }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn solved(&self) -> u32 {
        self.solved
    }

    /// Consecutive passing verifications.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }
}
