//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs (with `Option` fields) live in
//! `numvault-config`. The config loader resolves them into these types at
//! the parse boundary.

use std::time::Duration;

/// Default length of the borrow fade between "value lent" and "value received".
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(350);

/// Longest fade the config may request; anything above is clamped.
pub const MAX_TRANSITION: Duration = Duration::from_secs(2);

/// How the vault room presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSettings {
    transition: Duration,
    reduced_motion: bool,
    ascii_only: bool,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            reduced_motion: false,
            ascii_only: false,
        }
    }
}

impl RoomSettings {
    #[must_use]
    pub fn new(transition: Duration, reduced_motion: bool, ascii_only: bool) -> Self {
        Self {
            transition: transition.min(MAX_TRANSITION),
            reduced_motion,
            ascii_only,
        }
    }

    /// Fade length actually used; zero under reduced motion.
    #[must_use]
    pub fn transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.transition
        }
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.ascii_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_long_transitions() {
        let settings = RoomSettings::new(Duration::from_secs(30), false, false);
        assert_eq!(settings.transition(), MAX_TRANSITION);
    }

    #[test]
    fn reduced_motion_zeroes_transition() {
        let settings = RoomSettings::new(Duration::from_millis(300), true, false);
        assert_eq!(settings.transition(), Duration::ZERO);
    }
}
