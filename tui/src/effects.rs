//! Borrow fade timing.
//!
//! The engine applies a borrow immediately; the fade is purely visual and
//! runs on the frame clock. When it finishes the view settles the borrow.

use std::time::Duration;

use numvault_engine::BorrowEvent;

fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Fade of the lending column between "unit taken" and "ten received".
#[derive(Debug, Clone)]
pub struct BorrowFade {
    event: BorrowEvent,
    timer: EffectTimer,
}

impl BorrowFade {
    #[must_use]
    pub fn new(event: BorrowEvent, duration: Duration) -> Self {
        Self {
            event,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn event(&self) -> BorrowEvent {
        self.event
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        ease_out_cubic(self.timer.progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
