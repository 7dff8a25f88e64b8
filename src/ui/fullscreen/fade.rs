// SPDX-License-Identifier: MPL-2.0
//! Opacity transition timing for the fullscreen container.
//!
//! A `Fade` is a value, not a scheduler: it records direction, start instant,
//! and duration, and answers opacity/completion queries for any `now`. The
//! update loop advances it from the shared tick subscription.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Opacity 0 → 1 (entering fullscreen).
    In,
    /// Opacity 1 → 0 (exiting fullscreen).
    Out,
}

#[derive(Debug, Clone, Copy)]
pub struct Fade {
    direction: Direction,
    started_at: Instant,
    duration: Duration,
}

impl Fade {
    #[must_use]
    pub fn fade_in(now: Instant, duration: Duration) -> Self {
        Self {
            direction: Direction::In,
            started_at: now,
            duration,
        }
    }

    #[must_use]
    pub fn fade_out(now: Instant, duration: Duration) -> Self {
        Self {
            direction: Direction::Out,
            started_at: now,
            duration,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear progress through the transition, `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Current container opacity for this transition.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.direction {
            Direction::In => self.progress(now),
            Direction::Out => 1.0 - self.progress(now),
        }
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
