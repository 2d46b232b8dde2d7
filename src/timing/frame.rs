//! Frame Clock - Display-refresh cadence
//!
//! The first frame is due at t = 0 (the loop starts at load). Each frame is
//! due exactly one interval after the previous one, so frame `n` lands at
//! `n * interval` with no drift.

use std::time::Duration;

/// Schedule of animation frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    frames: u64,
}

impl FrameClock {
    /// Create a clock. A zero interval is bumped to 1ns so the loop always
    /// makes progress.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Due time of the next frame.
    pub fn next_frame_at(&self) -> Duration {
        self.time_of(self.frames)
    }

    /// Mark the next frame as run and return its time.
    pub fn advance(&mut self) -> Duration {
        let at = self.next_frame_at();
        self.frames += 1;
        at
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn time_of(&self, frame: u64) -> Duration {
        // Computed from the frame number rather than accumulated
        let nanos = self.interval.as_nanos().saturating_mul(frame as u128);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
