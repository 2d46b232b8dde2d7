//! Tunables for the showcase components.
//!
//! Plain structs with defaults; there is no config file or environment
//! lookup. Hosts override individual values with the `with_*` setters.

use std::time::Duration;

use crate::error::{ShowcaseError, ShowcaseResult};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Scroll advance per frame, in page units.
pub const DEFAULT_SPEED: f64 = 1.75;

/// Maximum distance from the viewport center counted as "centered".
pub const CENTER_THRESHOLD: f64 = 20.0;

/// Scale applied to the zoomed item.
pub const ZOOM_SCALE: f64 = 1.2;

/// How long the centered item stays enlarged.
pub const ZOOM_HOLD: Duration = Duration::from_millis(2000);

/// Settle time after the shrink starts before motion resumes.
pub const SHRINK_TAIL: Duration = Duration::from_millis(400);

/// Delay between detecting the reveal target and marking it visible.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// One display refresh at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

// =============================================================================
// CAROUSEL
// =============================================================================

/// Carousel animator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Offset added per unpaused frame.
    pub speed: f64,
    /// Strict upper bound on center distance for a zoom trigger.
    pub center_threshold: f64,
    /// Scale of the zoomed item.
    pub zoom_scale: f64,
    /// Zoom hold duration.
    pub hold: Duration,
    /// Shrink settle duration.
    pub tail: Duration,
    /// Gap between items on the track.
    pub item_gap: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            center_threshold: CENTER_THRESHOLD,
            zoom_scale: ZOOM_SCALE,
            hold: ZOOM_HOLD,
            tail: SHRINK_TAIL,
            item_gap: 0.0,
        }
    }
}

impl CarouselConfig {
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_center_threshold(mut self, threshold: f64) -> Self {
        self.center_threshold = threshold;
        self
    }

    pub fn with_zoom_scale(mut self, scale: f64) -> Self {
        self.zoom_scale = scale;
        self
    }

    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    pub fn with_tail(mut self, tail: Duration) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_item_gap(mut self, gap: f64) -> Self {
        self.item_gap = gap;
        self
    }

    /// Whole zoom cycle: trigger to fully idle.
    pub fn cycle_duration(&self) -> Duration {
        self.hold + self.tail
    }

    /// Reject values the animator cannot run with.
    pub fn validate(&self) -> ShowcaseResult<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ShowcaseError::invalid_config(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.center_threshold.is_finite() && self.center_threshold > 0.0) {
            return Err(ShowcaseError::invalid_config(format!(
                "center threshold must be positive, got {}",
                self.center_threshold
            )));
        }
        if !(self.zoom_scale.is_finite() && self.zoom_scale >= 1.0) {
            return Err(ShowcaseError::invalid_config(format!(
                "zoom scale must be at least 1.0, got {}",
                self.zoom_scale
            )));
        }
        if !(self.item_gap.is_finite() && self.item_gap >= 0.0) {
            return Err(ShowcaseError::invalid_config(format!(
                "item gap must be non-negative, got {}",
                self.item_gap
            )));
        }
        Ok(())
    }
}

// =============================================================================
// REVEAL / FRAME / PAGE
// =============================================================================

/// Scroll revealer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Selector of the element to reveal.
    pub target: String,
    pub delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target: ".button-wrapper".to_string(),
            delay: REVEAL_DELAY,
        }
    }
}

impl RevealConfig {
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Frame loop cadence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    pub frame_interval: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_interval: FRAME_INTERVAL,
        }
    }
}

/// Everything [`mount`](crate::pipeline::mount) needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowcaseConfig {
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub frame: FrameConfig,
}

// =============================================================================
// Tests
// =============================================================================
