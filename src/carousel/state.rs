//! Animator State - Scroll offset, pause/cooldown flags and the zoom phase.
//!
//! Pure state: no page access, no timers. The animator applies the visual
//! side effects and schedules the follow-up timers around these transitions.
//!
//! # Zoom cycle
//!
//! ```text
//! Idle ─trigger─▶ Triggered ─▶ Holding ─hold timer─▶ Shrinking ─▶ CooldownTail ─tail timer─▶ Idle
//! ```
//!
//! `Triggered` and `Shrinking` are pass-through: entered and left inside the
//! same transition. At rest the phase is one of `Idle`, `Holding` or
//! `CooldownTail`.

use tracing::debug;

use crate::types::ElementIndex;

// =============================================================================
// TYPES
// =============================================================================

/// Named states of the zoom cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    #[default]
    Idle,
    Triggered,
    Holding,
    Shrinking,
    CooldownTail,
}

/// Deferred events the animator schedules for itself.
///
/// Each carries the cycle number it was scheduled for so late or duplicate
/// deliveries can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTimer {
    /// Zoom hold is over: shrink the item.
    HoldElapsed { cycle: u64 },
    /// Shrink settle is over: resume motion.
    TailElapsed { cycle: u64 },
}

/// Why a timer delivery was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleTimer {
    /// Timer belongs to a different zoom cycle.
    WrongCycle { current: u64, fired: u64 },
    /// Timer arrived in a phase that does not expect it.
    WrongPhase(ZoomPhase),
}

// =============================================================================
// STATE
// =============================================================================

/// Everything the carousel loop mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorState {
    scroll_offset: f64,
    speed: f64,
    is_paused: bool,
    zoom_cooldown_active: bool,
    last_zoomed: Option<ElementIndex>,
    phase: ZoomPhase,
    cycle: u64,
}

impl AnimatorState {
    /// Fresh state at offset 0, moving.
    pub fn new(speed: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            speed,
            is_paused: false,
            zoom_cooldown_active: false,
            last_zoomed: None,
            phase: ZoomPhase::Idle,
            cycle: 0,
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn zoom_cooldown_active(&self) -> bool {
        self.zoom_cooldown_active
    }

    /// Most recently zoomed item. Kept after the cycle ends.
    pub fn last_zoomed(&self) -> Option<ElementIndex> {
        self.last_zoomed
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Number of zoom cycles started so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Item currently shown enlarged, if any.
    pub fn zoomed_item(&self) -> Option<ElementIndex> {
        match self.phase {
            ZoomPhase::Triggered | ZoomPhase::Holding => self.last_zoomed,
            _ => None,
        }
    }

    fn transition(&mut self, to: ZoomPhase) {
        debug!(cycle = self.cycle, from = ?self.phase, ?to, "zoom phase");
        self.phase = to;
    }

    // =========================================================================
    // Frame steps
    // =========================================================================

    /// Advance the offset by one frame's worth. No-op while paused.
    pub fn advance(&mut self) -> bool {
        if self.is_paused {
            return false;
        }
        self.scroll_offset += self.speed;
        true
    }

    /// Reset to 0 once the first copy has scrolled fully out.
    ///
    /// Deferred while paused or cooling down so a held zoom never jumps.
    pub fn wrap_if_needed(&mut self, half_track_width: f64) -> bool {
        if self.scroll_offset >= half_track_width
            && !self.is_paused
            && !self.zoom_cooldown_active
        {
            debug!(offset = self.scroll_offset, half_track_width, "track wrapped");
            self.scroll_offset = 0.0;
            return true;
        }
        false
    }

    /// Check whether `item` may start a zoom cycle now.
    pub fn can_trigger(&self, item: ElementIndex) -> bool {
        !self.zoom_cooldown_active && self.last_zoomed != Some(item)
    }

    // =========================================================================
    // Zoom transitions
    // =========================================================================

    /// `Idle → Triggered → Holding`. Returns the new cycle number, or `None`
    /// if the trigger is not allowed.
    pub fn begin_cycle(&mut self, item: ElementIndex) -> Option<u64> {
        if !self.can_trigger(item) {
            return None;
        }
        self.cycle += 1;
        self.zoom_cooldown_active = true;
        self.is_paused = true;
        self.last_zoomed = Some(item);
        self.transition(ZoomPhase::Triggered);
        self.transition(ZoomPhase::Holding);
        Some(self.cycle)
    }

    /// `Holding → Shrinking → CooldownTail`. Returns the item to shrink.
    pub fn end_hold(&mut self, cycle: u64) -> Result<Option<ElementIndex>, StaleTimer> {
        self.check_timer(cycle, ZoomPhase::Holding)?;
        self.transition(ZoomPhase::Shrinking);
        self.transition(ZoomPhase::CooldownTail);
        Ok(self.last_zoomed)
    }

    /// `CooldownTail → Idle`. Motion resumes; `last_zoomed` is retained.
    pub fn end_tail(&mut self, cycle: u64) -> Result<(), StaleTimer> {
        self.check_timer(cycle, ZoomPhase::CooldownTail)?;
        self.is_paused = false;
        self.zoom_cooldown_active = false;
        self.transition(ZoomPhase::Idle);
        Ok(())
    }

    fn check_timer(&self, cycle: u64, expected: ZoomPhase) -> Result<(), StaleTimer> {
        if cycle != self.cycle {
            return Err(StaleTimer::WrongCycle {
                current: self.cycle,
                fired: cycle,
            });
        }
        if self.phase != expected {
            return Err(StaleTimer::WrongPhase(self.phase));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
