//! Scroll Revealer - One-shot reveal of the call-to-action button
//!
//! Listens to scroll events until the target element's top edge enters the
//! viewport, then stops listening and shows the element after a short delay.
//! Never re-arms.

use tracing::{error, info, trace};

use crate::config::RevealConfig;
use crate::dom::Page;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::timing::Scheduler;
use crate::types::{ClassFlags, ElementIndex};

const COMPONENT: &str = "reveal";

/// Deferred event of the revealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTimer {
    Show,
}

/// Scroll-triggered reveal.
#[derive(Debug, Clone)]
pub struct ScrollRevealer {
    target: ElementIndex,
    delay: std::time::Duration,
    listening: bool,
    revealed: bool,
}

impl ScrollRevealer {
    /// Find the target element.
    ///
    /// # Errors
    ///
    /// [`ShowcaseError::MissingElement`] if the target selector matches
    /// nothing.
    pub fn mount(page: &Page, config: &RevealConfig) -> ShowcaseResult<Self> {
        let target = page.query(&config.target).ok_or_else(|| {
            error!(component = COMPONENT, selector = %config.target, "reveal target missing");
            ShowcaseError::missing(COMPONENT, config.target.clone())
        })?;

        Ok(Self {
            target,
            delay: config.delay,
            listening: true,
            revealed: false,
        })
    }

    pub fn target(&self) -> ElementIndex {
        self.target
    }

    /// Whether scroll events are still being checked.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether the element has been shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Handle a scroll event. Returns true if this event armed the reveal.
    pub fn on_scroll<E: From<RevealTimer>>(
        &mut self,
        page: &Page,
        timers: &mut Scheduler<E>,
    ) -> bool {
        if !self.listening {
            return false;
        }
        let Some(rect) = page.bounding_rect(self.target) else {
            return false;
        };

        let viewport_height = page.viewport().height;
        trace!(top = rect.top(), viewport_height, "reveal check");
        if rect.top() >= viewport_height {
            return false;
        }

        self.listening = false;
        timers.schedule(self.delay, RevealTimer::Show);
        true
    }

    /// Apply the fired reveal timer.
    pub fn on_timer(&mut self, page: &mut Page, timer: RevealTimer) {
        match timer {
            RevealTimer::Show => {
                if self.revealed {
                    return;
                }
                self.revealed = true;
                if page.add_class(self.target, ClassFlags::VISIBLE) {
                    info!(element = self.target, "call-to-action revealed");
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
