//! Mount API - Page lifecycle and the frame/timer loop.
//!
//! `mount` wires every component to a page and returns a [`MountHandle`]
//! that owns the page, the frame clock and the shared timer queue. The host
//! drives it with [`MountHandle::advance`] and feeds input through
//! [`MountHandle::dispatch`].
//!
//! A component whose elements are missing is skipped; the others still run.
//! The reasons are kept on the handle.
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::pipeline::mount;
//! use template_showcase::ShowcaseConfig;
//!
//! let mut handle = mount(page, ShowcaseConfig::default());
//! for failure in handle.failures() {
//!     eprintln!("{failure}");
//! }
//!
//! while handle.is_running() {
//!     if let Ok(Some(event)) = poll_event(handle.page(), metrics, Duration::from_millis(16)) {
//!         handle.dispatch(event);
//!     }
//!     handle.advance(Duration::from_millis(16));
//! }
//!
//! let page = handle.unmount();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::carousel::{Animator, CarouselTimer};
use crate::config::ShowcaseConfig;
use crate::dom::Page;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::popup::PopupController;
use crate::reveal::{RevealTimer, ScrollRevealer};
use crate::state::InputEvent;
use crate::timing::{FrameClock, Scheduler};
use crate::types::Viewport;

// =============================================================================
// Timer routing
// =============================================================================

/// Every deferred event on the page, tagged by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    Carousel(CarouselTimer),
    Reveal(RevealTimer),
}

impl From<CarouselTimer> for PageTimer {
    fn from(timer: CarouselTimer) -> Self {
        Self::Carousel(timer)
    }
}

impl From<RevealTimer> for PageTimer {
    fn from(timer: RevealTimer) -> Self {
        Self::Reveal(timer)
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that owns the running page.
pub struct MountHandle {
    page: Page,
    timers: Scheduler<PageTimer>,
    frames: FrameClock,
    carousel: Option<Animator>,
    revealer: Option<ScrollRevealer>,
    popup: Option<PopupController>,
    failures: Vec<ShowcaseError>,
    running: Arc<AtomicBool>,
}

fn mounted<T>(result: ShowcaseResult<T>, failures: &mut Vec<ShowcaseError>) -> Option<T> {
    match result {
        Ok(component) => Some(component),
        Err(err) => {
            failures.push(err);
            None
        }
    }
}

/// Mount the carousel, the scroll revealer and the popup on `page`.
pub fn mount(mut page: Page, config: ShowcaseConfig) -> MountHandle {
    let mut failures = Vec::new();

    let carousel = mounted(Animator::mount(&mut page, config.carousel), &mut failures);
    let revealer = mounted(ScrollRevealer::mount(&page, &config.reveal), &mut failures);
    let popup = mounted(PopupController::mount(&page), &mut failures);

    info!(
        carousel = carousel.is_some(),
        reveal = revealer.is_some(),
        popup = popup.is_some(),
        "page mounted"
    );

    MountHandle {
        page,
        timers: Scheduler::new(),
        frames: FrameClock::new(config.frame.frame_interval),
        carousel,
        revealer,
        popup,
        failures,
        running: Arc::new(AtomicBool::new(true)),
    }
}

/// Unmount and hand the page back.
pub fn unmount(handle: MountHandle) -> Page {
    handle.unmount()
}

impl MountHandle {
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn carousel(&self) -> Option<&Animator> {
        self.carousel.as_ref()
    }

    pub fn revealer(&self) -> Option<&ScrollRevealer> {
        self.revealer.as_ref()
    }

    pub fn popup(&self) -> Option<&PopupController> {
        self.popup.as_ref()
    }

    /// Why components were not mounted.
    pub fn failures(&self) -> &[ShowcaseError] {
        &self.failures
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Animation frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames.frames()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop processing frames, timers and input.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop and return the page.
    pub fn unmount(self) -> Page {
        self.stop();
        debug!(frames = self.frames.frames(), "page unmounted");
        self.page
    }

    // =========================================================================
    // Event Loop
    // =========================================================================

    /// Move virtual time forward by `dt`, running every frame and timer that
    /// comes due, in time order. A timer due at or before a frame fires
    /// first.
    pub fn advance(&mut self, dt: Duration) {
        if !self.is_running() {
            return;
        }
        let target = self.timers.now() + dt;

        loop {
            let frame_at = self.frames.next_frame_at();
            if let Some((at, timer)) = self.timers.pop_due(frame_at.min(target)) {
                trace!(?at, ?timer, "timer due");
                self.fire(timer);
                continue;
            }
            if frame_at > target {
                break;
            }
            self.frames.advance();
            self.timers.advance_to(frame_at);
            self.frame();
        }

        self.timers.advance_to(target);
    }

    fn frame(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(&mut self.page, &mut self.timers);
        }
    }

    fn fire(&mut self, timer: PageTimer) {
        match timer {
            PageTimer::Carousel(timer) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.on_timer(&mut self.page, &mut self.timers, timer);
                }
            }
            PageTimer::Reveal(timer) => {
                if let Some(revealer) = self.revealer.as_mut() {
                    revealer.on_timer(&mut self.page, timer);
                }
            }
        }
    }

    /// Route an input event to the components.
    /// Returns true if a component handled it.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if !self.is_running() {
            return false;
        }

        match event {
            InputEvent::Key(key) => self
                .popup
                .as_mut()
                .is_some_and(|popup| popup.on_key(&mut self.page, &key)),
            InputEvent::Click(target) => self
                .popup
                .as_mut()
                .is_some_and(|popup| popup.on_click(&mut self.page, target)),
            InputEvent::Scroll { delta_y } => {
                let y = self.page.scroll_y() + delta_y;
                self.page.scroll_to(y);
                self.revealer
                    .as_mut()
                    .is_some_and(|revealer| revealer.on_scroll(&self.page, &mut self.timers))
            }
            InputEvent::Resize { width, height } => {
                self.page.set_viewport(Viewport::new(width, height));
                false
            }
            InputEvent::None => false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ZoomPhase;
    use crate::popup::{TEMPLATE_ID_ATTR, TRIGGER_SELECTOR};
    use crate::state::KeyboardEvent;
    use crate::test_support::{init_tracing, picker_page, CTA_TOP};
    use crate::types::{ClassFlags, ElementIndex};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup() -> MountHandle {
        init_tracing();
        let handle = mount(picker_page(), ShowcaseConfig::default());
        assert!(handle.failures().is_empty(), "{:?}", handle.failures());
        handle
    }

    fn trigger(page: &Page, id: &str) -> ElementIndex {
        page.query_all(TRIGGER_SELECTOR)
            .into_iter()
            .find(|&b| page.attribute(b, TEMPLATE_ID_ATTR) == Some(id))
            .unwrap()
    }

    #[test]
    fn test_mount_all_components() {
        let handle = setup();
        assert!(handle.carousel().is_some());
        assert!(handle.revealer().is_some());
        assert!(handle.popup().is_some());
        assert_eq!(handle.carousel().unwrap().half_track_width(), 1440.0);
        assert_eq!(handle.frames(), 0);
    }

    #[test]
    fn test_missing_component_does_not_block_others() {
        let mut page = picker_page();
        let track = page.query(".slideshow-track").unwrap();
        page.remove(track);

        let mut handle = mount(page, ShowcaseConfig::default());

        assert!(handle.carousel().is_none());
        assert!(handle.popup().is_some());
        assert_eq!(
            handle.failures(),
            &[ShowcaseError::missing("carousel", ".slideshow-track")]
        );

        handle.advance(ms(100));
        assert!(handle.dispatch(InputEvent::Scroll { delta_y: 300.0 }));
    }

    #[test]
    fn test_first_frame_runs_at_zero() {
        let mut handle = setup();
        handle.advance(Duration::ZERO);

        let carousel = handle.carousel().unwrap();
        assert_eq!(handle.frames(), 1);
        assert_eq!(carousel.state().scroll_offset(), 1.75);
        assert_eq!(carousel.state().phase(), ZoomPhase::Holding);
        let zoomed = handle.page().with_state(ClassFlags::ZOOMED);
        assert_eq!(zoomed, vec![carousel.items()[2]]);
    }

    #[test]
    fn test_zoom_cycle_through_handle() {
        let mut handle = setup();

        handle.advance(ms(1999));
        assert_eq!(handle.page().with_state(ClassFlags::ZOOMED).len(), 1);

        handle.advance(ms(1));
        assert!(handle.page().with_state(ClassFlags::ZOOMED).is_empty());
        assert!(handle.carousel().unwrap().state().is_paused());

        handle.advance(ms(400));
        let state = handle.carousel().unwrap().state();
        assert!(!state.is_paused());
        assert!(!state.zoom_cooldown_active());
        assert_eq!(state.scroll_offset(), 1.75);

        // Next frame moves again
        handle.advance(ms(16));
        assert_eq!(handle.carousel().unwrap().state().scroll_offset(), 3.5);
        assert_eq!(handle.now(), ms(2416));
    }

    #[test]
    fn test_scroll_reveals_call_to_action() {
        let mut handle = setup();
        let wrapper = handle.page().query(".button-wrapper").unwrap();

        // Top edge still below the fold
        assert!(!handle.dispatch(InputEvent::Scroll { delta_y: CTA_TOP - 800.0 }));
        assert!(handle.dispatch(InputEvent::Scroll { delta_y: 50.0 }));
        assert!(!handle.revealer().unwrap().is_listening());

        handle.advance(ms(99));
        assert!(!handle.page().has_state(wrapper, ClassFlags::VISIBLE));
        handle.advance(ms(1));
        assert!(handle.page().has_state(wrapper, ClassFlags::VISIBLE));

        // Listener is gone
        assert!(!handle.dispatch(InputEvent::Scroll { delta_y: 10.0 }));
    }

    #[test]
    fn test_popup_flow_through_dispatch() {
        let mut handle = setup();
        let six = trigger(handle.page(), "6");
        let confirm = handle.popup().unwrap().confirm_button();

        assert!(handle.dispatch(InputEvent::Click(six)));
        assert!(handle.popup().unwrap().is_open(handle.page()));

        assert!(handle.dispatch(InputEvent::Key(KeyboardEvent::new("Escape"))));
        assert!(!handle.popup().unwrap().is_open(handle.page()));

        handle.dispatch(InputEvent::Click(six));
        assert!(handle.dispatch(InputEvent::Click(confirm)));
        assert_eq!(handle.page().location(), "/form/template1");
    }

    #[test]
    fn test_confirm_without_selection_alerts() {
        let mut handle = setup();
        let confirm = handle.popup().unwrap().confirm_button();

        handle.dispatch(InputEvent::Click(confirm));

        assert_eq!(handle.page().alerts(), &["Please select a template first!".to_string()]);
        assert_eq!(handle.page().location(), crate::dom::DEFAULT_LOCATION);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut handle = setup();
        assert!(!handle.dispatch(InputEvent::Resize {
            width: 800.0,
            height: 600.0
        }));
        assert_eq!(handle.page().viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_stopped_handle_ignores_everything() {
        let mut handle = setup();
        handle.stop();

        handle.advance(ms(100));
        assert_eq!(handle.frames(), 0);
        assert!(!handle.dispatch(InputEvent::Scroll { delta_y: 500.0 }));

        let page = handle.unmount();
        assert_eq!(page.scroll_y(), 0.0);
    }
}
