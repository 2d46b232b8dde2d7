//! Carousel Animator - Frame loop step, center detection and zoom cycle
//!
//! Owns the [`AnimatorState`] and applies its transitions to the page:
//! track translation, item scale and the `zoomed` marker. Follow-up timers
//! go through the caller's [`Scheduler`].
//!
//! # Per-frame order
//!
//! 1. advance offset (unless paused)
//! 2. translate the track
//! 3. wrap check
//! 4. center detection (may start a zoom cycle)
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::carousel::{Animator, CarouselTimer};
//! use template_showcase::timing::Scheduler;
//!
//! let mut animator = Animator::mount(&mut page, CarouselConfig::default())?;
//! let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
//!
//! // once per display refresh
//! animator.tick(&mut page, &mut timers);
//!
//! // when a timer comes due
//! while let Some((_, timer)) = timers.pop_due(now) {
//!     animator.on_timer(&mut page, &mut timers, timer);
//! }
//! ```

use spark_signals::{signal, Signal};
use tracing::{debug, error, trace, warn};

use super::state::{AnimatorState, CarouselTimer};
use crate::config::CarouselConfig;
use crate::dom::Page;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::layout::{compute_track_layout, TrackLayout};
use crate::timing::Scheduler;
use crate::types::{ClassFlags, ElementIndex};

// =============================================================================
// PAGE CONTRACT
// =============================================================================

/// Scrollable viewport around the track.
pub const CONTAINER_SELECTOR: &str = ".slideshow-container";

/// Element translated by the scroll offset. Holds both copies of the items.
pub const TRACK_SELECTOR: &str = ".slideshow-track";

/// Carousel items, anywhere inside the track.
pub const ITEM_SELECTOR: &str = ".template";

const COMPONENT: &str = "carousel";

fn missing(selector: &str) -> ShowcaseError {
    error!(component = COMPONENT, selector, "required element missing, carousel disabled");
    ShowcaseError::missing(COMPONENT, selector)
}

/// Track children laid out in the row: each item's outermost ancestor below
/// the track, in item order without repeats. An item that is itself a track
/// child is its own slide.
fn track_slides(page: &Page, track: ElementIndex, items: &[ElementIndex]) -> Vec<ElementIndex> {
    let mut slides: Vec<ElementIndex> = Vec::with_capacity(items.len());
    for &item in items {
        let mut current = item;
        while let Some(parent) = page.get(current).and_then(|el| el.parent()) {
            if parent == track {
                if !slides.contains(&current) {
                    slides.push(current);
                }
                break;
            }
            current = parent;
        }
    }
    slides
}

// =============================================================================
// SIGNALS
// =============================================================================

/// Reactive view of the animator for renderers.
///
/// Updated at the end of every tick and timer transition; only changed
/// values are written.
#[derive(Clone)]
pub struct CarouselSignals {
    pub scroll_offset: Signal<f64>,
    pub zoomed_item: Signal<Option<ElementIndex>>,
    pub is_paused: Signal<bool>,
}

impl CarouselSignals {
    fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            zoomed_item: signal(None),
            is_paused: signal(false),
        }
    }

    fn publish(&self, state: &AnimatorState) {
        if self.scroll_offset.get() != state.scroll_offset() {
            self.scroll_offset.set(state.scroll_offset());
        }
        if self.zoomed_item.get() != state.zoomed_item() {
            self.zoomed_item.set(state.zoomed_item());
        }
        if self.is_paused.get() != state.is_paused() {
            self.is_paused.set(state.is_paused());
        }
    }
}

// =============================================================================
// ANIMATOR
// =============================================================================

/// The carousel loop.
pub struct Animator {
    config: CarouselConfig,
    state: AnimatorState,
    container: ElementIndex,
    track: ElementIndex,
    items: Vec<ElementIndex>,
    slides: Vec<ElementIndex>,
    layout: TrackLayout,
    signals: CarouselSignals,
}

impl Animator {
    /// Find the carousel elements, lay the track out and create the state.
    ///
    /// # Errors
    ///
    /// - [`ShowcaseError::MissingElement`] if the container, the track or
    ///   every item is absent
    /// - [`ShowcaseError::InvalidConfig`] / [`ShowcaseError::Layout`]
    pub fn mount(page: &mut Page, config: CarouselConfig) -> ShowcaseResult<Self> {
        config.validate()?;

        let container = page
            .query(CONTAINER_SELECTOR)
            .ok_or_else(|| missing(CONTAINER_SELECTOR))?;
        let track = page
            .query(TRACK_SELECTOR)
            .ok_or_else(|| missing(TRACK_SELECTOR))?;

        let items = page.query_within(track, ITEM_SELECTOR);
        if items.is_empty() {
            return Err(missing(ITEM_SELECTOR));
        }

        let slides = track_slides(page, track, &items);
        let layout = compute_track_layout(page, track, &slides, config.item_gap)?;
        debug!(
            items = items.len(),
            slides = slides.len(),
            track_width = layout.width,
            half = layout.half_width(),
            "carousel mounted"
        );

        let state = AnimatorState::new(config.speed);
        let signals = CarouselSignals::new();
        signals.publish(&state);

        Ok(Self {
            config,
            state,
            container,
            track,
            items,
            slides,
            layout,
            signals,
        })
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn signals(&self) -> &CarouselSignals {
        &self.signals
    }

    pub fn container(&self) -> ElementIndex {
        self.container
    }

    pub fn track(&self) -> ElementIndex {
        self.track
    }

    /// Items in iteration (tie-break) order.
    pub fn items(&self) -> &[ElementIndex] {
        &self.items
    }

    /// Track children positioned by layout, in track order.
    pub fn slides(&self) -> &[ElementIndex] {
        &self.slides
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Offset at which the track wraps back to 0.
    pub fn half_track_width(&self) -> f64 {
        self.layout.half_width()
    }

    /// Recompute item positions, e.g. after item sizes changed.
    ///
    /// Items that have left the page are dropped from the carousel.
    pub fn relayout(&mut self, page: &mut Page) -> ShowcaseResult<()> {
        self.items.retain(|&i| page.contains(i));
        self.slides = track_slides(page, self.track, &self.items);
        self.layout = compute_track_layout(page, self.track, &self.slides, self.config.item_gap)?;
        Ok(())
    }

    // =========================================================================
    // Frame step
    // =========================================================================

    /// One animation frame.
    pub fn tick<E: From<CarouselTimer>>(&mut self, page: &mut Page, timers: &mut Scheduler<E>) {
        self.state.advance();
        page.set_translate_x(self.track, -self.state.scroll_offset());
        self.state.wrap_if_needed(self.layout.half_width());
        self.detect_center(page, timers);
        self.signals.publish(&self.state);

        trace!(
            offset = self.state.scroll_offset(),
            paused = self.state.is_paused(),
            "carousel tick"
        );
    }

    /// Compare each item's center with the viewport center and start a zoom
    /// cycle on the first eligible centered item.
    ///
    /// Items that are not the last zoomed one and did not trigger are reset
    /// to scale 1 every frame.
    pub fn detect_center<E: From<CarouselTimer>>(
        &mut self,
        page: &mut Page,
        timers: &mut Scheduler<E>,
    ) {
        let center = page.viewport().center_x();
        let threshold = self.config.center_threshold;

        for i in 0..self.items.len() {
            let item = self.items[i];
            let Some(rect) = page.bounding_rect(item) else {
                continue;
            };
            let distance = (rect.center_x() - center).abs();

            if distance < threshold && !self.state.zoom_cooldown_active() {
                if self.state.last_zoomed() != Some(item) {
                    self.begin_zoom(page, timers, item, distance);
                }
            } else if self.state.last_zoomed() != Some(item) {
                page.set_scale(item, 1.0);
            }
        }
    }

    fn begin_zoom<E: From<CarouselTimer>>(
        &mut self,
        page: &mut Page,
        timers: &mut Scheduler<E>,
        item: ElementIndex,
        distance: f64,
    ) {
        let Some(cycle) = self.state.begin_cycle(item) else {
            return;
        };
        debug!(
            cycle,
            item,
            distance,
            resume_in = ?self.config.cycle_duration(),
            "zoom triggered"
        );

        page.add_class(item, ClassFlags::ZOOMED);
        page.set_scale(item, self.config.zoom_scale);
        timers.schedule(self.config.hold, CarouselTimer::HoldElapsed { cycle });
    }

    // =========================================================================
    // Timer transitions
    // =========================================================================

    /// Apply a fired timer. Stale or duplicate deliveries are ignored.
    pub fn on_timer<E: From<CarouselTimer>>(
        &mut self,
        page: &mut Page,
        timers: &mut Scheduler<E>,
        timer: CarouselTimer,
    ) {
        match timer {
            CarouselTimer::HoldElapsed { cycle } => match self.state.end_hold(cycle) {
                Ok(item) => {
                    if let Some(item) = item {
                        let present = page.set_scale(item, 1.0);
                        page.remove_class(item, ClassFlags::ZOOMED);
                        if !present {
                            debug!(cycle, item, "zoomed item left the page, shrink skipped");
                        }
                    }
                    timers.schedule(self.config.tail, CarouselTimer::TailElapsed { cycle });
                }
                Err(stale) => warn!(?stale, "ignoring hold timer"),
            },
            CarouselTimer::TailElapsed { cycle } => match self.state.end_tail(cycle) {
                Ok(()) => debug!(cycle, "motion resumed"),
                Err(stale) => warn!(?stale, "ignoring tail timer"),
            },
        }
        self.signals.publish(&self.state);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::carousel::ZoomPhase;
    use crate::dom::Element;
    use crate::timing::FrameClock;
    use crate::types::{Rect, Viewport};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Container at x = 0 holding a track of items with the given widths.
    fn build_page(viewport_width: f64, widths: &[f64]) -> (Page, Vec<ElementIndex>) {
        let mut page = Page::new(Viewport::new(viewport_width, 800.0));
        let container = page.append(
            None,
            Element::new("div")
                .with_class("slideshow-container")
                .with_rect(Rect::new(0.0, 100.0, viewport_width, 300.0)),
        );
        let track = page.append(Some(container), Element::new("div").with_class("slideshow-track"));
        let items = widths
            .iter()
            .map(|&w| {
                page.append(
                    Some(track),
                    Element::new("div").with_class("template").with_size(w, 100.0),
                )
            })
            .collect();
        (page, items)
    }

    /// Run frames and timers in time order up to `until`, calling `observe`
    /// after every event. Timers due at or before a frame fire first.
    fn run(
        animator: &mut Animator,
        page: &mut Page,
        timers: &mut Scheduler<CarouselTimer>,
        frames: &mut FrameClock,
        until: Duration,
        mut observe: impl FnMut(Duration, bool, &Animator, &Page),
    ) {
        loop {
            let frame_at = frames.next_frame_at();
            let horizon = frame_at.min(until);
            if let Some((at, timer)) = timers.pop_due(horizon) {
                animator.on_timer(page, timers, timer);
                observe(at, false, animator, page);
                continue;
            }
            if frame_at > until {
                break;
            }
            frames.advance();
            timers.advance_to(frame_at);
            animator.tick(page, timers);
            observe(frame_at, true, animator, page);
        }
    }

    fn zoomed_count(page: &Page, items: &[ElementIndex]) -> usize {
        items
            .iter()
            .filter(|&&i| page.has_state(i, ClassFlags::ZOOMED) || page.scale(i) != Some(1.0))
            .count()
    }

    #[test]
    fn test_mount_requires_elements() {
        let mut page = Page::default();
        let err = Animator::mount(&mut page, CarouselConfig::default()).err().unwrap();
        assert_eq!(err, ShowcaseError::missing("carousel", CONTAINER_SELECTOR));

        let container = page.append(None, Element::new("div").with_class("slideshow-container"));
        let err = Animator::mount(&mut page, CarouselConfig::default()).err().unwrap();
        assert_eq!(err, ShowcaseError::missing("carousel", TRACK_SELECTOR));

        page.append(Some(container), Element::new("div").with_class("slideshow-track"));
        let err = Animator::mount(&mut page, CarouselConfig::default()).err().unwrap();
        assert_eq!(err, ShowcaseError::missing("carousel", ITEM_SELECTOR));
    }

    #[test]
    fn test_mount_finds_items_wrapped_in_slides() {
        let mut page = Page::new(Viewport::new(500.0, 800.0));
        let container = page.append(
            None,
            Element::new("div")
                .with_class("slideshow-container")
                .with_rect(Rect::new(0.0, 100.0, 500.0, 300.0)),
        );
        let track = page.append(Some(container), Element::new("div").with_class("slideshow-track"));
        let mut slides = Vec::new();
        let mut items = Vec::new();
        for _ in 0..4 {
            let slide = page.append(
                Some(track),
                Element::new("div").with_class("slide").with_size(100.0, 100.0),
            );
            items.push(page.append(
                Some(slide),
                Element::new("div").with_class("template").with_size(100.0, 100.0),
            ));
            slides.push(slide);
        }

        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        assert_eq!(animator.items(), items.as_slice());
        assert_eq!(animator.slides(), slides.as_slice());
        assert_eq!(animator.half_track_width(), 200.0);
        assert_eq!(page.bounding_rect(items[2]).unwrap().center_x(), 250.0);

        // Center detection sees the wrapped item through its slide
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
        animator.detect_center(&mut page, &mut timers);
        assert_eq!(animator.state().last_zoomed(), Some(items[2]));
        assert!(page.has_state(items[2], ClassFlags::ZOOMED));
    }

    #[test]
    fn test_items_outside_track_are_ignored() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        page.append(None, Element::new("div").with_class("template").with_size(100.0, 100.0));

        let animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        assert_eq!(animator.items(), items.as_slice());
        assert_eq!(animator.slides(), items.as_slice());
    }

    #[test]
    fn test_mount_rejects_invalid_config() {
        let (mut page, _) = build_page(500.0, &[100.0]);
        let err = Animator::mount(&mut page, CarouselConfig::default().with_speed(-1.0))
            .err()
            .unwrap();
        assert!(matches!(err, ShowcaseError::InvalidConfig(_)));
    }

    #[test]
    fn test_mount_lays_out_track() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();

        assert_eq!(animator.items(), items.as_slice());
        assert_eq!(animator.half_track_width(), 200.0);
        assert_eq!(page.bounding_rect(items[2]).unwrap().center_x(), 250.0);
        assert_eq!(animator.state().phase(), ZoomPhase::Idle);
    }

    #[test]
    fn test_only_second_of_distances_25_5_30_triggers() {
        // Centers at 15, 45, 70 against a viewport center of 40
        let (mut page, items) = build_page(80.0, &[30.0, 30.0, 20.0]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.detect_center(&mut page, &mut timers);

        assert_eq!(animator.state().last_zoomed(), Some(items[1]));
        assert_eq!(page.scale(items[0]), Some(1.0));
        assert_eq!(page.scale(items[1]), Some(1.2));
        assert_eq!(page.scale(items[2]), Some(1.0));
        assert!(page.has_state(items[1], ClassFlags::ZOOMED));
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_first_centered_item_wins_ties() {
        // Centers at 15 and 45, viewport center 30: both within 20
        let (mut page, items) = build_page(60.0, &[30.0, 30.0]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.detect_center(&mut page, &mut timers);

        assert_eq!(animator.state().last_zoomed(), Some(items[0]));
        assert_eq!(animator.state().cycle(), 1);
        assert_eq!(page.scale(items[1]), Some(1.0));
        assert_eq!(zoomed_count(&page, &items), 1);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Center at 50, viewport center 70: distance exactly 20
        let (mut page, _items) = build_page(140.0, &[100.0]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.detect_center(&mut page, &mut timers);

        assert_eq!(animator.state().cycle(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_full_zoom_cycle_timing() {
        // Item 2 is centered after the first tick (distance 1.75)
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
        let mut frames = FrameClock::new(Duration::from_nanos(16_666_667));

        let mut resumed_frame_offset = None;
        run(
            &mut animator,
            &mut page,
            &mut timers,
            &mut frames,
            ms(2450),
            |t, is_frame, a, p| {
                let s = a.state();
                assert!(zoomed_count(p, &items) <= 1, "two items zoomed at {t:?}");

                if t < ms(2000) {
                    assert_eq!(s.last_zoomed(), Some(items[2]));
                    assert_eq!(p.scale(items[2]), Some(1.2), "shrunk early at {t:?}");
                    assert!(p.has_state(items[2], ClassFlags::ZOOMED));
                    assert!(s.is_paused());
                    assert!(s.zoom_cooldown_active());
                    assert_eq!(s.scroll_offset(), 1.75);
                } else if t < ms(2400) {
                    assert_eq!(p.scale(items[2]), Some(1.0), "not shrunk at {t:?}");
                    assert!(!p.has_state(items[2], ClassFlags::ZOOMED));
                    assert!(s.is_paused());
                    assert!(s.zoom_cooldown_active());
                    assert_eq!(s.scroll_offset(), 1.75);
                } else if t == ms(2400) {
                    assert!(!is_frame);
                    assert!(!s.is_paused());
                    assert!(!s.zoom_cooldown_active());
                    assert_eq!(s.phase(), ZoomPhase::Idle);
                } else if is_frame && resumed_frame_offset.is_none() {
                    resumed_frame_offset = Some(s.scroll_offset());
                }
            },
        );

        assert_eq!(resumed_frame_offset, Some(3.5));
        assert_eq!(animator.state().cycle(), 1);
        assert_eq!(animator.state().last_zoomed(), Some(items[2]));
    }

    #[test]
    fn test_resumed_item_does_not_retrigger() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
        let mut frames = FrameClock::new(Duration::from_nanos(16_666_667));

        run(&mut animator, &mut page, &mut timers, &mut frames, ms(3000), |_, _, _, _| {});

        // Still inside the threshold right after resuming, but excluded
        assert_eq!(animator.state().cycle(), 1);
        assert_eq!(animator.state().last_zoomed(), Some(items[2]));
        assert!(!animator.state().is_paused());
    }

    #[test]
    fn test_next_item_triggers_after_cooldown() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
        let mut frames = FrameClock::new(Duration::from_nanos(16_666_667));

        let mut triggers = Vec::new();
        let mut last_cycle = 0;
        run(
            &mut animator,
            &mut page,
            &mut timers,
            &mut frames,
            ms(6000),
            |t, _, a, p| {
                assert!(zoomed_count(p, &items) <= 1);
                if a.state().cycle() != last_cycle {
                    last_cycle = a.state().cycle();
                    triggers.push((t, a.state().last_zoomed()));
                }
            },
        );

        // Item 3 (center 350) reaches the window after ~80 units of travel
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers[0], (Duration::ZERO, Some(items[2])));
        assert_eq!(triggers[1].1, Some(items[3]));
        assert!(triggers[1].0 > ms(2400));
    }

    #[test]
    fn test_offset_grows_by_speed_and_wraps_at_half() {
        // Viewport center far from every item: no zoom ever
        let (mut page, items) = build_page(10_000.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        let half = animator.half_track_width();
        let mut previous = 0.0;
        let mut wraps = 0;
        for _ in 0..500 {
            animator.tick(&mut page, &mut timers);
            let offset = animator.state().scroll_offset();
            if offset == 0.0 {
                wraps += 1;
                assert!(previous + 1.75 >= half);
            } else {
                assert_eq!(offset, previous + 1.75);
                assert!(offset < half);
            }
            previous = offset;
        }
        assert!(wraps >= 4);
        assert_eq!(timers.pending(), 0);
        assert!(items.iter().all(|&i| page.scale(i) == Some(1.0)));
    }

    #[test]
    fn test_track_translation_follows_offset() {
        let (mut page, _) = build_page(10_000.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.tick(&mut page, &mut timers);
        animator.tick(&mut page, &mut timers);

        let track = page.get(animator.track()).unwrap();
        assert_eq!(track.translate_x, -3.5);
    }

    #[test]
    fn test_offset_never_exceeds_half_while_cooling_down() {
        let (mut page, _) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();
        let mut frames = FrameClock::new(Duration::from_nanos(16_666_667));
        let half = animator.half_track_width();

        run(
            &mut animator,
            &mut page,
            &mut timers,
            &mut frames,
            ms(30_000),
            |_, _, a, _| {
                let s = a.state();
                if s.is_paused() || s.zoom_cooldown_active() {
                    assert!(s.scroll_offset() < half);
                }
            },
        );
        assert!(animator.state().cycle() > 2);
    }

    #[test]
    fn test_stale_and_duplicate_timers_are_noops() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.tick(&mut page, &mut timers);
        let cycle = animator.state().cycle();

        // Wrong cycle: nothing changes, nothing scheduled
        animator.on_timer(&mut page, &mut timers, CarouselTimer::HoldElapsed { cycle: cycle + 5 });
        assert_eq!(page.scale(items[2]), Some(1.2));
        assert_eq!(timers.pending(), 1);

        // Tail before hold
        animator.on_timer(&mut page, &mut timers, CarouselTimer::TailElapsed { cycle });
        assert!(animator.state().is_paused());

        // Real hold, then a duplicate
        let (_, hold) = timers.pop_due(ms(2000)).unwrap();
        animator.on_timer(&mut page, &mut timers, hold);
        animator.on_timer(&mut page, &mut timers, hold);
        assert_eq!(timers.pending(), 1);
        assert_eq!(animator.state().phase(), ZoomPhase::CooldownTail);
    }

    #[test]
    fn test_removed_item_does_not_stall_cycle() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        animator.tick(&mut page, &mut timers);
        assert_eq!(animator.state().last_zoomed(), Some(items[2]));
        page.remove(items[2]);

        let (_, hold) = timers.pop_due(ms(2000)).unwrap();
        animator.on_timer(&mut page, &mut timers, hold);
        let (_, tail) = timers.pop_due(ms(2400)).unwrap();
        animator.on_timer(&mut page, &mut timers, tail);

        assert!(!animator.state().is_paused());
        animator.tick(&mut page, &mut timers);
        assert_eq!(animator.state().scroll_offset(), 3.5);
    }

    #[test]
    fn test_relayout_drops_removed_items() {
        let (mut page, items) = build_page(10_000.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();

        page.remove(items[0]);
        animator.relayout(&mut page).unwrap();

        assert_eq!(animator.items(), &items[1..]);
        assert_eq!(animator.half_track_width(), 150.0);
        assert_eq!(page.get(items[1]).unwrap().rect.x, 0.0);
    }

    #[test]
    fn test_signals_track_state() {
        let (mut page, items) = build_page(500.0, &[100.0; 4]);
        let mut animator = Animator::mount(&mut page, CarouselConfig::default()).unwrap();
        let mut timers: Scheduler<CarouselTimer> = Scheduler::new();

        assert_eq!(animator.signals().zoomed_item.get(), None);

        animator.tick(&mut page, &mut timers);
        assert_eq!(animator.signals().scroll_offset.get(), 1.75);
        assert_eq!(animator.signals().zoomed_item.get(), Some(items[2]));
        assert!(animator.signals().is_paused.get());

        let (_, hold) = timers.pop_due(ms(2000)).unwrap();
        animator.on_timer(&mut page, &mut timers, hold);
        assert_eq!(animator.signals().zoomed_item.get(), None);
        assert!(animator.signals().is_paused.get());

        let (_, tail) = timers.pop_due(ms(2400)).unwrap();
        animator.on_timer(&mut page, &mut timers, tail);
        assert!(!animator.signals().is_paused.get());
    }
}
