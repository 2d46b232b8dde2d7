//! Carousel - Auto-scrolling template track with center zoom
//!
//! The track moves left by a fixed amount every frame. When an item's center
//! comes within the threshold of the viewport center, motion pauses, the
//! item is enlarged for the hold period, shrinks back, and motion resumes
//! after a short settle. The track holds two copies of the item sequence so
//! resetting the offset at half the track width is seamless.
//!
//! # Modules
//!
//! - [`state`] - Pure animator state and zoom phase transitions
//! - [`animator`] - Page side effects, center detection, timers
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::carousel::Animator;
//! use template_showcase::config::CarouselConfig;
//!
//! let animator = Animator::mount(&mut page, CarouselConfig::default())?;
//! assert_eq!(animator.state().speed(), 1.75);
//! ```

mod animator;
mod state;

pub use animator::{
    Animator, CarouselSignals, CONTAINER_SELECTOR, ITEM_SELECTOR, TRACK_SELECTOR,
};
pub use state::{AnimatorState, CarouselTimer, StaleTimer, ZoomPhase};
