//! # template-showcase
//!
//! Presentation layer for a resume-template picker.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive state and [Taffy](https://github.com/DioxusLabs/taffy) for layout.
//!
//! ## Architecture
//!
//! Components never touch a real browser. They read geometry from and write
//! visual state into an in-memory [`Page`](dom::Page), and run on a single
//! virtual clock shared by animation frames and one-shot timers:
//!
//! ```text
//! Page ─▶ carousel::Animator ─┐
//!      ─▶ reveal::ScrollRevealer ─┼─▶ pipeline::MountHandle ◀─ advance(dt) / dispatch(event)
//!      ─▶ popup::PopupController ─┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, element indices, state markers
//! - [`error`] - `ShowcaseError`
//! - [`config`] - Tunables with defaults
//! - [`dom`] - In-memory page model with a small selector engine
//! - [`layout`] - Taffy layout of the carousel track
//! - [`timing`] - Virtual-time scheduler and frame clock
//! - [`carousel`] - Auto-scrolling track with the center zoom cycle
//! - [`reveal`] - One-shot scroll reveal
//! - [`popup`] - Template preview modal and confirm redirect
//! - [`state`] - Keyboard events and crossterm input conversion
//! - [`pipeline`] - Mount handle driving all components

pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod popup;
pub mod reveal;
pub mod state;
pub mod timing;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use types::*;

pub use error::{ShowcaseError, ShowcaseResult};

pub use config::{CarouselConfig, FrameConfig, RevealConfig, ShowcaseConfig};

pub use dom::{Element, Page};

pub use carousel::{Animator, AnimatorState, CarouselSignals, CarouselTimer, ZoomPhase};

pub use reveal::{RevealTimer, ScrollRevealer};

pub use popup::{PopupController, TemplateId};

pub use state::{CellMetrics, InputEvent, KeyboardEvent, KeyState, Modifiers};

pub use timing::{FrameClock, Scheduler};

pub use pipeline::{mount, unmount, MountHandle, PageTimer};
