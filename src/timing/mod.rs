//! Timing Module - Cooperative single-threaded time source
//!
//! Two clocks share one virtual timeline:
//!
//! - [`Scheduler`] - one-shot deferred timers (zoom hold, shrink tail,
//!   reveal delay). Nothing is ever cancelled; stale deliveries are the
//!   receiver's problem.
//! - [`FrameClock`] - the display-refresh cadence the animator ticks on.
//!
//! The host owns real time and advances the virtual clock; no thread ever
//! blocks. "Pause" elsewhere in the crate is a flag, not a wait.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use template_showcase::timing::Scheduler;
//!
//! let mut timers: Scheduler<&str> = Scheduler::new();
//! timers.schedule(Duration::from_millis(100), "reveal");
//! while let Some((at, event)) = timers.pop_due(Duration::from_millis(250)) {
//!     println!("{event} fired at {at:?}");
//! }
//! ```

mod frame;
mod scheduler;

pub use frame::FrameClock;
pub use scheduler::Scheduler;
