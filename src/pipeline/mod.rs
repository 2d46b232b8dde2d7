//! Page Pipeline
//!
//! Connects the components to one page and one virtual clock.
//!
//! # Loop Architecture
//!
//! ```text
//! input events ──dispatch──▶ popup / revealer ──▶ page
//! advance(dt) ──▶ timers due ≤ frame ──▶ frame tick (carousel) ──▶ page
//! ```
//!
//! ## Ordering
//!
//! 1. Timers fire in due-time order, ties in scheduling order
//! 2. A timer due at or before a frame's time fires before that frame
//! 3. Within a frame: position update, wrap check, center detection

pub mod mount;

pub use mount::{mount, unmount, MountHandle, PageTimer};
