//! Layout Module - Carousel track positioning
//!
//! Uses [Taffy](https://github.com/DioxusLabs/taffy) to lay the carousel items
//! out as a single non-wrapping flex row. The bridge:
//!
//! 1. Converts item boxes → Taffy leaf styles (fixed size, no shrink)
//! 2. Builds a row container with the configured gap
//! 3. Computes at max-content width so the row never wraps
//! 4. Writes item positions and the track width back to the page
//!
//! Item positions are relative to the track; the animator's translation is
//! applied on top by [`Page::bounding_rect`](crate::dom::Page::bounding_rect).
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::layout::compute_track_layout;
//!
//! let layout = compute_track_layout(&mut page, track, &items, 0.0)?;
//! let wrap_at = layout.half_width();
//! ```

mod taffy_bridge;
mod types;

pub use taffy_bridge::compute_track_layout;
pub use types::TrackLayout;
