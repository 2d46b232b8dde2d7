//! Core types for template-showcase.
//!
//! Geometry and visual-state markers shared by the page model, the carousel
//! animator, the scroll revealer and the template popup.

// =============================================================================
// Element Index
// =============================================================================

/// Index of an element in the [`Page`](crate::dom::Page) arena.
///
/// Indices are stable for the lifetime of the element. A removed element's
/// index is never handed out again.
pub type ElementIndex = usize;

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned box in page units.
///
/// For element boxes stored on the page, `x`/`y` are relative to the parent
/// element. [`Page::bounding_rect`](crate::dom::Page::bounding_rect) returns
/// viewport-relative boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Check if a point lies inside (right/bottom edges exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Scale the rect around its center.
    pub fn scaled(&self, factor: f64) -> Self {
        let width = self.width * factor;
        let height = self.height * factor;
        Self {
            x: self.x - (width - self.width) / 2.0,
            y: self.y - (height - self.height) / 2.0,
            width,
            height,
        }
    }
}

/// Visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal center line of the viewport.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

// =============================================================================
// Visual State Markers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Runtime visual-state classes toggled by the presentation layer.
    ///
    /// Structural classes (`template`, `select-btn`, ...) live on the element
    /// as plain strings; these are the ones the renderer styles on change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassFlags: u8 {
        const NONE = 0;
        /// Carousel item is enlarged.
        const ZOOMED = 1 << 0;
        /// One-shot reveal has completed.
        const VISIBLE = 1 << 1;
        /// Modal is shown.
        const OPEN = 1 << 2;
    }
}

impl ClassFlags {
    /// Look up a state marker by its CSS class name (`"zoomed"`, not the
    /// flag identifier `"ZOOMED"`).
    pub fn from_class_name(class: &str) -> Option<Self> {
        match class {
            "zoomed" => Some(Self::ZOOMED),
            "visible" => Some(Self::VISIBLE),
            "open" => Some(Self::OPEN),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
