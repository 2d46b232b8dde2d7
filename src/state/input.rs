//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the page. Key events become
//! [`KeyboardEvent`]s, mouse presses are hit-tested into element clicks and
//! wheel events into page scrolls. Terminal cells map onto page units
//! through [`CellMetrics`].
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::state::input::{poll_event, CellMetrics};
//! use std::time::Duration;
//!
//! let metrics = CellMetrics::default();
//! loop {
//!     if let Ok(Some(event)) = poll_event(handle.page(), metrics, Duration::from_millis(16)) {
//!         handle.dispatch(event);
//!     }
//!     handle.advance(Duration::from_millis(16));
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use crate::dom::Page;
use crate::types::ElementIndex;

/// Lines scrolled per wheel notch.
pub const WHEEL_LINES: f64 = 3.0;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the page
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press/repeat/release
    Key(KeyboardEvent),
    /// Primary-button click on an element
    Click(ElementIndex),
    /// Vertical page scroll by `delta_y` page units (positive is down)
    Scroll { delta_y: f64 },
    /// Viewport resize in page units
    Resize { width: f64, height: f64 },
    /// No event or unhandled event type
    None,
}

/// Size of one terminal cell in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 1.0,
            cell_height: 1.0,
        }
    }
}

impl CellMetrics {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Center of the cell in page units.
    fn to_page(self, column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to a page event.
///
/// Left presses hit-test the page; a press on empty space is `None`.
pub fn convert_mouse_event(
    page: &Page,
    metrics: CellMetrics,
    event: CrosstermMouseEvent,
) -> InputEvent {
    match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => {
            let (x, y) = metrics.to_page(event.column, event.row);
            page.hit_test(x, y).map_or(InputEvent::None, InputEvent::Click)
        }
        MouseEventKind::ScrollDown => InputEvent::Scroll {
            delta_y: WHEEL_LINES * metrics.cell_height,
        },
        MouseEventKind::ScrollUp => InputEvent::Scroll {
            delta_y: -WHEEL_LINES * metrics.cell_height,
        },
        _ => InputEvent::None,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Convert any crossterm event.
pub fn convert_event(page: &Page, metrics: CellMetrics, event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(page, metrics, mouse),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize {
            width: w as f64 * metrics.cell_width,
            height: h as f64 * metrics.cell_height,
        },
        _ => InputEvent::None,
    }
}

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(
    page: &Page,
    metrics: CellMetrics,
    timeout: Duration,
) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(page, metrics, read()?)))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================
