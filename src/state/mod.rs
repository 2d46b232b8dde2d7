//! State modules - Input event types and terminal conversion
//!
//! - [`keyboard`] - Keyboard event types
//! - [`input`] - crossterm event conversion and polling

pub mod input;
pub mod keyboard;

pub use input::{
    convert_event, convert_key_event, convert_mouse_event, poll_event, CellMetrics, InputEvent,
};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
