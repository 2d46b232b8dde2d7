//! Page Model - In-memory document the presentation layer drives
//!
//! The components never talk to a real browser. They read geometry from and
//! write visual state into a [`Page`]: an arena of [`Element`]s addressed by
//! [`ElementIndex`](crate::types::ElementIndex), plus viewport, focus,
//! location and the list of user-facing notices.
//!
//! A host renderer mirrors the page after each frame; tests assert on it
//! directly.
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::dom::{Element, Page};
//! use template_showcase::types::Viewport;
//!
//! let mut page = Page::new(Viewport::new(1200.0, 800.0));
//! let modal = page.append(None, Element::new("div").with_id("template-popup"));
//! page.query("#template-popup"); // Some(modal)
//! ```

mod element;
mod page;
mod selector;

pub use element::Element;
pub use page::{Page, DEFAULT_LOCATION};
pub use selector::{Compound, Selector};
