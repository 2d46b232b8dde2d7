//! Element - one node of the page arena.

use std::collections::HashMap;

use crate::types::{ClassFlags, ElementIndex, Rect};

/// A page element.
///
/// `rect` is relative to the parent element. Layout may overwrite its
/// position; the size is what the host (or fixture) declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    /// Structural classes (`template`, `select-btn`, ...).
    pub classes: Vec<String>,
    /// Runtime visual-state classes.
    pub state: ClassFlags,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub rect: Rect,
    /// Horizontal translation applied on top of `rect` (track scrolling).
    pub translate_x: f64,
    /// Scale around the box center.
    pub scale: f64,
    pub(crate) parent: Option<ElementIndex>,
    pub(crate) children: Vec<ElementIndex>,
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            state: ClassFlags::NONE,
            attributes: HashMap::new(),
            text: String::new(),
            rect: Rect::default(),
            translate_x: 0.0,
            scale: 1.0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class. State markers (`zoomed`, `visible`, `open`) land in
    /// `state`, everything else in `classes`.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        match ClassFlags::from_class_name(&class) {
            Some(flag) => self.state |= flag,
            None => {
                if !self.classes.contains(&class) {
                    self.classes.push(class);
                }
            }
        }
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Declare the box size, leaving position to layout.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.rect.width = width;
        self.rect.height = height;
        self
    }

    /// Check a structural class or a state marker by name.
    pub fn has_class(&self, class: &str) -> bool {
        match ClassFlags::from_class_name(class) {
            Some(flag) => self.state.contains(flag),
            None => self.classes.iter().any(|c| c == class),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn parent(&self) -> Option<ElementIndex> {
        self.parent
    }

    pub fn children(&self) -> &[ElementIndex] {
        &self.children
    }
}
