//! Page - element arena, viewport, focus, location and notices.
//!
//! Manages the lifecycle of element indices:
//! - id → index lookup
//! - parent/children links for descendant selectors and geometry
//! - removed slots stay `None` so stale indices resolve to nothing

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::element::Element;
use super::selector::Selector;
use crate::types::{ClassFlags, ElementIndex, Rect, Viewport};

/// Location a freshly created page reports.
pub const DEFAULT_LOCATION: &str = "/select_template";

/// In-memory document.
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Option<Element>>,
    ids: HashMap<String, ElementIndex>,
    viewport: Viewport,
    scroll_y: f64,
    focused: Option<ElementIndex>,
    location: String,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Page {
    /// Create an empty page.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            ids: HashMap::new(),
            viewport,
            scroll_y: 0.0,
            focused: None,
            location: DEFAULT_LOCATION.to_string(),
            alerts: Vec::new(),
        }
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// Append an element under `parent` (or as a root).
    ///
    /// A parent index that no longer resolves makes the element a root.
    pub fn append(&mut self, parent: Option<ElementIndex>, mut element: Element) -> ElementIndex {
        let index = self.elements.len();
        let parent = parent.filter(|&p| self.get(p).is_some());

        element.parent = parent;
        element.children.clear();
        if let Some(id) = &element.id {
            if self.ids.insert(id.clone(), index).is_some() {
                warn!(id = %id, "duplicate element id, later element wins");
            }
        }
        self.elements.push(Some(element));

        if let Some(p) = parent {
            if let Some(Some(parent_el)) = self.elements.get_mut(p) {
                parent_el.children.push(index);
            }
        }
        index
    }

    /// Remove an element and its subtree. Returns false if already gone.
    pub fn remove(&mut self, index: ElementIndex) -> bool {
        let Some(parent) = self.get(index).map(|el| el.parent) else {
            return false;
        };
        if let Some(p) = parent {
            if let Some(Some(parent_el)) = self.elements.get_mut(p) {
                parent_el.children.retain(|&c| c != index);
            }
        }
        self.remove_subtree(index);
        true
    }

    fn remove_subtree(&mut self, index: ElementIndex) {
        let Some(element) = self.elements.get_mut(index).and_then(Option::take) else {
            return;
        };
        if let Some(id) = &element.id {
            if self.ids.get(id) == Some(&index) {
                self.ids.remove(id);
            }
        }
        if self.focused == Some(index) {
            self.focused = None;
        }
        for child in element.children {
            self.remove_subtree(child);
        }
    }

    /// Remove every child of `index`.
    pub fn clear_children(&mut self, index: ElementIndex) {
        let children = match self.get_mut(index) {
            Some(el) => std::mem::take(&mut el.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    pub fn get(&self, index: ElementIndex) -> Option<&Element> {
        self.elements.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: ElementIndex) -> Option<&mut Element> {
        self.elements.get_mut(index).and_then(Option::as_mut)
    }

    /// Check if an index still resolves to an element.
    pub fn contains(&self, index: ElementIndex) -> bool {
        self.get(index).is_some()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live element indices in document (depth-first) order.
    pub fn document_order(&self) -> Vec<ElementIndex> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<ElementIndex> = self
            .elements
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(i, e)| e.as_ref().filter(|e| e.parent.is_none()).map(|_| i))
            .collect();

        while let Some(index) = stack.pop() {
            order.push(index);
            if let Some(el) = self.get(index) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        order
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn by_id(&self, id: &str) -> Option<ElementIndex> {
        self.ids.get(id).copied()
    }

    /// First element matching `selector` in document order.
    pub fn query(&self, selector: &str) -> Option<ElementIndex> {
        let selector = Selector::parse(selector)?;
        self.document_order()
            .into_iter()
            .find(|&i| self.matches_parsed(i, &selector))
    }

    /// Every element matching `selector` in document order.
    pub fn query_all(&self, selector: &str) -> Vec<ElementIndex> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.document_order()
            .into_iter()
            .filter(|&i| self.matches_parsed(i, &selector))
            .collect()
    }

    /// Matching descendants of `root` (excluding `root`) in document order.
    pub fn query_within(&self, root: ElementIndex, selector: &str) -> Vec<ElementIndex> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        let mut stack: Vec<ElementIndex> = match self.get(root) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return found,
        };
        while let Some(index) = stack.pop() {
            if self.matches_parsed(index, &selector) {
                found.push(index);
            }
            if let Some(el) = self.get(index) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        found
    }

    /// Check an element against a selector string.
    pub fn matches(&self, index: ElementIndex, selector: &str) -> bool {
        Selector::parse(selector).is_some_and(|s| self.matches_parsed(index, &s))
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, index: ElementIndex, selector: &str) -> Option<ElementIndex> {
        let selector = Selector::parse(selector)?;
        let mut current = Some(index);
        while let Some(i) = current {
            if self.matches_parsed(i, &selector) {
                return Some(i);
            }
            current = self.get(i)?.parent;
        }
        None
    }

    fn matches_parsed(&self, index: ElementIndex, selector: &Selector) -> bool {
        let Some(el) = self.get(index) else {
            return false;
        };
        if !selector.subject().matches(el) {
            return false;
        }

        // Descendant combinator: greedy walk up the ancestor chain
        let mut ancestor = el.parent;
        for compound in selector.ancestors() {
            loop {
                let Some(a) = ancestor.and_then(|a| self.get(a).map(|el| (a, el))) else {
                    return false;
                };
                ancestor = a.1.parent;
                if compound.matches(a.1) {
                    break;
                }
            }
        }
        true
    }

    // =========================================================================
    // Visual State
    // =========================================================================

    /// Set a state marker. Returns false if the element is gone.
    pub fn add_class(&mut self, index: ElementIndex, flag: ClassFlags) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.state |= flag;
                true
            }
            None => false,
        }
    }

    /// Clear a state marker. Returns false if the element is gone.
    pub fn remove_class(&mut self, index: ElementIndex, flag: ClassFlags) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.state.remove(flag);
                true
            }
            None => false,
        }
    }

    pub fn has_state(&self, index: ElementIndex, flag: ClassFlags) -> bool {
        self.get(index).is_some_and(|el| el.state.contains(flag))
    }

    /// Elements currently carrying `flag`.
    pub fn with_state(&self, flag: ClassFlags) -> Vec<ElementIndex> {
        self.document_order()
            .into_iter()
            .filter(|&i| self.has_state(i, flag))
            .collect()
    }

    pub fn set_scale(&mut self, index: ElementIndex, scale: f64) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.scale = scale;
                true
            }
            None => false,
        }
    }

    pub fn scale(&self, index: ElementIndex) -> Option<f64> {
        self.get(index).map(|el| el.scale)
    }

    pub fn set_translate_x(&mut self, index: ElementIndex, x: f64) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.translate_x = x;
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, index: ElementIndex, text: impl Into<String>) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_attribute(
        &mut self,
        index: ElementIndex,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.get_mut(index) {
            Some(el) => {
                el.attributes.insert(name.into(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn attribute(&self, index: ElementIndex, name: &str) -> Option<&str> {
        self.get(index)?.attribute(name)
    }

    /// Text of every child, in order.
    pub fn child_texts(&self, index: ElementIndex) -> Vec<String> {
        self.get(index)
            .map(|el| {
                el.children
                    .iter()
                    .filter_map(|&c| self.get(c).map(|child| child.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Vertical document scroll position.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Viewport-relative box of an element, including ancestor offsets,
    /// translations and the element's own scale.
    pub fn bounding_rect(&self, index: ElementIndex) -> Option<Rect> {
        let el = self.get(index)?;
        let mut x = el.rect.x + el.translate_x;
        let mut y = el.rect.y;

        let mut parent = el.parent;
        while let Some(p) = parent {
            let parent_el = self.get(p)?;
            x += parent_el.rect.x + parent_el.translate_x;
            y += parent_el.rect.y;
            parent = parent_el.parent;
        }

        let rect = Rect::new(x, y - self.scroll_y, el.rect.width, el.rect.height);
        Some(rect.scaled(el.scale))
    }

    /// Deepest element whose box contains the viewport point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ElementIndex> {
        self.document_order().into_iter().rev().find(|&i| {
            self.bounding_rect(i)
                .is_some_and(|r| r.width > 0.0 && r.height > 0.0 && r.contains(x, y))
        })
    }

    // =========================================================================
    // Focus / Navigation / Notices
    // =========================================================================

    /// Focus an element. Returns false if the element is gone.
    pub fn focus(&mut self, index: ElementIndex) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.focused = Some(index);
        true
    }

    pub fn focused(&self) -> Option<ElementIndex> {
        self.focused
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Full-page navigation.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        info!(from = %self.location, to = %path, "navigating");
        self.location = path;
    }

    /// Surface a blocking notice to the user.
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "alert");
        self.alerts.push(message);
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

// =============================================================================
// Tests
// =============================================================================
