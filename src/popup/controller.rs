//! Popup Controller - Template preview modal and confirm redirect
//!
//! Opens a modal with the template's preview image and resume sections when
//! a template's select button is clicked. The confirm button navigates to
//! the template's form. The modal closes on a backdrop click or on Escape.

use tracing::{debug, error, info, warn};

use super::catalog::{fields_for, known_ids, redirect_for, TemplateId};
use crate::dom::{Element, Page};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::state::KeyboardEvent;
use crate::types::{ClassFlags, ElementIndex};

// =============================================================================
// PAGE CONTRACT
// =============================================================================

pub const MODAL_SELECTOR: &str = "#template-popup";
pub const IMAGE_SELECTOR: &str = "#popup-image";
pub const TITLE_SELECTOR: &str = "#popup-title";
pub const FIELDS_SELECTOR: &str = "#popup-fields";
pub const CONFIRM_SELECTOR: &str = ".final-select-btn";

/// Select buttons inside template cards.
pub const TRIGGER_SELECTOR: &str = ".template-box .select-btn";

/// Card that holds a trigger and its preview image.
const CARD_SELECTOR: &str = ".template-box";

/// Attribute on a trigger naming the template.
pub const TEMPLATE_ID_ATTR: &str = "data-template-id";

/// Fixed popup heading.
pub const POPUP_TITLE: &str = "Resume Fields";

const COMPONENT: &str = "popup";

// =============================================================================
// CONTROLLER
// =============================================================================

/// Modal state and element handles.
#[derive(Debug, Clone)]
pub struct PopupController {
    modal: ElementIndex,
    image: ElementIndex,
    title: ElementIndex,
    fields: ElementIndex,
    confirm: ElementIndex,
    selected: Option<TemplateId>,
}

impl PopupController {
    /// Find the popup elements.
    ///
    /// # Errors
    ///
    /// [`ShowcaseError::MissingElement`] naming every missing selector.
    pub fn mount(page: &Page) -> ShowcaseResult<Self> {
        let lookups = [
            MODAL_SELECTOR,
            IMAGE_SELECTOR,
            TITLE_SELECTOR,
            FIELDS_SELECTOR,
            CONFIRM_SELECTOR,
        ]
        .map(|selector| (selector, page.query(selector)));

        let missing: Vec<&str> = lookups
            .iter()
            .filter(|(_, found)| found.is_none())
            .map(|(selector, _)| *selector)
            .collect();

        match lookups {
            [(_, Some(modal)), (_, Some(image)), (_, Some(title)), (_, Some(fields)), (_, Some(confirm))] => {
                let triggers = page.query_all(TRIGGER_SELECTOR);
                let unlinked = unlinked_triggers(page, &triggers);
                if !unlinked.is_empty() {
                    warn!(?unlinked, "select buttons name templates outside the catalog");
                }
                debug!(modal, triggers = triggers.len(), "popup mounted");
                Ok(Self {
                    modal,
                    image,
                    title,
                    fields,
                    confirm,
                    selected: None,
                })
            }
            _ => {
                let selector = missing.join(", ");
                error!(component = COMPONENT, %selector, "popup elements missing");
                Err(ShowcaseError::missing(COMPONENT, selector))
            }
        }
    }

    pub fn modal(&self) -> ElementIndex {
        self.modal
    }

    pub fn confirm_button(&self) -> ElementIndex {
        self.confirm
    }

    /// Template chosen by the last select, kept after close.
    pub fn selected(&self) -> Option<&TemplateId> {
        self.selected.as_ref()
    }

    pub fn is_open(&self, page: &Page) -> bool {
        page.has_state(self.modal, ClassFlags::OPEN)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open the popup for the template named by `button`.
    ///
    /// Returns false (and changes nothing) if the button carries no
    /// template id.
    pub fn select(&mut self, page: &mut Page, button: ElementIndex) -> bool {
        let Some(id) = page
            .attribute(button, TEMPLATE_ID_ATTR)
            .filter(|id| !id.is_empty())
            .map(TemplateId::new)
        else {
            debug!(button, "select button without template id");
            return false;
        };

        let fields = fields_for(&id);
        let src = page
            .closest(button, CARD_SELECTOR)
            .and_then(|card| page.query_within(card, "img").first().copied())
            .and_then(|img| page.attribute(img, "src"))
            .unwrap_or_default()
            .to_string();

        page.set_attribute(self.image, "src", src);
        page.set_text(self.title, POPUP_TITLE);
        page.clear_children(self.fields);
        for field in fields {
            page.append(Some(self.fields), Element::new("li").with_text(*field));
        }

        page.add_class(self.modal, ClassFlags::OPEN);
        page.focus(self.confirm);

        info!(template = %id, fields = fields.len(), "template popup opened");
        self.selected = Some(id);
        true
    }

    /// Hide the popup. The selection is kept.
    pub fn close(&mut self, page: &mut Page) -> bool {
        let closed = page.remove_class(self.modal, ClassFlags::OPEN);
        if closed {
            debug!("template popup closed");
        }
        closed
    }

    /// Route a click. Returns true if the popup handled it.
    pub fn on_click(&mut self, page: &mut Page, target: ElementIndex) -> bool {
        if target == self.modal {
            return self.close(page);
        }
        if page.closest(target, CONFIRM_SELECTOR) == Some(self.confirm) {
            if let Err(err) = self.confirm(page) {
                debug!(%err, "confirm click left the popup open");
            }
            return true;
        }
        if let Some(button) = page
            .closest(target, ".select-btn")
            .filter(|&b| page.matches(b, TRIGGER_SELECTOR))
        {
            return self.select(page, button);
        }
        false
    }

    /// Close on Escape (press or auto-repeat) while open.
    pub fn on_key(&mut self, page: &mut Page, event: &KeyboardEvent) -> bool {
        if event.is_key_down("Escape") && self.is_open(page) {
            return self.close(page);
        }
        false
    }

    /// Navigate to the selected template's form.
    ///
    /// # Errors
    ///
    /// - [`ShowcaseError::NoSelection`] if nothing was selected yet
    /// - [`ShowcaseError::UnlinkedTemplate`] if the template has no route
    ///
    /// Both are also shown to the user as an alert.
    pub fn confirm(&mut self, page: &mut Page) -> ShowcaseResult<&'static str> {
        let result = match &self.selected {
            None => Err(ShowcaseError::NoSelection),
            Some(id) => redirect_for(id).ok_or_else(|| ShowcaseError::UnlinkedTemplate(id.to_string())),
        };

        match result {
            Ok(path) => {
                page.remove_class(self.modal, ClassFlags::OPEN);
                page.navigate(path);
                Ok(path)
            }
            Err(err) => {
                warn!(%err, "confirm rejected");
                page.alert(err.to_string());
                Err(err)
            }
        }
    }
}

/// Template ids on `triggers` that have no catalog entry.
fn unlinked_triggers(page: &Page, triggers: &[ElementIndex]) -> Vec<TemplateId> {
    triggers
        .iter()
        .filter_map(|&b| page.attribute(b, TEMPLATE_ID_ATTR))
        .map(TemplateId::new)
        .filter(|id| !known_ids().any(|known| known == *id))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
