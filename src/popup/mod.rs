//! Template Popup - Preview modal for the template picker
//!
//! - [`catalog`] - Field lists and form routes per template id
//! - [`controller`] - Modal open/close and the confirm redirect
//!
//! # Example
//!
//! ```ignore
//! use template_showcase::popup::PopupController;
//!
//! let mut popup = PopupController::mount(&page)?;
//! popup.select(&mut page, select_button);
//! popup.confirm(&mut page)?; // navigates to the template's form
//! ```

pub mod catalog;
mod controller;

pub use catalog::{fields_for, redirect_for, TemplateId};
pub use controller::{
    PopupController, CONFIRM_SELECTOR, FIELDS_SELECTOR, IMAGE_SELECTOR, MODAL_SELECTOR,
    POPUP_TITLE, TEMPLATE_ID_ATTR, TITLE_SELECTOR, TRIGGER_SELECTOR,
};
