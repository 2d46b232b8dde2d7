//! Error types.
//!
//! Nothing here is fatal to the page as a whole. Missing elements abort the
//! affected component at mount; the confirm-time errors double as the
//! user-facing notice text.

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShowcaseError {
    #[error("{component}: required element(s) missing: {selector}")]
    MissingElement {
        component: &'static str,
        selector: String,
    },

    #[error("layout error: {0}")]
    Layout(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("Please select a template first!")]
    NoSelection,

    #[error("This template is not linked yet!")]
    UnlinkedTemplate(String),
}

impl ShowcaseError {
    pub fn missing(component: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement {
            component,
            selector: selector.into(),
        }
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for errors that should be shown to the user as a notice.
    pub fn is_user_notice(&self) -> bool {
        matches!(self, Self::NoSelection | Self::UnlinkedTemplate(_))
    }
}
