//! Template Catalog - Field lists and form routes per template id
//!
//! The two tables are independent: an id can have fields without a route
//! (the popup opens but confirm reports "not linked") and vice versa.

use std::fmt;

/// Template identifier as read from a trigger's `data-template-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// TABLES
// =============================================================================

const TEMPLATE_FIELDS: &[(&str, &[&str])] = &[
    (
        "1",
        &["Contact", "Profile", "Technical Skills", "Certificates", "Language", "Education"],
    ),
    (
        "2",
        &[
            "Contact",
            "Education",
            "Expertise",
            "Language",
            "About me",
            "Work Experience",
            "Internships",
        ],
    ),
    (
        "3",
        &["Profile", "Contact", "Education", "Skills", "Professional Experience"],
    ),
    (
        "4",
        &[
            "Contact",
            "Hard Skills",
            "Soft Skills",
            "Education",
            "About Me",
            "Professional Experience",
            "Achievements",
        ],
    ),
    (
        "5",
        &["Contact", "Profile", "Education", "Skills", "Languages", "Certificates"],
    ),
    // wide template
    (
        "6",
        &["Contact", "About Me", "Skills", "Certificates", "Education", "Experience"],
    ),
];

const REDIRECTS: &[(&str, &str)] = &[
    ("1", "/form/template5"),
    ("2", "/form/template2"),
    ("3", "/form/template3"),
    ("4", "/form/template4"),
    ("5", "/form/template5"),
    ("6", "/form/template1"),
];

/// Resume sections shown in the popup. Unknown ids have none.
pub fn fields_for(id: &TemplateId) -> &'static [&'static str] {
    TEMPLATE_FIELDS
        .iter()
        .find(|(key, _)| *key == id.as_str())
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Form route the confirm button navigates to.
pub fn redirect_for(id: &TemplateId) -> Option<&'static str> {
    REDIRECTS
        .iter()
        .find(|(key, _)| *key == id.as_str())
        .map(|(_, path)| *path)
}

/// Every id with a field list, in catalog order.
pub fn known_ids() -> impl Iterator<Item = TemplateId> {
    TEMPLATE_FIELDS.iter().map(|(id, _)| TemplateId::new(*id))
}
