//! Selector - the small CSS subset the page contract needs.
//!
//! Supported grammar:
//!
//! ```text
//! selector := compound (' '+ compound)*      descendant combinator only
//! compound := tag? ('#' ident)? ('.' ident)*  at least one part
//! ```
//!
//! That covers `#template-popup`, `.slideshow-track`, `img` and
//! `.template-box .select-btn`.

use super::element::Element;

/// One compound selector (`div#id.a.b`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    /// Check if an element satisfies every part of this compound.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }

    fn parse(input: &str) -> Option<Self> {
        let mut compound = Compound::default();
        let mut chars = input.chars().peekable();

        let tag = take_ident(&mut chars);
        if !tag.is_empty() {
            compound.tag = Some(tag);
        }

        while let Some(sigil) = chars.next() {
            let ident = take_ident(&mut chars);
            if ident.is_empty() {
                return None;
            }
            match sigil {
                '#' if compound.id.is_none() => compound.id = Some(ident),
                '.' => compound.classes.push(ident),
                _ => return None,
            }
        }

        if compound.tag.is_none() && compound.id.is_none() && compound.classes.is_empty() {
            return None;
        }
        Some(compound)
    }
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

/// Chain of compounds joined by the descendant combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    subject: Compound,
    /// Outermost first.
    ancestors: Vec<Compound>,
}

impl Selector {
    /// Parse a selector. Returns `None` for anything outside the subset.
    pub fn parse(input: &str) -> Option<Self> {
        let mut ancestors = input
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;
        let subject = ancestors.pop()?;
        Some(Self { subject, ancestors })
    }

    /// Compound the element itself must match.
    pub fn subject(&self) -> &Compound {
        &self.subject
    }

    /// Compounds that must match ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.ancestors.iter().rev()
    }
}
