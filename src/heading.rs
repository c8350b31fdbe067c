//! Heading recognition: `<h1>` through `<h6>`.
//!
//! The outline only scans levels 1–4 (`is_outline_heading`); the same predicate
//! selects the headings observed by the scroll spy.

use crate::node::Element;

/// Deepest heading level collected into the outline and observed by the spy.
pub const OUTLINE_MAX_LEVEL: u8 = 4;

/// Check if a tag is any heading tag (`h1`..`h6`)
pub fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Parse level from tag name: "h1" → 1
///
/// Returns `None` for non-heading tags.
pub fn level_from_tag(tag: &str) -> Option<u8> {
    if !is_heading_tag(tag) {
        return None;
    }
    tag.chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
}

/// Whether an element is matched by the outline query (h1–h4)
pub fn is_outline_heading(elem: &Element) -> bool {
    level_from_tag(&elem.tag).is_some_and(|level| level <= OUTLINE_MAX_LEVEL)
}

/// Slugify heading text for use in identifiers.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims leading/trailing separators.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }
    slug
}
