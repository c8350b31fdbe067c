//! Document type and related utilities
//!
//! The root container for content trees, with query and traversal APIs.

use super::{Element, Node};
use crate::heading;

// =============================================================================
// Document
// =============================================================================

/// Root document container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Root element (a container such as `div.post-content`)
    pub root: Element,
}

impl Document {
    /// Create a new document with a root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first search)
    pub fn find_element<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.root.find(predicate)
    }

    /// Find all elements matching predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().filter(|e| predicate(e)).collect()
    }

    /// Check if any element matches predicate
    pub fn has_element<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.find_element(predicate).is_some()
    }

    /// Count total elements in document
    pub fn element_count(&self) -> usize {
        self.iter_elements().count()
    }

    /// Iterate over all elements (depth-first)
    pub fn iter_elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.root)
    }

    /// Visit all elements with a closure (mutable)
    pub fn for_each_element_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        self.root.for_each_element_mut(&mut f);
    }

    /// Collect statistics about the document
    pub fn collect_stats(&self) -> Stats {
        let mut stats = Stats::default();
        Self::collect_stats_recursive(&self.root, &mut stats);
        stats
    }

    fn collect_stats_recursive(elem: &Element, stats: &mut Stats) {
        stats.element_count += 1;

        if heading::is_heading_tag(&elem.tag) {
            stats.heading_count += 1;
        } else if elem.tag == "a" {
            stats.link_count += 1;
        } else if elem.tag == "pre" {
            stats.code_block_count += 1;
        }

        for child in &elem.children {
            match child {
                Node::Element(e) => Self::collect_stats_recursive(e, stats),
                Node::Text(_) => stats.text_count += 1,
            }
        }
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    fn new(root: &'a Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

// =============================================================================
// Stats - document statistics
// =============================================================================

/// Document statistics collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub heading_count: usize,
    pub link_count: usize,
    pub code_block_count: usize,
    pub text_count: usize,
    pub element_count: usize,
}

impl Stats {
    pub fn has_headings(&self) -> bool {
        self.heading_count > 0
    }

    pub fn has_code(&self) -> bool {
        self.code_block_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_stats() {
        let root = Element::new("div")
            .child(Element::new("h1").text("Title"))
            .child(Element::new("p").text("see ").child(Element::new("a").text("here")))
            .child(Element::new("pre").child(Element::new("code").text("x")));

        let stats = Document::new(root).collect_stats();
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.link_count, 1);
        assert_eq!(stats.code_block_count, 1);
        assert_eq!(stats.element_count, 6);
        assert_eq!(stats.text_count, 4);
        assert!(stats.has_headings());
    }

    #[test]
    fn test_find_all_in_document_order() {
        let root = Element::new("div")
            .child(Element::new("h2").text("a"))
            .child(Element::new("section").child(Element::new("h3").text("b")))
            .child(Element::new("h2").text("c"));

        let doc = Document::new(root);
        let texts: Vec<_> = doc
            .find_all(|e| heading::is_heading_tag(&e.tag))
            .into_iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
