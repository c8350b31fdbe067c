//! Element type - HTML elements in the content tree
//!
//! The core building block of rendered documents, outline lists and cards.

use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: String,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the `id` attribute
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_attr("id", id);
        self
    }

    /// Set the `class` attribute
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.set_attr("class", class);
        self
    }

    /// Set an arbitrary attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.push_elem(child);
        self
    }

    /// Append several child elements
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self.push_elem(child);
        }
        self
    }

    /// Append an escaped text node
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push_text(content);
        self
    }

    /// Append a raw (pre-rendered markup) text node
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::raw(markup)));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// `id` attribute, if set and non-empty
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id").filter(|id| !id.is_empty())
    }

    /// Raw `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs.has_class(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.attrs.add_class(class);
    }

    pub fn remove_class(&mut self, class: &str) {
        self.attrs.remove_class(class);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a child element
    pub fn push_elem(&mut self, child: Element) {
        self.children.push(Node::Element(Box::new(child)));
    }

    /// Append an escaped text node
    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Node::Text(Text::new(content)));
    }

    /// Append any node
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Replace all children (the `innerHTML = ...` of the tree)
    pub fn replace_children(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.clear();
        self.children.extend(children);
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// First child element, skipping text
    pub fn first_child(&self) -> Option<&Element> {
        self.children_elements().next()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Iterate over child element mutable references
    pub fn children_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| n.as_element_mut())
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Traversal (document order, self first)
    // ─────────────────────────────────────────────────────────────────────────

    /// Visit this element and all descendants (read-only)
    pub fn for_each_element<F>(&self, f: &mut F)
    where
        F: FnMut(&Element),
    {
        f(self);
        for child in self.children_elements() {
            child.for_each_element(f);
        }
    }

    /// Visit this element and all descendants (mutable)
    pub fn for_each_element_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(self);
        for child in self.children_elements_mut() {
            child.for_each_element_mut(f);
        }
    }

    /// Find first element matching predicate (depth-first)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_ref(&predicate)
    }

    fn find_ref<F>(&self, predicate: &F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children_elements().find_map(|c| c.find_ref(predicate))
    }

    /// Find first element matching predicate (mutable)
    pub fn find_mut<F>(&mut self, predicate: F) -> Option<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_mut_ref(&predicate)
    }

    fn find_mut_ref<F>(&mut self, predicate: &F) -> Option<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        for child in self.children_elements_mut() {
            if let Some(found) = child.find_mut_ref(predicate) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_children() {
        let mut elem = Element::new("div").text("old").child(Element::new("span"));
        elem.replace_children([Node::from(Element::new("p").text("new"))]);
        assert_eq!(elem.len(), 1);
        assert_eq!(elem.text_content(), "new");
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut root = Element::new("ul")
            .child(Element::new("li").child(Element::new("a").attr("data-heading-id", "x")));

        let link = root.find_mut(|e| e.get_attr("data-heading-id") == Some("x")).unwrap();
        link.add_class("active");

        assert!(root.find(|e| e.has_class("active")).is_some());
    }

    #[test]
    fn test_empty_id_is_absent() {
        let elem = Element::new("h2").with_id("");
        assert_eq!(elem.id(), None);
    }
}
