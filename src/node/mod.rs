//! Node types for the rendered content tree.
//!
//! This module provides `Element`, `Node`, `Text`, and `Document`.
//! The tree is owned and mutable: the document renderer builds it from the
//! conversion engine's output, the outline builder assigns heading ids in
//! place, and the scroll spy toggles classes on outline links.

mod element;
mod text;
mod document;

pub use element::Element;
pub use text::{Text, TextKind};
pub use document::{Document, ElementIterator, Stats};

use smallvec::SmallVec;

/// Node in a content tree - either Element or Text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    // Generates for each variant (element -> Element, text -> Text):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text);

    /// Unwrap an element node
    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(elem) => Some(*elem),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_new() {
        let elem = Element::new("div");
        assert_eq!(elem.tag, "div");
        assert!(elem.is_empty());
    }

    #[test]
    fn test_element_attrs() {
        let mut elem = Element::new("div");
        elem.set_attr("class", "container");
        elem.set_attr("id", "main");

        assert_eq!(elem.get_attr("class"), Some("container"));
        assert_eq!(elem.id(), Some("main"));
        assert_eq!(elem.class(), Some("container"));
        assert!(elem.has_attr("class"));
        assert!(!elem.has_attr("style"));
    }

    #[test]
    fn test_element_children() {
        let mut parent = Element::new("div");
        parent.push_elem(Element::new("span"));
        parent.push_text("Hello");

        assert_eq!(parent.len(), 2);
        assert!(!parent.is_empty());
        assert_eq!(parent.text_content(), "Hello");

        let span = parent.first_child().unwrap();
        assert_eq!(span.tag, "span");
    }

    #[test]
    fn test_element_builder() {
        let elem = Element::new("div")
            .with_id("main")
            .with_class("container")
            .attr("data-foo", "bar")
            .child(Element::new("span"))
            .text("Hello");

        assert_eq!(elem.id(), Some("main"));
        assert_eq!(elem.class(), Some("container"));
        assert_eq!(elem.get_attr("data-foo"), Some("bar"));
        assert_eq!(elem.len(), 2);
    }

    #[test]
    fn test_node_accessors() {
        let mut node: Node = Element::new("p").into();
        assert!(node.is_element());
        assert!(!node.is_text());
        node.as_element_mut().unwrap().push_text("x");
        assert_eq!(node.as_element().unwrap().text_content(), "x");

        let text: Node = Text::new("hi").into();
        assert_eq!(text.as_text().map(|t| t.content.as_str()), Some("hi"));
        assert!(text.as_element().is_none());
    }

    #[test]
    fn test_document_find() {
        let root = Element::new("div")
            .child(Element::new("span").with_class("highlight"))
            .child(Element::new("p"));

        let doc = Document::new(root);

        let span = doc.find_element(|e| e.tag == "span").unwrap();
        assert_eq!(span.class(), Some("highlight"));

        assert!(doc.find_element(|e| e.tag == "missing").is_none());
        assert!(doc.has_element(|e| e.tag == "p"));
    }

    #[test]
    fn test_document_elements_iterator() {
        let root = Element::new("div")
            .child(Element::new("span").child(Element::new("em")))
            .child(Element::new("p"));

        let doc = Document::new(root);
        let tags: Vec<_> = doc.iter_elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "span", "em", "p"]);
    }
}
