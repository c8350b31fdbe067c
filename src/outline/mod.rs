//! Outline (table of contents) derived from a rendered document's headings.
//!
//! # Module Structure
//!
//! - `OutlineNode` / `Outline` - the heading forest
//! - `builder` - heading scan, id assignment and placement
//!
//! The outline is rebuilt from scratch after every render; nothing is
//! patched incrementally.

mod builder;

pub use builder::{build, heading_id, place, OUTLINE_ID_PREFIX};

use crate::node::{Element, Node};

/// Class on outline links; the scroll spy toggles `active` on these.
pub const TOC_LINK_CLASS: &str = "toc-link";

/// Attribute on outline links naming the heading they point to.
pub const HEADING_ID_ATTR: &str = "data-heading-id";

/// Text of the empty-state list item.
pub const NO_HEADINGS_MESSAGE: &str = "No headings found";

// =============================================================================
// OutlineNode
// =============================================================================

/// One heading in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Heading level (1–4)
    pub level: u8,
    /// Display text
    pub text: String,
    /// Identifier of the heading element
    pub id: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a node without children.
    pub fn leaf(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

// =============================================================================
// Outline
// =============================================================================

/// Heading forest of a document, or the explicit "no headings" marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outline {
    /// The document has no h1–h4 headings
    #[default]
    Empty,
    /// Top-level entries in document order
    Forest(Vec<OutlineNode>),
}

impl Outline {
    /// Scan `content`, assign missing heading ids, and build the forest.
    pub fn build(content: &mut Element) -> Self {
        build(content)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Top-level entries (empty slice for `Empty`).
    pub fn roots(&self) -> &[OutlineNode] {
        match self {
            Self::Empty => &[],
            Self::Forest(roots) => roots,
        }
    }

    /// All nodes in pre-order, which is document order.
    pub fn iter(&self) -> OutlineIter<'_> {
        OutlineIter {
            stack: self.roots().iter().rev().collect(),
        }
    }

    /// Heading ids in document order.
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|node| node.id.as_str()).collect()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Find a node by heading id.
    pub fn find(&self, id: &str) -> Option<&OutlineNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Render the outline list's items (children of the outline `<ul>`).
    pub fn to_list_items(&self) -> Vec<Node> {
        match self {
            Self::Empty => vec![Element::new("li").text(NO_HEADINGS_MESSAGE).into()],
            Self::Forest(roots) => roots.iter().map(|node| render_item(node).into()).collect(),
        }
    }
}

fn render_item(node: &OutlineNode) -> Element {
    let link = Element::new("a")
        .attr("href", format!("#{}", node.id))
        .attr(HEADING_ID_ATTR, node.id.as_str())
        .with_class(TOC_LINK_CLASS)
        .text(node.text.as_str());

    let mut item = Element::new("li").child(link);
    if node.has_children() {
        item.push_elem(Element::new("ul").children(node.children.iter().map(render_item)));
    }
    item
}

/// Pre-order iterator over outline nodes
pub struct OutlineIter<'a> {
    stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for OutlineIter<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_nodes, RenderConfig};

    fn sample() -> Outline {
        let mut intro = OutlineNode::leaf(1, "Intro", "intro");
        intro.children.push(OutlineNode::leaf(2, "Setup", "setup"));
        Outline::Forest(vec![intro, OutlineNode::leaf(1, "Next", "next")])
    }

    #[test]
    fn test_iter_is_document_order() {
        assert_eq!(sample().ids(), vec!["intro", "setup", "next"]);
        assert_eq!(sample().len(), 3);
        assert_eq!(sample().find("setup").map(|n| n.level), Some(2));
    }

    #[test]
    fn test_to_list_items() {
        let html = render_nodes(&sample().to_list_items(), &RenderConfig::default());
        assert_eq!(
            html,
            "<li><a href=\"#intro\" data-heading-id=\"intro\" class=\"toc-link\">Intro</a>\
             <ul><li><a href=\"#setup\" data-heading-id=\"setup\" class=\"toc-link\">Setup</a></li></ul></li>\
             <li><a href=\"#next\" data-heading-id=\"next\" class=\"toc-link\">Next</a></li>"
        );
    }

    #[test]
    fn test_empty_marker_renders_message() {
        let items = Outline::Empty.to_list_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_element().unwrap().text_content(), NO_HEADINGS_MESSAGE);
        assert!(Outline::Empty.roots().is_empty());
    }
}
