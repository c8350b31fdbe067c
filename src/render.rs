//! HTML Rendering for content trees
//!
//! Renders documents, elements and node lists to HTML strings.

use crate::attr::Attrs;
use crate::node::{Document, Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Emit a newline after each block-level closing tag.
    pub pretty: bool,
    /// Drop attributes whose name starts with `data-`.
    pub strip_data_attrs: bool,
}

impl RenderConfig {
    /// Development config (readable output, keep data attributes).
    pub const DEV: Self = Self {
        pretty: true,
        strip_data_attrs: false,
    };

    /// Production config (compact output, keep data attributes).
    pub const PROD: Self = Self {
        pretty: false,
        strip_data_attrs: false,
    };

    /// Create a new config.
    pub fn new(pretty: bool, strip_data_attrs: bool) -> Self {
        Self {
            pretty,
            strip_data_attrs,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PROD
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a document to HTML string.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    render_element(&doc.root, config)
}

/// Render a single element (and its subtree) to HTML string.
pub fn render_element(elem: &Element, config: &RenderConfig) -> String {
    let mut output = String::new();
    write_element(elem, config, &mut output);
    output
}

/// Render a node list to HTML string (the `innerHTML` of a container).
pub fn render_nodes(nodes: &[Node], config: &RenderConfig) -> String {
    let mut output = String::new();
    for node in nodes {
        write_node(node, config, &mut output);
    }
    output
}

fn write_element(elem: &Element, config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    write_attrs(&elem.attrs, config, output);

    // Void elements
    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    for child in &elem.children {
        write_node(child, config, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');

    if config.pretty && is_block_element(&elem.tag) {
        output.push('\n');
    }
}

fn write_node(node: &Node, config: &RenderConfig, output: &mut String) {
    match node {
        Node::Element(elem) => write_element(elem, config, output),
        Node::Text(text) => {
            if text.is_raw() {
                // Raw text: output as-is without escaping
                output.push_str(&text.content);
            } else {
                output.push_str(&escape_html(&text.content));
            }
        }
    }
}

fn write_attrs(attrs: &Attrs, config: &RenderConfig, output: &mut String) {
    for (name, value) in attrs.iter() {
        if config.strip_data_attrs && name.starts_with("data-") {
            continue;
        }
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "div" | "p" | "ul" | "ol" | "li" | "pre" | "blockquote" | "table" | "tr" | "section"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_element() {
        let elem = Element::new("div").with_class("post-card").text("a < b");
        let html = render_element(&elem, &RenderConfig::default());
        assert_eq!(html, "<div class=\"post-card\">a &lt; b</div>");
    }

    #[test]
    fn test_render_raw_text_verbatim() {
        let elem = Element::new("code").raw("<span class=\"hljs-keyword\">fn</span>");
        let html = render_element(&elem, &RenderConfig::default());
        assert_eq!(html, "<code><span class=\"hljs-keyword\">fn</span></code>");
    }

    #[test]
    fn test_render_void_and_attr_escaping() {
        let elem = Element::new("p")
            .child(Element::new("img").attr("alt", "say \"hi\""))
            .child(Element::new("br"));
        let html = render_element(&elem, &RenderConfig::default());
        assert_eq!(html, "<p><img alt=\"say &quot;hi&quot;\" /><br /></p>");
    }

    #[test]
    fn test_strip_data_attrs() {
        let elem = Element::new("a").attr("href", "#x").attr("data-heading-id", "x");
        let html = render_element(&elem, &RenderConfig::new(false, true));
        assert_eq!(html, "<a href=\"#x\"></a>");
    }

    #[test]
    fn test_pretty_breaks_blocks() {
        let doc = Document::new(Element::new("div").child(Element::new("p").text("x")));
        let html = render_document(&doc, &RenderConfig::DEV);
        assert_eq!(html, "<div><p>x</p>\n</div>\n");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }
}
