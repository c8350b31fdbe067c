//! Text node type
//!
//! Text content nodes in the content tree.

/// How a text node is emitted by the HTML renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextKind {
    /// Plain text, escaped on output
    #[default]
    Normal,
    /// Pre-rendered markup (highlighted code, inline HTML), emitted verbatim
    Raw,
}

/// Text content node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    /// Text content
    pub content: String,
    pub kind: TextKind,
}

impl Text {
    /// Create a new escaped text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Normal,
        }
    }

    /// Create a raw markup node
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            content: markup.into(),
            kind: TextKind::Raw,
        }
    }

    pub fn is_raw(&self) -> bool {
        self.kind == TextKind::Raw
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get trimmed content
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let text = Text::new("  hello world  ");
        assert!(!text.is_empty());
        assert!(!text.is_whitespace());
        assert!(!text.is_raw());
        assert_eq!(text.trimmed(), "hello world");
    }

    #[test]
    fn test_raw_text_node() {
        let text = Text::raw("<span class=\"hljs-keyword\">fn</span>");
        assert!(text.is_raw());
    }
}
