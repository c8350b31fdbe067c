//! Conversion engine: document source text to content nodes
//!
//! The renderer only depends on the `Convert` trait. Each concrete engine is
//! feature-gated and lives in its own submodule.
//!
//! # Supported Formats
//!
//! | Format | Feature | Module | Type |
//! |--------|---------|--------|------|
//! | Markdown | `markdown` | `markdown` | [`MarkdownConverter`] |
//!
//! # Adding New Converters
//!
//! 1. Create a new submodule (e.g., `convert/asciidoc.rs`)
//! 2. Add feature flag to `Cargo.toml`
//! 3. Implement `Convert`, honouring `ConvertOptions` where the format allows
//! 4. Re-export in this module with `#[cfg(feature = "xxx")]`

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::node::Node;

#[cfg(feature = "markdown")]
pub mod markdown;

#[cfg(feature = "markdown")]
pub use self::markdown::{from_markdown, MarkdownConverter};

/// Converts document source text into content nodes.
pub trait Convert {
    /// Convert `source` into the children of the post content container.
    fn convert(&self, source: &str) -> Result<Vec<Node>, ConvertError>;
}

impl<T: Convert> Convert for &T {
    fn convert(&self, source: &str) -> Result<Vec<Node>, ConvertError> {
        (**self).convert(source)
    }
}

/// Conversion engine options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Single newlines inside a paragraph become `<br>`.
    pub line_breaks_significant: bool,
    /// Headings without an explicit id get `id_prefix + slug`.
    pub heading_auto_ids: bool,
    /// Prefix for generated heading ids.
    pub id_prefix: String,
    /// Tables, strikethrough, task lists and footnotes.
    pub gfm: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            line_breaks_significant: true,
            heading_auto_ids: true,
            id_prefix: "heading-".to_string(),
            gfm: true,
        }
    }
}
