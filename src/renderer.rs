//! Document renderer: slug → fetched source → converted, highlighted content.
//!
//! # Flow
//!
//! ```text
//! slug ──resolve──▶ CatalogEntry ──source_path──▶ Fetch ──▶ source text
//!                                                             │
//!                       RenderedDocument ◀──assemble──────────┘
//!                       (div.post-content, code highlighted)
//! ```
//!
//! The navigator drives the steps separately so it can check its generation
//! ticket between the fetch and the assembly; `render` runs them in one go.

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::PressConfig;
use crate::convert::Convert;
use crate::error::{PressError, PressResult};
use crate::fetch::Fetch;
use crate::highlight::Highlight;
use crate::node::{Document, Element};

/// Class of the container holding a rendered document's content.
pub const POST_CONTENT_CLASS: &str = "post-content";

/// `data-action` of the error panel's back button.
pub const BACK_TO_LIST_ACTION: &str = "back-to-list";

/// A converted and highlighted document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub entry: CatalogEntry,
    /// Rooted at `div.post-content`
    pub content: Document,
}

/// Renders documents with conversion engine `C` and highlighter `H`.
#[derive(Debug, Clone)]
pub struct DocumentRenderer<C, H> {
    converter: C,
    highlighter: H,
    config: PressConfig,
}

impl<C: Convert, H: Highlight> DocumentRenderer<C, H> {
    pub fn new(converter: C, highlighter: H, config: PressConfig) -> Self {
        Self {
            converter,
            highlighter,
            config,
        }
    }

    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Look up `slug` in the catalog.
    pub fn resolve<'a>(&self, catalog: &'a Catalog, slug: &str) -> PressResult<&'a CatalogEntry> {
        catalog.get(slug).ok_or_else(|| {
            tracing::warn!(slug, "document not found");
            PressError::not_found(slug)
        })
    }

    /// Resource path of the document's source text.
    pub fn source_path(&self, entry: &CatalogEntry) -> String {
        self.config.document_path_for(&entry.slug)
    }

    /// Convert fetched source text and highlight its code regions.
    pub fn assemble(&self, entry: &CatalogEntry, source: &str) -> PressResult<RenderedDocument> {
        let nodes = self.converter.convert(source).map_err(|source| {
            tracing::warn!(slug = %entry.slug, error = %source, "conversion failed");
            PressError::ConversionFailed {
                slug: entry.slug.clone(),
                source,
            }
        })?;

        let mut root = Element::new("div").with_class(POST_CONTENT_CLASS);
        root.replace_children(nodes);
        let highlighted = self.highlighter.highlight_all(&mut root);

        let content = Document::new(root);
        let stats = content.collect_stats();
        tracing::debug!(
            slug = %entry.slug,
            headings = stats.heading_count,
            code_blocks = stats.code_block_count,
            highlighted,
            "document assembled"
        );

        Ok(RenderedDocument {
            entry: entry.clone(),
            content,
        })
    }

    /// Fetch the source text of `entry`.
    pub async fn fetch_source<F: Fetch>(&self, fetch: &F, entry: &CatalogEntry) -> PressResult<String> {
        let path = self.source_path(entry);
        fetch.fetch(&path).await.map_err(|source| {
            tracing::warn!(slug = %entry.slug, path = %path, error = %source, "document fetch failed");
            PressError::DocumentFetchFailed {
                slug: entry.slug.clone(),
                source,
            }
        })
    }

    /// Resolve, fetch and assemble in one go.
    pub async fn render<F: Fetch>(
        &self,
        catalog: &Catalog,
        fetch: &F,
        slug: &str,
    ) -> PressResult<RenderedDocument> {
        let entry = self.resolve(catalog, slug)?;
        let source = self.fetch_source(fetch, entry).await?;
        self.assemble(entry, &source)
    }
}

/// Error panel shown in place of a document.
pub fn error_panel(message: &str) -> Element {
    Element::new("div")
        .with_class("error")
        .child(Element::new("h2").text("Error"))
        .child(Element::new("p").text(message))
        .child(
            Element::new("button")
                .with_class("back-button")
                .attr("data-action", BACK_TO_LIST_ACTION)
                .text("Back to Posts"),
        )
}

/// Placeholder shown while a document is being fetched.
pub fn loading_placeholder() -> Element {
    Element::new("div").with_class("loading").text("Loading post...")
}
