//! tola-press - Blog catalog, document rendering and outline navigation
//!
//! ## Core Concepts
//!
//! **Typed content tree**: documents are converted into an owned
//! `Element`/`Node` tree instead of HTML strings, so heading ids, code
//! highlighting and outline links are applied to real elements.
//!
//! **Generation tickets**: every view transition bumps a counter; a document
//! fetch that completes after a newer transition is discarded, so the page
//! always reflects the most recently requested document.
//!
//! ## Modules
//! - `catalog`: Manifest loading, newest-first ordering, list cards
//! - `renderer`: Fetch, convert, highlight a single document
//! - `outline`: Heading forest and outline list
//! - `spy`: Intersection observation and the active outline link
//! - `nav`: Views, history and the `Navigator`
//! - `convert` / `highlight` / `fetch`: Pluggable engines
//! - `node` / `render`: Content tree and HTML output
//!
//! ## Usage
//!
//! ```ignore
//! use tola_press::prelude::*;
//!
//! let config = PressConfig::default();
//! let renderer = DocumentRenderer::new(
//!     MarkdownConverter::new(config.convert.clone()),
//!     PlainHighlighter,
//!     config,
//! );
//! let nav = Navigator::new(fetch, renderer, MemoryHistory::new());
//!
//! nav.start(&Location::parse("/blog.html?post=hello")).await?;
//! let html = nav.with_page(|page| page.render_visible(&RenderConfig::DEV));
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Content tree
// =============================================================================

/// Attribute helpers
pub mod attr;

/// Node types: Document, Element, Node, Text
pub mod node;

/// Heading recognition and slugs
pub mod heading;

/// HTML rendering
pub mod render;

// =============================================================================
// Engines
// =============================================================================

/// Conversion engines: source text to content nodes
pub mod convert;

/// Syntax highlighting engines
pub mod highlight;

/// Resource fetching
pub mod fetch;

// =============================================================================
// Blog components
// =============================================================================

/// Catalog of documents
pub mod catalog;

/// Document renderer
pub mod renderer;

/// Outline builder
pub mod outline;

/// Scroll spy
pub mod spy;

/// Navigation controller
pub mod nav;

// =============================================================================
// Ambient
// =============================================================================

/// Configuration
pub mod config;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Document, Element, Node, Text, TextKind};

// Components
pub use catalog::{Catalog, CatalogEntry};
pub use nav::{HistoryState, Location, MemoryHistory, Navigator, ViewState};
pub use outline::{Outline, OutlineNode};
pub use renderer::{DocumentRenderer, RenderedDocument};
pub use spy::{Band, ScrollSpy, Viewport};

// Engines
pub use convert::{Convert, ConvertOptions};
pub use fetch::{Fetch, MemoryFetch};
pub use highlight::{Highlight, PlainHighlighter};

// Config and errors
pub use config::PressConfig;
pub use error::{ConfigError, ConvertError, FetchError, PressError, PressResult};

#[cfg(all(test, feature = "markdown"))]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Catalog: Send, Sync);
    assert_impl_all!(ScrollSpy: Send, Sync);
    assert_impl_all!(
        Navigator<MemoryFetch, convert::MarkdownConverter, PlainHighlighter>: Send, Sync
    );
}
