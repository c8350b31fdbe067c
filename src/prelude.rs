//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_press::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Document, Element, Node, Text, TextKind};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Render
pub use crate::render::{render_document, render_element, render_nodes, RenderConfig};

// Engines
pub use crate::convert::{Convert, ConvertOptions};
#[cfg(feature = "markdown")]
pub use crate::convert::MarkdownConverter;
pub use crate::fetch::{Fetch, MemoryFetch};
pub use crate::highlight::{Highlight, PlainHighlighter};
#[cfg(feature = "syntect")]
pub use crate::highlight::SyntectHighlighter;
#[cfg(feature = "http")]
pub use crate::fetch::HttpFetch;

// Components
pub use crate::catalog::{Catalog, CatalogEntry};
pub use crate::nav::{
    History, HistoryEntry, HistoryState, Location, MemoryHistory, Navigator, Page, View,
    ViewState,
};
pub use crate::outline::{Outline, OutlineNode};
pub use crate::renderer::{error_panel, DocumentRenderer, RenderedDocument};
pub use crate::spy::{mark_active, Band, IntersectionObserver, Layout, ScrollSpy, Viewport};

// Config and errors
pub use crate::config::PressConfig;
pub use crate::error::{ConfigError, ConvertError, FetchError, PressError, PressResult};
