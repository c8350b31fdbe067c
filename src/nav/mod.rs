//! Navigation: List/Document views, history entries and the navigator.
//!
//! # Module Structure
//!
//! - `ViewState` / `HistoryState` - what is shown, and how history stores it
//! - `history` - the history surface and address bar locations
//! - `page` - container handles the views render into
//! - `navigator` - the application-state object driving transitions

mod history;
mod navigator;
mod page;

pub use history::{view_url, History, HistoryEntry, Location, MemoryHistory};
pub use navigator::Navigator;
pub use page::{Page, View, POSTS_CONTAINER_ID, POST_CONTAINER_ID, TOC_LIST_ID};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The view currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// The catalog listing
    #[default]
    List,
    /// A single document, by slug
    Document(CompactString),
}

impl ViewState {
    pub fn document(slug: impl Into<CompactString>) -> Self {
        Self::Document(slug.into())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }

    /// Slug of the shown document, if any.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::List => None,
            Self::Document(slug) => Some(slug.as_str()),
        }
    }
}

/// History entry payload: `{}` for the list, `{"post": slug}` for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<CompactString>,
}

impl HistoryState {
    pub fn post(slug: impl Into<CompactString>) -> Self {
        Self {
            post: Some(slug.into()),
        }
    }
}

impl From<&ViewState> for HistoryState {
    fn from(view: &ViewState) -> Self {
        Self {
            post: view.slug().map(CompactString::from),
        }
    }
}

impl From<HistoryState> for ViewState {
    fn from(state: HistoryState) -> Self {
        match state.post {
            Some(slug) if !slug.is_empty() => Self::Document(slug),
            _ => Self::List,
        }
    }
}
