//! Error types for tola-press.
//!
//! None of these are fatal to a page: the navigator turns each of them into
//! an empty state, an error panel, or a silent discard.

use compact_str::CompactString;
use thiserror::Error;

/// Errors surfaced by the catalog, renderer and navigator.
#[derive(Debug, Error)]
pub enum PressError {
    /// Manifest fetch or parse failure. Recovered as an empty catalog.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The requested slug is not in the loaded catalog
    #[error("document not found: {slug}")]
    DocumentNotFound {
        /// Requested slug
        slug: CompactString,
    },

    /// Network failure loading a document's source text
    #[error("failed to load document {slug}: {source}")]
    DocumentFetchFailed {
        /// Requested slug
        slug: CompactString,
        /// Underlying fetch error
        #[source]
        source: FetchError,
    },

    /// The conversion engine rejected the document's source text
    #[error("failed to convert document {slug}: {source}")]
    ConversionFailed {
        /// Requested slug
        slug: CompactString,
        /// Underlying conversion error
        #[source]
        source: ConvertError,
    },

    /// A completed fetch was superseded by a newer navigation
    #[error("stale response for {slug} discarded (generation {generation}, current {current})")]
    StaleResponseDiscarded {
        /// Slug of the superseded request
        slug: CompactString,
        /// Generation the request was issued under
        generation: u64,
        /// Generation current at completion time
        current: u64,
    },
}

/// Result type alias for press operations.
pub type PressResult<T> = Result<T, PressError>;

impl PressError {
    /// Create a not-found error.
    pub fn not_found(slug: impl Into<CompactString>) -> Self {
        Self::DocumentNotFound { slug: slug.into() }
    }

    /// Whether this error should be shown to the reader.
    ///
    /// Stale discards are bookkeeping, not failures.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::StaleResponseDiscarded { .. })
    }

    /// Message for the error panel.
    pub fn panel_message(&self) -> &'static str {
        match self {
            Self::CatalogUnavailable(_) => "Failed to load blog posts",
            Self::DocumentNotFound { .. } => "Blog post not found",
            Self::DocumentFetchFailed { .. } | Self::ConversionFailed { .. } => {
                "Failed to load blog post"
            }
            Self::StaleResponseDiscarded { .. } => "",
        }
    }
}

/// Errors from a resource fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No resource at the requested path
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Non-success status from a remote resource
    #[error("unexpected status {status} for {path}")]
    Status {
        /// Requested path
        path: String,
        /// HTTP status code
        status: u16,
    },

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Create a network error from any error type.
    pub fn network(err: impl std::error::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Errors from the conversion engine.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source text could not be converted
    #[error("invalid source: {0}")]
    InvalidSource(String),
}

/// Errors loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field value is out of range
    #[error("invalid config value for `{field}`: {message}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        message: String,
    },
}
