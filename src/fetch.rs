//! Resource fetching.
//!
//! The manifest and every document's source text are loaded through the
//! `Fetch` trait. Fetches are the only suspension points of the navigator.

use std::future::Future;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::FetchError;

/// Asynchronously loads a text resource by path.
///
/// # Example
///
/// ```ignore
/// struct StaticDir(PathBuf);
///
/// impl Fetch for StaticDir {
///     async fn fetch(&self, path: &str) -> Result<String, FetchError> {
///         tokio::fs::read_to_string(self.0.join(path))
///             .await
///             .map_err(FetchError::network)
///     }
/// }
/// ```
pub trait Fetch {
    /// Load the resource at `path` as text.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>>;
}

impl<T: Fetch> Fetch for &T {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> {
        (**self).fetch(path)
    }
}

// =============================================================================
// MemoryFetch
// =============================================================================

/// In-memory resources keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFetch {
    resources: RwLock<FxHashMap<String, String>>,
}

impl MemoryFetch {
    /// Create an empty resource set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource (builder style).
    pub fn with(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&self, path: impl Into<String>, body: impl Into<String>) {
        self.resources.write().insert(path.into(), body.into());
    }

    /// Remove a resource.
    pub fn remove(&self, path: &str) -> Option<String> {
        self.resources.write().remove(path)
    }
}

impl Fetch for MemoryFetch {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.resources
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}

// =============================================================================
// HttpFetch
// =============================================================================

#[cfg(feature = "http")]
pub use http::HttpFetch;

#[cfg(feature = "http")]
mod http {
    use super::*;

    /// Fetches resources over HTTP relative to a base URL.
    #[derive(Debug, Clone)]
    pub struct HttpFetch {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpFetch {
        /// Create a fetcher resolving paths against `base_url`.
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        /// Create a fetcher with an existing client.
        pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
            Self {
                client,
                base_url: base_url.into(),
            }
        }

        /// Join the base URL and a resource path.
        pub fn url_for(&self, path: &str) -> String {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches("./").trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    impl Fetch for HttpFetch {
        async fn fetch(&self, path: &str) -> Result<String, FetchError> {
            let response = self
                .client
                .get(self.url_for(path))
                .send()
                .await
                .map_err(FetchError::network)?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    path: path.to_string(),
                    status: status.as_u16(),
                });
            }

            response.text().await.map_err(FetchError::network)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_url_for() {
            let fetch = HttpFetch::new("https://example.com/blog/");
            assert_eq!(fetch.url_for("./posts/a.md"), "https://example.com/blog/posts/a.md");
            assert_eq!(fetch.url_for("/posts/posts.json"), "https://example.com/blog/posts/posts.json");
        }
    }
}
