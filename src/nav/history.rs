//! History surface and address bar locations.

use url::form_urlencoded;

use super::{HistoryState, ViewState};
use crate::config::PressConfig;

// =============================================================================
// History
// =============================================================================

/// One history entry: payload plus the address shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: HistoryState,
    pub url: String,
}

/// Session history the navigator records transitions into.
pub trait History {
    /// Add an entry after the current one, dropping any forward entries.
    fn push_state(&mut self, state: HistoryState, url: &str);

    /// Overwrite the current entry.
    fn replace_state(&mut self, state: HistoryState, url: &str);

    fn current(&self) -> Option<&HistoryEntry>;
}

/// In-memory history stack with a cursor.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step back; returns the state to hand to the navigator's `pop_state`.
    pub fn back(&mut self) -> Option<HistoryState> {
        if self.index == 0 || self.entries.is_empty() {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].state.clone())
    }

    /// Step forward; returns the state to hand to `pop_state`.
    pub fn forward(&mut self) -> Option<HistoryState> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].state.clone())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn push_state(&mut self, state: HistoryState, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(HistoryEntry {
            state,
            url: url.to_string(),
        });
        self.index = self.entries.len() - 1;
    }

    fn replace_state(&mut self, state: HistoryState, url: &str) {
        let entry = HistoryEntry {
            state,
            url: url.to_string(),
        };
        match self.entries.get_mut(self.index) {
            Some(current) => *current = entry,
            None => self.entries.push(entry),
        }
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }
}

/// Address for `view`: the page path, plus the slug query for a document.
pub fn view_url(config: &PressConfig, view: &ViewState) -> String {
    match view.slug() {
        None => config.page_path.clone(),
        Some(slug) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(&config.query_param, slug)
                .finish();
            format!("{}?{query}", config.page_path)
        }
    }
}

// =============================================================================
// Location
// =============================================================================

/// A parsed address: path, decoded query pairs and fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parse an absolute URL or a path with optional query and fragment.
    pub fn parse(href: &str) -> Self {
        let rest = match href.split_once("://") {
            Some((_, after_scheme)) => after_scheme
                .find(['/', '?', '#'])
                .map_or("", |i| &after_scheme[i..]),
            None => href,
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (rest, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
            fragment,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of query parameter `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Slug requested by a deep link, if any.
    pub fn deep_link(&self, config: &PressConfig) -> Option<&str> {
        self.param(&config.query_param).filter(|slug| !slug.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new();
        history.replace_state(HistoryState::default(), "/blog.html");
        history.push_state(HistoryState::post("a"), "/blog.html?post=a");
        history.push_state(HistoryState::post("b"), "/blog.html?post=b");
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some(HistoryState::post("a")));
        assert_eq!(history.back(), Some(HistoryState::default()));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(HistoryState::post("a")));

        history.push_state(HistoryState::post("c"), "/blog.html?post=c");
        assert_eq!(history.len(), 3);
        assert_eq!(history.forward(), None);
        assert_eq!(history.current().map(|e| e.url.as_str()), Some("/blog.html?post=c"));
    }

    #[test]
    fn test_replace_on_empty_history() {
        let mut history = MemoryHistory::new();
        assert!(history.current().is_none());
        history.replace_state(HistoryState::default(), "/blog.html");
        assert_eq!(history.len(), 1);
        history.replace_state(HistoryState::post("a"), "/blog.html?post=a");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().unwrap().state, HistoryState::post("a"));
    }

    #[test]
    fn test_view_url() {
        let config = PressConfig::default();
        assert_eq!(view_url(&config, &ViewState::List), "/blog.html");
        assert_eq!(view_url(&config, &ViewState::document("hello")), "/blog.html?post=hello");
        assert_eq!(view_url(&config, &ViewState::document("a b&c")), "/blog.html?post=a+b%26c");
    }

    #[test]
    fn test_location_parse() {
        let loc = Location::parse("https://example.com/blog.html?post=a+b%26c&x=1#top");
        assert_eq!(loc.path(), "/blog.html");
        assert_eq!(loc.param("post"), Some("a b&c"));
        assert_eq!(loc.param("x"), Some("1"));
        assert_eq!(loc.fragment(), Some("top"));

        let config = PressConfig::default();
        assert_eq!(Location::parse("/blog.html?post=hello").deep_link(&config), Some("hello"));
        assert_eq!(Location::parse("/blog.html?post=").deep_link(&config), None);
        assert_eq!(Location::parse("/blog.html").deep_link(&config), None);
        assert_eq!(Location::parse("https://example.com").path(), "/");
    }
}
