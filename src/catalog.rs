//! Catalog: the manifest of documents, ordered newest first.
//!
//! Loaded once per session. A manifest that cannot be fetched or parsed
//! degrades to an empty catalog instead of failing the page.

use chrono::{DateTime, NaiveDate};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::config::PressConfig;
use crate::error::{PressError, PressResult};
use crate::fetch::Fetch;
use crate::node::{Element, Node};

// =============================================================================
// CatalogEntry
// =============================================================================

/// Metadata of one document, as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique, URL-safe identifier
    pub slug: CompactString,
    pub title: String,
    /// Publication date
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    /// Estimated read time in minutes
    #[serde(default)]
    pub read_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Parse a manifest date: `YYYY-MM-DD`, or RFC 3339 reduced to its date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

mod calendar_date {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date `{raw}`")))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Entries ordered by date descending; equal dates keep manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries in manifest order.
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        // `sort_by` is stable: ties keep manifest order
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON manifest (an array of entries).
    pub fn from_manifest(json: &str) -> PressResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| PressError::CatalogUnavailable(format!("invalid manifest: {e}")))?;
        Ok(Self::new(entries))
    }

    /// Look up an entry by slug.
    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Fetch and parse the manifest.
pub async fn try_load<F: Fetch>(fetch: &F, config: &PressConfig) -> PressResult<Catalog> {
    let body = fetch
        .fetch(&config.manifest_path)
        .await
        .map_err(|e| PressError::CatalogUnavailable(e.to_string()))?;
    Catalog::from_manifest(&body)
}

/// Fetch and parse the manifest; any failure yields an empty catalog.
///
/// A single attempt, no retry.
pub async fn load<F: Fetch>(fetch: &F, config: &PressConfig) -> Catalog {
    match try_load(fetch, config).await {
        Ok(catalog) => {
            tracing::info!(entries = catalog.len(), path = %config.manifest_path, "catalog loaded");
            catalog
        }
        Err(err) => {
            tracing::error!(path = %config.manifest_path, error = %err, "error loading catalog");
            Catalog::empty()
        }
    }
}

// =============================================================================
// List view
// =============================================================================

/// Message shown when the catalog has no entries.
pub const EMPTY_CATALOG_MESSAGE: &str =
    "No blog posts found. Create some markdown files in the posts directory!";

/// Render the list view's cards (the posts container's children).
pub fn render_cards(catalog: &Catalog, date_format: &str) -> Vec<Node> {
    if catalog.is_empty() {
        let empty = Element::new("div")
            .with_class("loading")
            .child(Element::new("p").text(EMPTY_CATALOG_MESSAGE));
        return vec![empty.into()];
    }

    catalog.iter().map(|entry| render_card(entry, date_format).into()).collect()
}

fn render_card(entry: &CatalogEntry, date_format: &str) -> Element {
    let mut meta = Element::new("div")
        .with_class("post-meta")
        .child(Element::new("span").text(format!("📅 {}", entry.date.format(date_format))))
        .child(Element::new("span").text(format!("⏱️ {} min read", entry.read_time)));
    if let Some(tags) = &entry.tags {
        meta.push_elem(Element::new("span").text(format!("🏷️ {}", tags.join(", "))));
    }

    Element::new("div")
        .with_class("post-card")
        .attr("data-slug", entry.slug.as_str())
        .child(Element::new("h2").text(entry.title.as_str()))
        .child(meta)
        .child(Element::new("p").with_class("post-excerpt").text(entry.excerpt.as_str()))
        .child(Element::new("span").with_class("read-more").text("Read more →"))
}
