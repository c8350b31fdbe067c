//! Site configuration: resource locations, address bar layout, engine options.

use serde::{Deserialize, Serialize};

use crate::convert::ConvertOptions;
use crate::error::ConfigError;
use crate::spy::Band;

/// Placeholder replaced by the slug in `document_path`.
pub const SLUG_PLACEHOLDER: &str = "{slug}";

/// Configuration shared by the catalog loader, renderer and navigator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Location of the manifest resource.
    pub manifest_path: String,
    /// Per-document resource template; `{slug}` is substituted.
    pub document_path: String,
    /// Address bar path of the page hosting both views.
    pub page_path: String,
    /// Query parameter carrying the slug in document view.
    pub query_param: String,
    /// `chrono` format string for card dates.
    pub date_format: String,
    /// Conversion engine options.
    pub convert: ConvertOptions,
    /// Scroll spy observation band.
    pub band: Band,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            manifest_path: "./posts/posts.json".to_string(),
            document_path: "./posts/{slug}.md".to_string(),
            page_path: "/blog.html".to_string(),
            query_param: "post".to_string(),
            date_format: "%B %-d, %Y".to_string(),
            convert: ConvertOptions::default(),
            band: Band::default(),
        }
    }
}

impl PressConfig {
    impl_with_setters!(
        manifest_path: String,
        document_path: String,
        page_path: String,
        query_param: String,
        date_format: String,
    );

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the conversion options.
    pub fn with_convert(mut self, convert: ConvertOptions) -> Self {
        self.convert = convert;
        self
    }

    /// Replace the observation band.
    pub fn with_band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    /// Check field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.document_path.contains(SLUG_PLACEHOLDER) {
            return Err(ConfigError::Invalid {
                field: "document_path",
                message: format!("must contain `{SLUG_PLACEHOLDER}`"),
            });
        }
        if self.query_param.is_empty() {
            return Err(ConfigError::Invalid {
                field: "query_param",
                message: "must not be empty".to_string(),
            });
        }
        if !self.band.is_valid() {
            return Err(ConfigError::Invalid {
                field: "band",
                message: format!("expected 0 <= top < bottom <= 1, got {:?}", self.band),
            });
        }
        Ok(())
    }

    /// Resource path of a document's source text.
    pub fn document_path_for(&self, slug: &str) -> String {
        self.document_path.replace(SLUG_PLACEHOLDER, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PressConfig::default();
        assert_eq!(config.manifest_path, "./posts/posts.json");
        assert_eq!(config.document_path_for("hello"), "./posts/hello.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = PressConfig::from_json(r#"{"page_path": "/notes.html"}"#).unwrap();
        assert_eq!(config.page_path, "/notes.html");
        assert_eq!(config.query_param, "post");
    }

    #[test]
    fn test_from_json_rejects_missing_placeholder() {
        let err = PressConfig::from_json(r#"{"document_path": "./posts/a.md"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "document_path", .. }));
    }

    #[test]
    fn test_builder() {
        let config = PressConfig::default()
            .with_manifest_path("/m.json")
            .with_document_path("/docs/{slug}.txt");
        assert_eq!(config.manifest_path, "/m.json");
        assert_eq!(config.document_path_for("x"), "/docs/x.txt");
    }
}
