//! Attribute system for content elements
//!
//! - Direct `Vec<(String, String)>` for attributes
//! - Class-list helpers on top of the `class` attribute

/// Element attributes as simple key-value pairs, in insertion order.
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;

    /// Check whether the whitespace-separated `class` list contains `class`
    fn has_class(&self, class: &str) -> bool;

    /// Append `class` to the class list unless already present
    fn add_class(&mut self, class: &str);

    /// Remove every occurrence of `class`; drops the attribute when it empties
    fn remove_class(&mut self, class: &str);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }

    fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let list = match self.get_attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attr("class", list);
    }

    fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.get_attr("class") else {
            return;
        };
        let list = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if list.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", list);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.set_attr("id", "main");
        attrs.set_attr("class", "container");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("id"), Some("main"));
        assert_eq!(attrs.get_attr("href"), None);
        assert!(attrs.has_attr("id"));

        // Update existing
        attrs.set_attr("class", "wrapper");
        assert_eq!(attrs.get_attr("class"), Some("wrapper"));
        assert_eq!(attrs.len(), 2);

        let removed = attrs.remove_attr("id");
        assert_eq!(removed.as_deref(), Some("main"));
        assert!(!attrs.has_attr("id"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_class_list() {
        let mut attrs: Attrs = vec![("class".into(), "toc-link".into())];

        attrs.add_class("active");
        assert_eq!(attrs.get_attr("class"), Some("toc-link active"));
        assert!(attrs.has_class("active"));

        // Adding twice is a no-op
        attrs.add_class("active");
        assert_eq!(attrs.get_attr("class"), Some("toc-link active"));

        attrs.remove_class("active");
        assert_eq!(attrs.get_attr("class"), Some("toc-link"));
        assert!(!attrs.has_class("active"));

        attrs.remove_class("toc-link");
        assert!(!attrs.has_attr("class"));
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        let attrs: Attrs = vec![("class".into(), "inactive toc-link".into())];
        assert!(!attrs.has_class("active"));
        assert!(attrs.has_class("inactive"));
    }
}
