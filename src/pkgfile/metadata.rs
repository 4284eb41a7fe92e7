// src/pkgfile/metadata.rs

//! Comment metadata extraction
//!
//! Pkgfiles describe the port in leading comment lines:
//!
//! ```text
//! # Description: Small and friendly text editor
//! # URL:         https://www.nano-editor.org
//! # Maintainer:  Jane Doe, jane at example dot org
//! # Depends on:  ncurses, file
//! ```
//!
//! Keys are lowercased for display (`depends on`) and additionally have
//! spaces turned into underscores for processor lookup (`depends_on`).

use super::encoding;
use super::value::Value;
use super::Processor;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Metadata keyed by lowercased display key
pub type MetadataRecord = BTreeMap<String, Value>;

static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# *(?P<key>.*?): *(?P<data>.*?)\n").unwrap());

/// Extracts `# Key: value` comment lines
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    processors: HashMap<String, Processor>,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor {
    /// Create an extractor with the standard processor registry
    pub fn new() -> Self {
        let mut processors: HashMap<String, Processor> = HashMap::new();
        processors.insert("description".to_string(), keep_text);
        processors.insert("url".to_string(), keep_text);
        processors.insert("depends_on".to_string(), split_dependencies);
        processors.insert("nice_to_have".to_string(), split_dependencies);
        Self { processors }
    }

    /// Register (or replace) the processor for a dispatch key
    ///
    /// The key is matched after lowercasing and replacing spaces with
    /// underscores, so `"Optional deps"` and `"optional_deps"` are the same.
    pub fn register(&mut self, key: &str, processor: Processor) -> &mut Self {
        self.processors.insert(dispatch_key(key), processor);
        self
    }

    /// Whether a processor is registered for this key
    pub fn is_registered(&self, key: &str) -> bool {
        self.processors.contains_key(&dispatch_key(key))
    }

    /// Extract all metadata lines from `text`
    pub fn extract(&self, text: &str) -> MetadataRecord {
        let mut record = MetadataRecord::new();

        for caps in META_RE.captures_iter(text) {
            let key = caps["key"].to_lowercase();
            let data = &caps["data"];

            let value = match self.processors.get(&dispatch_key(&key)) {
                Some(process) => process(data),
                None => Value::from(data),
            };
            let value = value.map_strings(encoding::normalize);

            if value.is_falsy() {
                trace!("Dropping empty metadata field '{}'", key);
                continue;
            }
            record.insert(key, value);
        }

        debug!("Extracted {} metadata field(s)", record.len());
        record
    }
}

fn dispatch_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}

fn keep_text(data: &str) -> Value {
    Value::from(data)
}

/// Split a dependency list on commas and whitespace
pub fn split_dependencies(data: &str) -> Value {
    Value::List(
        data.replace(',', " ")
            .split_whitespace()
            .map(|dep| dep.trim().to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_metadata_is_empty() {
        let record = MetadataExtractor::new().extract("name=foo\nversion=1.0\n");
        assert!(record.is_empty());
    }

    #[test]
    fn test_depends_on_is_split() {
        let record = MetadataExtractor::new().extract("# Depends on: a, b c\n");
        assert_eq!(record.get("depends on"), Some(&list(&["a", "b", "c"])));
    }

    #[test]
    fn test_nice_to_have_is_split() {
        let record = MetadataExtractor::new().extract("# Nice to have: gtk3,qt5\n");
        assert_eq!(record.get("nice to have"), Some(&list(&["gtk3", "qt5"])));
    }

    #[test]
    fn test_whitespace_only_value_is_dropped() {
        let record = MetadataExtractor::new().extract("# Depends on:   \n# Packager:\n");
        assert!(record.is_empty());
    }

    #[test]
    fn test_unregistered_key_passes_through() {
        let record = MetadataExtractor::new().extract("# Maintainer: Jane\n");
        assert_eq!(record.get("maintainer"), Some(&Value::from("Jane")));
    }

    #[test]
    fn test_description_and_url_kept_verbatim() {
        let text = "# Description: A text editor\n# URL:   https://example.org\n";
        let record = MetadataExtractor::new().extract(text);
        assert_eq!(record.get("description"), Some(&Value::from("A text editor")));
        assert_eq!(record.get("url"), Some(&Value::from("https://example.org")));
    }

    #[test]
    fn test_matches_every_line_not_just_first() {
        let text = "name=x\n# Description: d\n\n#   Packager  : p\n";
        let record = MetadataExtractor::new().extract(text);
        assert_eq!(record.len(), 2);
        // Spaces before the colon stay part of the key
        assert_eq!(record.get("packager  "), Some(&Value::from("p")));
    }

    #[test]
    fn test_line_without_trailing_newline_is_ignored() {
        let record = MetadataExtractor::new().extract("# Description: no newline");
        assert!(record.is_empty());
    }

    #[test]
    fn test_value_is_redecoded() {
        let record = MetadataExtractor::new().extract("# Maintainer: JosÃ©\n");
        assert_eq!(record.get("maintainer"), Some(&Value::from("José")));
    }

    #[test]
    fn test_register_custom_processor() {
        let mut extractor = MetadataExtractor::new();
        extractor.register("Optional deps", split_dependencies);
        assert!(extractor.is_registered("optional_deps"));

        let record = extractor.extract("# Optional deps: x y\n");
        assert_eq!(record.get("optional deps"), Some(&list(&["x", "y"])));
    }
}
