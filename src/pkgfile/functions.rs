// src/pkgfile/functions.rs

//! Shell function extraction
//!
//! A function starts with `name() {` and ends at the first following line
//! holding nothing but `}`. Nested blocks are fine as long as their closing
//! brace is indented.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)(?P<name>\w+) *\(\)[ \n]*\{\n(?P<body>.*?)\n\}[ \t]*$").unwrap()
});

/// Function bodies keyed by function name
///
/// Bodies are stored raw, without the enclosing braces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionRecord {
    bodies: BTreeMap<String, String>,
}

impl FunctionRecord {
    /// Raw body of a function
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bodies.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Function names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bodies.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body of `name` split into lines with tabs removed and whitespace trimmed
    ///
    /// Blank lines are kept as empty strings. Computed on every call.
    pub fn lines(&self, name: &str) -> Result<Vec<String>> {
        let body = self
            .get(name)
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))?;

        Ok(body
            .split('\n')
            .map(|line| line.replace('\t', "").trim().to_string())
            .collect())
    }
}

impl From<BTreeMap<String, String>> for FunctionRecord {
    fn from(bodies: BTreeMap<String, String>) -> Self {
        Self { bodies }
    }
}

/// Extracts `name() { ... }` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionExtractor;

impl FunctionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every function block in `text`
    ///
    /// A later definition of the same name replaces the earlier one.
    pub fn extract(&self, text: &str) -> FunctionRecord {
        let mut bodies = BTreeMap::new();

        for caps in FUNCTION_RE.captures_iter(text) {
            let name = caps["name"].to_string();
            if bodies.insert(name, caps["body"].to_string()).is_some() {
                debug!("Function '{}' defined more than once, keeping the last", &caps["name"]);
            }
        }

        debug!("Extracted {} function(s)", bodies.len());
        FunctionRecord::from(bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_build_function() {
        let record = FunctionExtractor::new().extract("build() {\n\techo hi\n}");
        assert_eq!(record.get("build"), Some("\techo hi"));
        assert_eq!(record.lines("build").unwrap(), vec!["echo hi"]);
    }

    #[test]
    fn test_missing_function_is_not_found() {
        let record = FunctionExtractor::new().extract("build() {\n\techo hi\n}\n");
        match record.lines("nonexistent") {
            Err(Error::FunctionNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("expected FunctionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_function_last_wins() {
        let text = "build() {\n\techo first\n}\n\nbuild() {\n\techo second\n}\n";
        let record = FunctionExtractor::new().extract(text);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("build"), Some("\techo second"));
    }

    #[test]
    fn test_multiple_functions() {
        let text = "\
build() {
\tcd $name-$version
\tmake
}

post_install()
{
\tldconfig
}
";
        let record = FunctionExtractor::new().extract(text);
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["build", "post_install"]);
        assert_eq!(record.lines("post_install").unwrap(), vec!["ldconfig"]);
    }

    #[test]
    fn test_indented_inner_braces_stay_in_body() {
        let text = "build() {\n\tif true; then\n\t\t{ echo a; }\n\tfi\n\tprep() {\n\t\ttrue\n\t}\n}\n";
        let record = FunctionExtractor::new().extract(text);
        let lines = record.lines("build").unwrap();
        assert_eq!(lines.first().map(String::as_str), Some("if true; then"));
        assert_eq!(lines.last().map(String::as_str), Some("}"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let record = FunctionExtractor::new().extract("build() {\n\tone\n\n\t  two  \n}\n");
        assert_eq!(record.lines("build").unwrap(), vec!["one", "", "two"]);
    }

    #[test]
    fn test_tabs_removed_everywhere() {
        let record = FunctionExtractor::new().extract("build() {\n\tprintf 'a\tb'\n}\n");
        assert_eq!(record.lines("build").unwrap(), vec!["printf 'ab'"]);
    }

    #[test]
    fn test_empty_body() {
        let record = FunctionExtractor::new().extract("build() {\n\n}\n");
        assert_eq!(record.get("build"), Some(""));
        assert_eq!(record.lines("build").unwrap(), vec![""]);
    }

    #[test]
    fn test_no_functions() {
        let record = FunctionExtractor::new().extract("name=foo\n");
        assert!(record.is_empty());
    }
}
