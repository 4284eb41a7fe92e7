// src/pkgfile/variables.rs

//! Shell variable extraction
//!
//! Only a fixed set of assignments is captured. Each registered variable
//! owns its own pattern, searched anywhere in the file:
//!
//! ```text
//! name=nano
//! version=8.5
//! release=1
//! source=(https://www.nano-editor.org/dist/v8/$name-$version.tar.xz \
//!         nanorc.patch)
//! ```

use super::value::Value;
use super::Processor;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Variables keyed by variable name
pub type VariableRecord = BTreeMap<String, Value>;

/// One registered variable
#[derive(Debug, Clone)]
struct VariableRule {
    name: String,
    pattern: Regex,
    processor: Option<Processor>,
}

static DEFAULT_RULES: LazyLock<Vec<VariableRule>> = LazyLock::new(|| {
    vec![
        scalar_rule("name").unwrap(),
        scalar_rule("version").unwrap(),
        scalar_rule("release").unwrap(),
        array_rule("source").unwrap(),
    ]
});

fn scalar_rule(name: &str) -> Result<VariableRule> {
    Ok(VariableRule {
        name: name.to_string(),
        pattern: Regex::new(&format!(r"(?s){}=(.*?)\n", regex::escape(name)))?,
        processor: None,
    })
}

fn array_rule(name: &str) -> Result<VariableRule> {
    Ok(VariableRule {
        name: name.to_string(),
        pattern: Regex::new(&format!(r"(?s){}=\((.*?)\)\n", regex::escape(name)))?,
        processor: Some(split_source),
    })
}

fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidVariableName(name.to_string()))
    }
}

/// Extracts registered shell assignments
#[derive(Debug, Clone)]
pub struct VariableExtractor {
    rules: Vec<VariableRule>,
}

impl Default for VariableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableExtractor {
    /// Create an extractor for `name`, `version`, `release` and `source`
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    /// Capture a single-line `name=value` assignment
    pub fn register(&mut self, name: &str) -> Result<&mut Self> {
        validate_name(name)?;
        self.insert(scalar_rule(name)?);
        Ok(self)
    }

    /// Capture a `name=(...)` array, split the same way as `source`
    pub fn register_array(&mut self, name: &str) -> Result<&mut Self> {
        validate_name(name)?;
        self.insert(array_rule(name)?);
        Ok(self)
    }

    /// Capture a variable with a custom pattern
    ///
    /// The first capture group of `pattern` is the raw value. Dot matches
    /// newline unless the pattern turns it off.
    pub fn register_pattern(
        &mut self,
        name: &str,
        pattern: &str,
        processor: Option<Processor>,
    ) -> Result<&mut Self> {
        self.insert(VariableRule {
            name: name.to_string(),
            pattern: Regex::new(&format!("(?s){}", pattern))?,
            processor,
        });
        Ok(self)
    }

    /// Names of all registered variables, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    fn insert(&mut self, rule: VariableRule) {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Extract every registered variable found in `text`
    pub fn extract(&self, text: &str) -> VariableRecord {
        let mut record = VariableRecord::new();

        for rule in &self.rules {
            let Some(raw) = rule.pattern.captures(text).and_then(|c| c.get(1)) else {
                continue;
            };

            let value = match rule.processor {
                Some(process) => process(raw.as_str()),
                None => Value::from(raw.as_str()),
            };

            if value.is_falsy() {
                trace!("Dropping empty variable '{}'", rule.name);
                continue;
            }
            record.insert(rule.name.clone(), value);
        }

        debug!("Extracted {} variable(s)", record.len());
        record
    }
}

/// Split a source array into its entries
///
/// Backslash continuations, tabs and newlines all count as separators.
pub fn split_source(data: &str) -> Value {
    Value::List(
        data.replace('\\', " ")
            .replace('\t', " ")
            .replace('\n', " ")
            .split_whitespace()
            .map(|entry| entry.trim().to_string())
            .collect(),
    )
}
