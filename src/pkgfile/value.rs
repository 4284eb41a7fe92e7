// src/pkgfile/value.rs

//! Values stored in the metadata and variable records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A processed field value
///
/// Plain fields stay as text. Fields with a list processor (dependency
/// lists, `source` arrays) become a list of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// True for an empty string or an empty list
    ///
    /// Falsy values never make it into a record.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
        }
    }

    /// Borrow the text of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// Borrow the items of a `List` value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Apply `f` to the text, or to every item of a list
    pub(crate) fn map_strings<F>(self, f: F) -> Value
    where
        F: Fn(String) -> String,
    {
        match self {
            Value::Text(s) => Value::Text(f(s)),
            Value::List(items) => Value::List(items.into_iter().map(f).collect()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::List(items) => write!(f, "{}", items.join(" ")),
        }
    }
}
