// src/pkgfile/source.rs

//! Classification of `source` entries

use serde::Serialize;

/// Where a source entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Fetched from a URL (`scheme://...`)
    Remote,
    /// Shipped next to the Pkgfile in the port directory
    Local,
}

/// A single entry of the `source` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    pub reference: String,
    pub kind: SourceKind,
}

impl SourceEntry {
    pub fn new(reference: &str) -> Self {
        let kind = if has_scheme(reference) {
            SourceKind::Remote
        } else {
            SourceKind::Local
        };

        Self {
            reference: reference.to_string(),
            kind,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.kind == SourceKind::Remote
    }

    /// File name the entry is stored under once fetched
    pub fn file_name(&self) -> &str {
        match self.kind {
            SourceKind::Remote => self
                .reference
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(&self.reference),
            SourceKind::Local => &self.reference,
        }
    }
}

fn has_scheme(reference: &str) -> bool {
    match reference.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
