// src/pkgfile/mod.rs

//! Pkgfile parsing
//!
//! A Pkgfile is a shell script describing how to build a port. It carries
//! three kinds of data that are extracted independently:
//!
//! ```bash
//! # Description: Small and friendly text editor
//! # URL: https://www.nano-editor.org
//! # Depends on: ncurses, file
//!
//! name=nano
//! version=8.5
//! release=1
//! source=(https://www.nano-editor.org/dist/v8/$name-$version.tar.xz)
//!
//! build() {
//!     cd $name-$version
//!     ./configure --prefix=/usr
//!     make
//!     make DESTDIR=$PKG install
//! }
//! ```
//!
//! - **Metadata**: `# Key: value` comment lines
//! - **Variables**: `name`, `version`, `release` and the `source` array
//! - **Functions**: `name() { ... }` blocks, usually just `build`
//!
//! Extraction is permissive. Anything that does not match is left out of
//! the result rather than reported.

pub mod encoding;
mod functions;
pub mod metadata;
mod source;
mod value;
pub mod variables;

pub use encoding::{decode_text, TextEncoding};
pub use functions::{FunctionExtractor, FunctionRecord};
pub use metadata::{MetadataExtractor, MetadataRecord};
pub use source::{SourceEntry, SourceKind};
pub use value::Value;
pub use variables::{VariableExtractor, VariableRecord};

use crate::config::PkgfileConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Post-processor for a captured metadata or variable value
pub type Processor = fn(&str) -> Value;

/// A parsed Pkgfile
///
/// Holds one extractor of each kind and the three records they produced.
/// Loading new text replaces all three records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pkgfile {
    #[serde(skip)]
    metadata_extractor: MetadataExtractor,
    #[serde(skip)]
    variable_extractor: VariableExtractor,
    #[serde(skip)]
    function_extractor: FunctionExtractor,

    metadata: MetadataRecord,
    variables: VariableRecord,
    functions: FunctionRecord,
}

impl Pkgfile {
    /// Create an empty document with the default registries
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with registries extended by `config`
    pub fn with_config(config: &PkgfileConfig) -> Result<Self> {
        Ok(Self::with_extractors(
            config.metadata_extractor(),
            config.variable_extractor()?,
            FunctionExtractor::new(),
        ))
    }

    /// Create an empty document from custom extractors
    pub fn with_extractors(
        metadata_extractor: MetadataExtractor,
        variable_extractor: VariableExtractor,
        function_extractor: FunctionExtractor,
    ) -> Self {
        Self {
            metadata_extractor,
            variable_extractor,
            function_extractor,
            ..Default::default()
        }
    }

    /// Parse text with the default registries
    pub fn parse(text: &str) -> Self {
        let mut pkgfile = Self::new();
        pkgfile.load_from_text(text);
        pkgfile
    }

    /// Read and parse a file with the default registries
    pub fn parse_file(path: &Path) -> Result<Self> {
        let mut pkgfile = Self::new();
        pkgfile.load_from_path(path)?;
        Ok(pkgfile)
    }

    /// Read `path`, decode it and run all extractors over its contents
    pub fn load_from_path(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (text, encoding) = decode_text(&bytes);
        if encoding != TextEncoding::Utf8 {
            info!("{} is not UTF-8, decoded as {:?}", path.display(), encoding);
        }

        self.load_from_text(&text);
        Ok(())
    }

    /// Run all extractors over `text`, replacing any previous results
    pub fn load_from_text(&mut self, text: &str) {
        self.metadata = self.metadata_extractor.extract(text);
        self.variables = self.variable_extractor.extract(text);
        self.functions = self.function_extractor.extract(text);

        debug!(
            "Parsed Pkgfile: {} metadata, {} variables, {} functions",
            self.metadata.len(),
            self.variables.len(),
            self.functions.len()
        );
    }

    pub fn metadata(&self) -> &MetadataRecord {
        &self.metadata
    }

    pub fn variables(&self) -> &VariableRecord {
        &self.variables
    }

    pub fn functions(&self) -> &FunctionRecord {
        &self.functions
    }

    /// Lines of a function body, see [`FunctionRecord::lines`]
    pub fn lines(&self, function: &str) -> Result<Vec<String>> {
        self.functions.lines(function)
    }

    /// Raw body of a function
    pub fn body(&self, function: &str) -> Option<&str> {
        self.functions.get(function)
    }

    pub fn has_function(&self, function: &str) -> bool {
        self.functions.contains(function)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.names()
    }

    fn variable_text(&self, name: &str) -> Option<&str> {
        self.variables.get(name).and_then(Value::as_text)
    }

    fn metadata_list(&self, key: &str) -> &[String] {
        self.metadata
            .get(key)
            .and_then(Value::as_list)
            .unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.variable_text("name")
    }

    pub fn version(&self) -> Option<&str> {
        self.variable_text("version")
    }

    pub fn release(&self) -> Option<&str> {
        self.variable_text("release")
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.get("description").and_then(Value::as_text)
    }

    pub fn url(&self) -> Option<&str> {
        self.metadata.get("url").and_then(Value::as_text)
    }

    /// Entries of the `source` array, in file order
    pub fn sources(&self) -> &[String] {
        self.variables
            .get("source")
            .and_then(Value::as_list)
            .unwrap_or_default()
    }

    /// Classified entries of the `source` array
    pub fn source_entries(&self) -> Vec<SourceEntry> {
        self.sources().iter().map(|s| SourceEntry::new(s)).collect()
    }

    /// Names from the `Depends on` line
    pub fn depends_on(&self) -> &[String] {
        self.metadata_list("depends on")
    }

    /// Names from the `Nice to have` line
    pub fn nice_to_have(&self) -> &[String] {
        self.metadata_list("nice to have")
    }

    /// Archive name the port builds into, `name#version-release.pkg.tar.gz`
    pub fn package_file_name(&self) -> Option<String> {
        Some(format!(
            "{}#{}-{}.pkg.tar.gz",
            self.name()?,
            self.version()?,
            self.release()?
        ))
    }
}
