// src/lib.rs

//! CRUX Pkgfile parser
//!
//! Turns a port's `Pkgfile` into structured data: comment metadata,
//! shell variables and function bodies.
//!
//! # Example
//!
//! ```
//! use crux_pkgfile::Pkgfile;
//!
//! let pkgfile = Pkgfile::parse("# Depends on: zlib\nname=foo\nversion=1.0\nrelease=1\n");
//! assert_eq!(pkgfile.name(), Some("foo"));
//! assert_eq!(pkgfile.depends_on(), ["zlib"]);
//! ```

pub mod config;
mod error;
pub mod pkgfile;

pub use config::PkgfileConfig;
pub use error::{Error, Result};
pub use pkgfile::{
    decode_text, FunctionExtractor, FunctionRecord, MetadataExtractor, MetadataRecord, Pkgfile,
    Processor, SourceEntry, SourceKind, TextEncoding, Value, VariableExtractor, VariableRecord,
};
