// src/error.rs

//! Error types for Pkgfile parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the parser and its configuration
///
/// Extraction itself never fails: a field that does not match is simply
/// absent. Only file access, configuration and function lookup can error.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a Pkgfile or config file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `lines()` was asked for a function the Pkgfile does not define
    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    /// Configuration file is not valid TOML for the expected schema
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A registered variable pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Variable names must be valid shell identifiers
    #[error("Invalid variable name: '{0}'")]
    InvalidVariableName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
