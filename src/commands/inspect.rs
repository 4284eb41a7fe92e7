// src/commands/inspect.rs

//! Dump parsed Pkgfile records

use super::load_pkgfile;
use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use crux_pkgfile::{PkgfileConfig, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Print the whole parsed document
pub fn cmd_show(path: &Path, format: OutputFormat, config: &PkgfileConfig) -> Result<()> {
    let pkgfile = load_pkgfile(path, config)?;

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&pkgfile)
            .with_context(|| "Failed to serialize Pkgfile to JSON")?,
        OutputFormat::Toml => toml::to_string_pretty(&pkgfile)
            .with_context(|| "Failed to serialize Pkgfile to TOML")?,
    };
    println!("{}", output);

    Ok(())
}

/// Print the metadata record, one `key: value` per line
pub fn cmd_meta(path: &Path, config: &PkgfileConfig) -> Result<()> {
    let pkgfile = load_pkgfile(path, config)?;
    print_record(pkgfile.metadata(), ": ");
    Ok(())
}

/// Print the variable record, one `name=value` per line
pub fn cmd_vars(path: &Path, config: &PkgfileConfig) -> Result<()> {
    let pkgfile = load_pkgfile(path, config)?;
    print_record(pkgfile.variables(), "=");
    Ok(())
}

fn print_record(record: &BTreeMap<String, Value>, separator: &str) {
    for (key, value) in record {
        println!("{}{}{}", key, separator, value);
    }
}
