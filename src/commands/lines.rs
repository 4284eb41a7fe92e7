// src/commands/lines.rs

//! Print function bodies line by line

use super::load_pkgfile;
use anyhow::{Context, Result};
use crux_pkgfile::PkgfileConfig;
use std::path::Path;

/// Print the de-tabbed lines of `function`
pub fn cmd_lines(path: &Path, function: &str, config: &PkgfileConfig) -> Result<()> {
    let pkgfile = load_pkgfile(path, config)?;

    let lines = pkgfile.lines(function).with_context(|| {
        let known: Vec<_> = pkgfile.function_names().collect();
        if known.is_empty() {
            format!("{} defines no functions", path.display())
        } else {
            format!("{} defines: {}", path.display(), known.join(", "))
        }
    })?;

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
