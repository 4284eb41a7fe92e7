// src/commands/info.rs

//! Port summary

use super::load_pkgfile;
use anyhow::Result;
use crux_pkgfile::PkgfileConfig;
use std::path::Path;
use tracing::warn;

/// Print a short summary of the port
pub fn cmd_info(path: &Path, config: &PkgfileConfig) -> Result<()> {
    let pkgfile = load_pkgfile(path, config)?;

    println!("Name: {}", pkgfile.name().unwrap_or("(unset)"));
    println!(
        "Version: {}-{}",
        pkgfile.version().unwrap_or("(unset)"),
        pkgfile.release().unwrap_or("(unset)")
    );
    if let Some(description) = pkgfile.description() {
        println!("Description: {}", description);
    }
    if let Some(url) = pkgfile.url() {
        println!("URL: {}", url);
    }

    match pkgfile.package_file_name() {
        Some(file) => println!("Package: {}", file),
        None => warn!("name, version or release missing, cannot derive package file name"),
    }

    if !pkgfile.depends_on().is_empty() {
        println!("Depends on: {}", pkgfile.depends_on().join(", "));
    }
    if !pkgfile.nice_to_have().is_empty() {
        println!("Nice to have: {}", pkgfile.nice_to_have().join(", "));
    }

    let entries = pkgfile.source_entries();
    if !entries.is_empty() {
        println!("Sources:");
        for entry in &entries {
            let origin = if entry.is_remote() { "remote" } else { "local" };
            println!("  {} ({}, {})", entry.reference, origin, entry.file_name());
        }
    }

    if !pkgfile.has_function("build") {
        warn!("{} has no build function", path.display());
    }

    Ok(())
}
