// src/commands/mod.rs
//! Command handlers for the pkgfile CLI

mod completions;
mod info;
mod inspect;
mod lines;

pub use completions::cmd_completions;
pub use info::cmd_info;
pub use inspect::{cmd_meta, cmd_show, cmd_vars};
pub use lines::cmd_lines;

use anyhow::{Context, Result};
use crux_pkgfile::{Pkgfile, PkgfileConfig};
use std::path::Path;
use tracing::info;

/// Parse the Pkgfile at `path` with registries extended by `config`
pub(crate) fn load_pkgfile(path: &Path, config: &PkgfileConfig) -> Result<Pkgfile> {
    info!("Parsing {}", path.display());

    let mut pkgfile =
        Pkgfile::with_config(config).with_context(|| "Invalid parser configuration")?;
    pkgfile
        .load_from_path(path)
        .with_context(|| format!("Failed to load Pkgfile: {}", path.display()))?;

    Ok(pkgfile)
}
