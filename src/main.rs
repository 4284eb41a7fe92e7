// src/main.rs

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use crux_pkgfile::PkgfileConfig;
use tracing::debug;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PkgfileConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PkgfileConfig::default(),
    };
    debug!("Using config: {:?}", config);

    match cli.command {
        Some(Commands::Show { path, format }) => commands::cmd_show(&path, format, &config),
        Some(Commands::Meta { path }) => commands::cmd_meta(&path, &config),
        Some(Commands::Vars { path }) => commands::cmd_vars(&path, &config),
        Some(Commands::Lines { path, function }) => commands::cmd_lines(&path, &function, &config),
        Some(Commands::Info { path }) => commands::cmd_info(&path, &config),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => {
            // No command provided, show help
            println!("pkgfile v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'pkgfile --help' for usage information");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lines_defaults_to_build() {
        let cli = Cli::try_parse_from(["pkgfile", "lines", "Pkgfile"]).unwrap();
        match cli.command {
            Some(Commands::Lines { function, .. }) => assert_eq!(function, "build"),
            _ => panic!("expected lines command"),
        }
    }

    #[test]
    fn test_show_format_and_global_config() {
        let cli =
            Cli::try_parse_from(["pkgfile", "show", "Pkgfile", "--format", "toml", "-c", "x.toml"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        match cli.command {
            Some(Commands::Show { format, .. }) => assert_eq!(format, cli::OutputFormat::Toml),
            _ => panic!("expected show command"),
        }
    }
}
