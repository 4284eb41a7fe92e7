// src/cli.rs
//! CLI definitions for the pkgfile tool
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pkgfile")]
#[command(author = "crux-pkgfile contributors")]
#[command(version)]
#[command(about = "Inspect CRUX Pkgfiles", long_about = None)]
pub struct Cli {
    /// Parser configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for structured commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show everything parsed from a Pkgfile
    Show {
        /// Path to the Pkgfile
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Show the comment metadata of a Pkgfile
    Meta {
        /// Path to the Pkgfile
        path: PathBuf,
    },

    /// Show the variables of a Pkgfile
    Vars {
        /// Path to the Pkgfile
        path: PathBuf,
    },

    /// Print the lines of a function body
    Lines {
        /// Path to the Pkgfile
        path: PathBuf,

        /// Function name
        #[arg(default_value = "build")]
        function: String,
    },

    /// Summarize a port: name, version, package file and dependencies
    Info {
        /// Path to the Pkgfile
        path: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
