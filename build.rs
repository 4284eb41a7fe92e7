// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: Pkgfile path
fn path_arg() -> Arg {
    Arg::new("path")
        .required(true)
        .value_name("PATH")
        .help("Path to the Pkgfile")
}

fn build_cli() -> Command {
    Command::new("pkgfile")
        .version(env!("CARGO_PKG_VERSION"))
        .author("crux-pkgfile contributors")
        .about("Inspect CRUX Pkgfiles")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Parser configuration file (TOML)"),
        )
        .subcommand(
            Command::new("show")
                .about("Show everything parsed from a Pkgfile")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .default_value("json")
                        .value_parser(["json", "toml"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("meta")
                .about("Show the comment metadata of a Pkgfile")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("vars")
                .about("Show the variables of a Pkgfile")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("lines")
                .about("Print the lines of a function body")
                .arg(path_arg())
                .arg(Arg::new("function").default_value("build").help("Function name")),
        )
        .subcommand(
            Command::new("info")
                .about("Summarize a port: name, version, package file and dependencies")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // OUT_DIR keeps the generated page out of the source tree
    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=OUT_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = out_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("pkgfile.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
