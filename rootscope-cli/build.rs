//! Build script for rootscope-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("rootscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Enumerate search roots and map resources back to them")
        .long_about(
            "Command-line tool for inspecting search roots and the resources they own",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("ROOTSCOPE_CONFIG"),
        )
        .arg(
            Arg::new("path-list")
                .long("path-list")
                .help("Use this path-list instead of the configured environment variable")
                .value_name("LIST")
                .global(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator between path-list entries")
                .value_name("CHAR")
                .global(true),
        )
        .arg(
            Arg::new("longest-prefix")
                .long("longest-prefix")
                .help("Match resources to the most specific containing root")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json", "path-list"])
                .default_value("text")
                .global(true),
        )
        .subcommands(vec![
            Command::new("roots")
                .about("List the roots currently in effect")
                .long_about("List the layer roots followed by the path-list roots"),
            Command::new("resources")
                .about("List resources visible under a namespace prefix")
                .long_about("List every resource location below a namespace prefix, root by root"),
            Command::new("prefix-roots")
                .about("List the roots owning resources under a namespace prefix")
                .long_about("Map each resource under a namespace prefix back to its owning root"),
            Command::new("locate")
                .about("Find the root holding a type or resource")
                .long_about("Print the root a type name or resource path resolves from"),
            Command::new("match")
                .about("Find the root a locator belongs to")
                .long_about("Match a resource locator against a set of candidate roots"),
            Command::new("normalize")
                .about("Print the normalized form of locators")
                .long_about("Normalize file paths and URLs into canonical absolute form"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a rootscope configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about(
                    "Generate shell completion scripts for bash, zsh, fish, or PowerShell",
                ),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rootscope.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
