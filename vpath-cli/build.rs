//! Build script for vpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("vpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lexical path manipulation under POSIX or Windows semantics")
        .long_about(
            "Clean, join, split, relate and glob paths using the rules of a chosen \
             operating system, independent of the host",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("os")
                .long("os")
                .help("Path semantics to emulate: linux, darwin, windows or unknown")
                .value_name("KIND")
                .global(true)
                .env("VPATH_OS"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: text or json")
                .value_name("FORMAT")
                .global(true)
                .env("VPATH_OUTPUT_FORMAT"),
        )
        .subcommands([
            Command::new("clean")
                .about("Clean a path lexically")
                .long_about("Print the shortest path equivalent to PATH by purely lexical processing"),
            Command::new("join")
                .about("Join path elements and clean the result")
                .long_about("Join path elements with the separator, ignoring empty elements"),
            Command::new("split")
                .about("Split a path into directory and file")
                .long_about("Split PATH immediately after its final separator"),
            Command::new("dir")
                .about("Print all but the last element of a path"),
            Command::new("base")
                .about("Print the last element of a path"),
            Command::new("ext")
                .about("Print the extension of a path"),
            Command::new("rel")
                .about("Express a target path relative to a base path")
                .long_about("Print a relative path that reaches TARGET when joined to BASE; exits 3 when impossible"),
            Command::new("volume")
                .about("Print the volume name of a path")
                .long_about("Print the drive letter or UNC prefix of PATH; always empty under POSIX semantics"),
            Command::new("is-abs")
                .about("Report whether a path is absolute"),
            Command::new("match")
                .about("Match a name against a shell pattern")
                .long_about("Report whether NAME matches PATTERN; exits 2 on a malformed pattern"),
            Command::new("glob")
                .about("Expand a glob pattern against the filesystem")
                .long_about("Print every path matching PATTERN; exits 1 when nothing matches"),
            Command::new("components")
                .about("List the volume and components of an absolute path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main vpath.1 man page
    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("vpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
