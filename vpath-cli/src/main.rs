//! Main entry point for the vpath CLI.
//!
//! Each subcommand runs one lexical path operation under POSIX or Windows
//! semantics, selected with `--os`, `VPATH_OS` or a config file, and prints
//! the result as text or JSON.

use clap::Parser;
use vpath_cli::Cli;

/// Exit code for malformed command lines.
const EXIT_INVALID_ARGUMENTS: i32 = 4;

fn main() {
    // Parse CLI arguments; usage errors share the invalid-arguments code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_INVALID_ARGUMENTS);
        }
    };

    // Initialize logging based on verbosity
    vpath::init_logger(cli.verbose, cli.quiet).install();

    let global = cli.global_options();

    // Execute the command
    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
