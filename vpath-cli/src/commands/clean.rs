//! Command to lexically clean a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print the shortest path equivalent to PATH by purely lexical processing.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to clean
    pub path: String,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let cleaned = session.ctx.clean(&self.path);
        session.emit("clean", [self.path], Outcome::Path(cleaned))
    }
}
