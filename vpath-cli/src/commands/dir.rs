//! Command to print the directory part of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print all but the last element of PATH, cleaned.
#[derive(Args)]
pub struct DirCommand {
    /// Path to inspect
    pub path: String,
}

impl DirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let dir = session.ctx.dir(&self.path);
        session.emit("dir", [self.path], Outcome::Path(dir))
    }
}
