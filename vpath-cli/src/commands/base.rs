//! Command to print the last element of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print the last element of PATH.
#[derive(Args)]
pub struct BaseCommand {
    /// Path to inspect
    pub path: String,
}

impl BaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let base = session.ctx.base(&self.path);
        session.emit("base", [self.path], Outcome::Path(base))
    }
}
