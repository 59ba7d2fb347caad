//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print the file name extension of PATH, including the dot.
#[derive(Args)]
pub struct ExtCommand {
    /// Path to inspect
    pub path: String,
}

impl ExtCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let ext = session.ctx.ext(&self.path).to_string();
        session.emit("ext", [self.path], Outcome::Path(ext))
    }
}
