//! Command to split a path after its final separator.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Split PATH into a directory part and a file part.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    pub path: String,

    /// Drop the final separator from both parts, so "/a/b" splits into
    /// "/a" and "b"
    #[arg(long)]
    pub abs: bool,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let (dir, file) = if self.abs {
            session.ctx.split_abs(&self.path)
        } else {
            session.ctx.split(&self.path)
        };
        let outcome = Outcome::Split {
            dir: dir.to_string(),
            file: file.to_string(),
        };
        session.emit("split", [self.path.clone()], outcome)
    }
}
