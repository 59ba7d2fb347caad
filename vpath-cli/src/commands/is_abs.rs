//! Command to test whether a path is absolute.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Report whether PATH is absolute.
///
/// Prints true or false; with --check, exits 1 when the path is not
/// absolute.
#[derive(Args)]
pub struct IsAbsCommand {
    /// Path to test
    pub path: String,

    /// Exit with status 1 unless the path is absolute
    #[arg(long)]
    pub check: bool,
}

impl IsAbsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let absolute = session.ctx.is_abs(&self.path);
        session.emit("is-abs", [self.path.clone()], Outcome::Flag(absolute))?;

        if self.check && !absolute {
            return Err(CliError::SemanticFailure(format!(
                "{} is not an absolute {} path",
                self.path,
                session.ctx.os()
            )));
        }
        Ok(())
    }
}
