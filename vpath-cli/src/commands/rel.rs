//! Command to express one path relative to another.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print a relative path that reaches TARGET when joined to BASE.
///
/// Fails with exit code 3 when the two paths cannot be related lexically,
/// for example when only one is absolute or they sit on different volumes.
#[derive(Args)]
pub struct RelCommand {
    /// Base path
    pub base: String,

    /// Target path
    pub target: String,
}

impl RelCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let rel = session.ctx.rel(&self.base, &self.target)?;
        session.emit("rel", [self.base, self.target], Outcome::Path(rel))
    }
}
