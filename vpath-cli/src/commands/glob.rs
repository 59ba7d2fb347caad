//! Command to expand a glob pattern against the host filesystem.

use crate::error::CliError;
use crate::host_fs::HostFs;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use log::info;
use vpath::output::Outcome;

/// Print every path on the host filesystem that matches PATTERN.
///
/// Unreadable directories are skipped silently. Matches are sorted within
/// each directory. Exits with code 1 when nothing matches.
#[derive(Args)]
pub struct GlobCommand {
    /// Pattern to expand, e.g. "src/*/*.rs"
    pub pattern: String,

    /// Succeed with empty output when nothing matches
    #[arg(long)]
    pub allow_empty: bool,
}

impl GlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let matches = session.ctx.glob(&HostFs, &self.pattern)?;
        info!("{} matched {} path(s)", self.pattern, matches.len());

        let empty = matches.is_empty();
        session.emit("glob", [self.pattern.clone()], Outcome::Paths(matches))?;

        if empty && !self.allow_empty {
            return Err(CliError::SemanticFailure(format!(
                "no matches for {}",
                self.pattern
            )));
        }
        Ok(())
    }
}
