//! Command to match a name against a shell pattern.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Report whether NAME matches the shell PATTERN.
///
/// Prints true or false. A malformed pattern exits with code 2; with
/// --check, a well-formed pattern that does not match exits with code 1.
#[derive(Args)]
pub struct MatchCommand {
    /// Shell pattern: '*', '?', '[...]' and, under POSIX semantics, '\' escapes
    pub pattern: String,

    /// Name to match
    pub name: String,

    /// Exit with status 1 when the name does not match
    #[arg(long)]
    pub check: bool,
}

impl MatchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let matched = session.ctx.match_pattern(&self.pattern, &self.name)?;
        session.emit(
            "match",
            [self.pattern.clone(), self.name.clone()],
            Outcome::Flag(matched),
        )?;

        if self.check && !matched {
            return Err(CliError::SemanticFailure(format!(
                "{} does not match {}",
                self.name, self.pattern
            )));
        }
        Ok(())
    }
}
