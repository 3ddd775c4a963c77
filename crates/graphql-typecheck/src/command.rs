use crate::Cli;
use crate::CommandResult;

/// A subcommand. Problems in the checked files are reported through the
/// returned [`CommandResult`] (see [`CommandResult::findings()`]); only
/// failures of the command itself go to stderr.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
