mod check;
mod infer;
mod validate;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use infer::InferCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-typecheck")]
pub(crate) enum CommandEnum {
    /// Run one synthetic call site through the checker, as an editor
    /// integration would, and print the fixed call.
    Check(Box<CheckCmd>),
    /// Print the type annotation implied by a query.
    Infer(Box<InferCmd>),
    /// Validate query documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Infer(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
