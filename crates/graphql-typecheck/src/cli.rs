use clap::CommandFactory;
use crate::commands;

/// Keeps the TypeScript annotations on GraphQL query calls in sync with the
/// queries they carry.
#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-typecheck",
    version,
    after_help = "Set LOG_LEVEL (trace, debug, info, warn, error) to control logging.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log pipeline stages (schema loads, validation, reconciliation). \
             Overrides LOG_LEVEL.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to check; show the usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
