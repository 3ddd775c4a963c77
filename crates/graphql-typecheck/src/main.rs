mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = &result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = &result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Install the `tracing` subscriber. Library code logs through `log`, which
/// the subscriber picks up as well. Logs go to stderr so that `infer` output
/// can be piped.
fn init_logging(cli: &Cli) {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, invalid_env_value) = if cli.verbose {
        (tracing::Level::DEBUG, None)
    } else {
        match env_value.as_deref().map(str::trim) {
            None => (DEFAULT_LOG_LEVEL, None),
            Some(value) => match parse_log_level(value) {
                Some(level) => (level, None),
                None => (DEFAULT_LOG_LEVEL, Some(value)),
            },
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = invalid_env_value {
        log::warn!("Ignoring unrecognized `{LOG_LEVEL_ENV_VAR}` value `{value}`.");
    }
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
