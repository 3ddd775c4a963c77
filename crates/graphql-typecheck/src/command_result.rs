use crate::output_utils;
use std::process::ExitCode;

/// What a subcommand prints and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// The command itself could not run (unreadable config, bad schema
    /// path and so on). The error chain is printed on one line.
    pub fn failure(err: &anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}", output_utils::RED_X))
    }

    /// Problems found in the user's queries or annotations. They go to
    /// stdout like a report, but the exit code still signals them.
    pub fn findings(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: None,
            stdout: Some(fmt_args.to_string()),
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(fmt_args.to_string()),
        }
    }
}
