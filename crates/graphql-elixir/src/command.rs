use crate::Cli;
use std::process::ExitCode;

const GREEN_CHECK: &str = "\u{2705}";
const RED_X: &str = "\u{274C}";

/// Outcome of a `graphql-elixir` subcommand.
#[derive(Debug)]
pub(crate) enum CommandResult {
    Failure {
        context: &'static str,
        err: anyhow::Error,
    },

    /// Summary printed to stdout.
    Success(String),
}

impl CommandResult {
    pub(crate) fn from_outcome(
        outcome: anyhow::Result<String>,
        failure_context: &'static str,
    ) -> Self {
        match outcome {
            Ok(summary) => Self::Success(summary),
            Err(err) => Self::Failure {
                context: failure_context,
                err,
            },
        }
    }

    /// Prints the outcome and maps it to the process exit code.
    pub(crate) fn report(self) -> ExitCode {
        match self {
            Self::Failure { context, err } => {
                eprintln!("{RED_X} {context}: {err:#}");
                ExitCode::FAILURE
            },
            Self::Success(summary) => {
                println!("{GREEN_CHECK} {summary}");
                ExitCode::SUCCESS
            },
        }
    }
}

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
