mod command;
mod commands;

use clap::CommandFactory;
use clap::Parser;
pub(crate) use command::CommandResult;
pub(crate) use command::RunnableCommand;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-elixir", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        if let Err(err) = Cli::command().print_help() {
            eprintln!("{err}");
            return std::process::ExitCode::FAILURE;
        }
        return std::process::ExitCode::SUCCESS;
    };

    command.run(&cli).await.report()
}

/// `--verbose` wins over `LOG_LEVEL`. Logs go to stderr so generated output
/// and summaries on stdout stay clean.
fn setup_logger(cli: &Cli) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, invalid_env_level) = match (cli.verbose, env_level.as_deref()) {
        (true, _) => (tracing::Level::DEBUG, None),
        (false, None) => (DEFAULT_LOG_LEVEL, None),
        (false, Some(raw)) => match parse_log_level(raw) {
            Some(level) => (level, None),
            None => (DEFAULT_LOG_LEVEL, Some(raw)),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(raw) = invalid_env_level {
        log::warn!("Ignoring unrecognized `LOG_LEVEL` value `{raw}`.");
    }
}

fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim() {
        "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        other => other.parse().ok(),
    }
}
