mod document_paths;
mod generate;
mod plugin_args;
mod validate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-elixir")]
pub(crate) enum CommandEnum {
    /// Generate an Elixir module from GraphQL documents and write it to
    /// the output file.
    Generate(Box<GenerateCmd>),

    /// Check that the documents and config would generate successfully,
    /// without writing anything.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
