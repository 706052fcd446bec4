use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::plugin_args::PluginArgs;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    args: PluginArgs,
}

impl ValidateCmd {
    fn validate(&self) -> anyhow::Result<String> {
        let run = self.args.run_plugin()?;
        log::debug!("Generated {} bytes (not written).", run.output.content.len());

        Ok(format!(
            concat!(
                "All GraphQL documents validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.",
            ),
            run.num_documents,
            run.num_skipped_files,
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        CommandResult::from_outcome(self.validate(), "GraphQL validation errors")
    }
}
