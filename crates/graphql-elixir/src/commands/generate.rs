use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::plugin_args::PluginArgs;
use anyhow::Context;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[command(flatten)]
    args: PluginArgs,
}

impl GenerateCmd {
    fn generate(&self) -> anyhow::Result<String> {
        let run = self.args.run_plugin()?;
        let output_path = &self.args.output;

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {parent:?}"))?;
        }
        let content = format!("{}\n", run.output.content);
        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {output_path:?}"))?;
        log::debug!("Wrote {} bytes to {output_path:?}.", content.len());

        Ok(format!(
            concat!(
                "Generated {:?}:\n",
                "  * Read {} GraphQL documents.\n",
                "  * Skipped {} non-graphql files.",
            ),
            output_path,
            run.num_documents,
            run.num_skipped_files,
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        CommandResult::from_outcome(self.generate(), "Generation failed")
    }
}
