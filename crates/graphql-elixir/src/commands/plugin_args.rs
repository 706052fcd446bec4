use crate::commands::document_paths::find_document_paths;
use anyhow::Context;
use elixir_document_nodes::DocumentFile;
use elixir_document_nodes::PluginOutput;
use elixir_document_nodes::Schema;
use elixir_document_nodes::config::RawPluginConfig;
use elixir_document_nodes::fragments::LoadedFragment;
use std::path::PathBuf;

/// Arguments shared by every command that runs the plugin.
#[derive(Debug, clap::Args)]
pub(crate) struct PluginArgs {
    #[arg(
        help="Path to a JSON file with plugin options (`moduleName`, \
             `namingConvention`, `namePrefix`, ...).",
        long,
        short='c',
    )]
    pub config: Option<PathBuf>,

    #[arg(
        help="Paths to GraphQL files or directories whose fragments may be \
             spread by the documents but must not be emitted themselves.",
        long,
        value_delimiter = ',',
    )]
    pub external_fragments: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Path of the Elixir file to generate. Must end in `.ex`.",
        long,
        short='o',
    )]
    pub output: PathBuf,

    #[arg(
        help="Path to the GraphQL schema file.",
        long,
        short='s',
    )]
    pub schema: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL document files or directories \
             containing GraphQL document files.",
        name="DOCUMENT_PATHS",
        required=true,
    )]
    pub document_paths: Vec<PathBuf>,
}

/// Everything the plugin needs, loaded from disk.
#[derive(Debug)]
pub(crate) struct PluginInputs {
    pub config: RawPluginConfig,
    pub documents: Vec<DocumentFile>,
    pub num_skipped_files: usize,
    pub schema: Schema,
}

/// The generated module plus what went into it.
#[derive(Debug)]
pub(crate) struct PluginRun {
    pub num_documents: usize,
    pub num_skipped_files: usize,
    pub output: PluginOutput,
}

impl PluginArgs {
    /// Loads the inputs, checks the output path and generates the module
    /// without writing it anywhere.
    pub(crate) fn run_plugin(&self) -> anyhow::Result<PluginRun> {
        let inputs = self.load()?;

        elixir_document_nodes::validate(
            &inputs.schema,
            &inputs.documents,
            &inputs.config,
            &self.output,
        )?;
        let output = elixir_document_nodes::plugin(
            &inputs.schema,
            &inputs.documents,
            &inputs.config,
        )?;

        Ok(PluginRun {
            num_documents: inputs.documents.len(),
            num_skipped_files: inputs.num_skipped_files,
            output,
        })
    }

    fn load(&self) -> anyhow::Result<PluginInputs> {
        let schema = match &self.schema {
            Some(schema_path) => Schema::from_file(schema_path)
                .with_context(|| format!("Failed to load schema {schema_path:?}"))?,
            None => {
                log::debug!("No --schema given; generating against an empty schema.");
                Schema::empty()
            },
        };

        let mut config = match &self.config {
            Some(config_path) => RawPluginConfig::from_json_file(config_path)
                .with_context(|| format!("Failed to load config {config_path:?}"))?,
            None => RawPluginConfig::default(),
        };

        let document_paths = find_document_paths(
            &self.document_paths,
            &self.graphql_file_exts,
        )?;
        let documents = document_paths.file_paths.iter()
            .map(DocumentFile::from_file)
            .collect::<Result<Vec<_>, _>>()?;

        if !self.external_fragments.is_empty() {
            let external_paths = find_document_paths(
                &self.external_fragments,
                &self.graphql_file_exts,
            )?;
            for path in &external_paths.file_paths {
                let document_file = DocumentFile::from_file(path)?;
                config.external_fragments.extend(
                    LoadedFragment::externals_from_document_file(&document_file),
                );
            }
            log::debug!(
                "Loaded {} external fragments.",
                config.external_fragments.len(),
            );
        }

        Ok(PluginInputs {
            config,
            documents,
            num_skipped_files: document_paths.num_skipped_files,
            schema,
        })
    }
}
