use crate::config::ConfigError;
use crate::fragments::FragmentRegistryBuildError;
use crate::visitor::DuplicateGeneratedNameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DuplicateGeneratedName(#[from] DuplicateGeneratedNameError),

    #[error("Invalid fragments:\n{}", format_fragment_errors(.0))]
    Fragments(Vec<FragmentRegistryBuildError>),

    #[error("Plugin \"elixir-document-nodes\" requires extension to be \".ex\"!")]
    InvalidOutputExtension { output_file: PathBuf },
}
impl From<Vec<FragmentRegistryBuildError>> for PluginError {
    fn from(errors: Vec<FragmentRegistryBuildError>) -> Self {
        Self::Fragments(errors)
    }
}

fn format_fragment_errors(errors: &[FragmentRegistryBuildError]) -> String {
    errors.iter()
        .map(|err| format!("  * {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
