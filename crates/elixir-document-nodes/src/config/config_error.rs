use crate::file_reader::ReadContentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read plugin config: {0}")]
    ConfigFileRead(#[from] ReadContentError),

    #[error("Invalid plugin config JSON: {0}")]
    InvalidConfigJson(#[from] serde_json::Error),

    #[error(
        "Unknown case function `{function}` in naming convention `{selector}`"
    )]
    UnknownCaseFunction {
        function: String,
        selector: String,
    },

    #[error(
        "Unsupported naming convention module `{module}` in `{selector}` \
        (expected `change-case-all#<function>`)"
    )]
    UnknownNamingModule {
        module: String,
        selector: String,
    },
}
