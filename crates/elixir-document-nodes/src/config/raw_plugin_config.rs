use crate::config::ConfigError;
use crate::file_reader;
use crate::fragments::LoadedFragment;
use serde::Deserialize;
use std::path::Path;

/// Plugin options as the host supplies them.
///
/// Every option is optional. JSON keys are camelCase, matching the option
/// names used in codegen configuration files:
///
/// ```
/// use elixir_document_nodes::config::RawPluginConfig;
///
/// let config = RawPluginConfig::from_json_str(r#"{
///     "moduleName": "MyApp.GraphQL",
///     "namingConvention": "change-case-all#snakeCase",
///     "nameSuffix": "_query"
/// }"#).unwrap();
///
/// assert_eq!(config.module_name.as_deref(), Some("MyApp.GraphQL"));
/// assert_eq!(config.name_suffix.as_deref(), Some("_query"));
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPluginConfig {
    /// Fragments resolved by the host outside of the current document set.
    /// They can be spread by operations but are never emitted themselves.
    #[serde(skip)]
    pub external_fragments: Vec<LoadedFragment>,
    pub fragment_prefix: Option<String>,
    pub fragment_suffix: Option<String>,
    pub module_name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub naming_convention: Option<RawNamingConvention>,
    pub transform_underscore: Option<bool>,
}
impl RawPluginConfig {
    pub fn from_json_file(file_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = file_reader::read_content(file_path)?;
        Self::from_json_str(content.as_str())
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn with_external_fragments(
        mut self,
        fragments: impl IntoIterator<Item = LoadedFragment>,
    ) -> Self {
        self.external_fragments.extend(fragments);
        self
    }
}

/// The raw `namingConvention` option: either a single selector string
/// (`"keep"`, `"change-case-all#pascalCase"`, ...) or a per-category map.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum RawNamingConvention {
    Selector(String),
    PerCategory(RawNamingConventionMap),
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNamingConventionMap {
    pub enum_values: Option<String>,
    pub transform_underscore: Option<bool>,
    pub type_names: Option<String>,
}
