use crate::config::RawPluginConfig;

/// Prefixes and suffixes wrapped around converted definition names.
///
/// Operation names become
/// `document_variable_prefix + convert(name) + document_variable_suffix`;
/// fragment names use the `fragment_variable_*` pair.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NamingParams {
    pub document_variable_prefix: String,
    pub document_variable_suffix: String,
    pub fragment_variable_prefix: String,
    pub fragment_variable_suffix: String,
}
impl NamingParams {
    pub fn from_raw_config(raw_config: &RawPluginConfig) -> Self {
        Self {
            document_variable_prefix: raw_config.name_prefix.clone().unwrap_or_default(),
            document_variable_suffix: raw_config.name_suffix.clone().unwrap_or_default(),
            fragment_variable_prefix: raw_config.fragment_prefix.clone().unwrap_or_default(),
            fragment_variable_suffix: raw_config.fragment_suffix.clone().unwrap_or_default(),
        }
    }
}
