use crate::config::ConfigError;
use crate::config::NamingParams;
use crate::config::RawPluginConfig;
use crate::naming::NameConverter;

pub const DEFAULT_MODULE_NAME: &str = "Generated.GraphQL";

/// [`RawPluginConfig`] with defaults applied and the naming convention
/// resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PluginConfig {
    pub module_name: String,
    pub name_converter: NameConverter,
    pub naming_params: NamingParams,
}
impl PluginConfig {
    pub fn resolve(raw_config: &RawPluginConfig) -> Result<Self, ConfigError> {
        let name_converter = NameConverter::resolve(
            raw_config.naming_convention.as_ref(),
            raw_config.transform_underscore,
        )?;

        Ok(Self {
            module_name: raw_config.module_name.clone()
                .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string()),
            name_converter,
            naming_params: NamingParams::from_raw_config(raw_config),
        })
    }
}
