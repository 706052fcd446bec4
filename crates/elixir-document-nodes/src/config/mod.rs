mod config_error;
mod naming_params;
mod plugin_config;
mod raw_plugin_config;

pub use config_error::ConfigError;
pub use naming_params::NamingParams;
pub use plugin_config::DEFAULT_MODULE_NAME;
pub use plugin_config::PluginConfig;
pub use raw_plugin_config::RawNamingConvention;
pub use raw_plugin_config::RawNamingConventionMap;
pub use raw_plugin_config::RawPluginConfig;
