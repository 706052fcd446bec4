mod fragment_registry;
mod fragment_registry_builder;
mod loaded_fragment;

pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuildError;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use fragment_registry_builder::validate_operation_references;
pub use loaded_fragment::LoadedFragment;

#[cfg(test)]
mod tests;
