mod case_transform;
mod name_converter;
mod naming_convention;

pub use case_transform::CaseTransform;
pub use name_converter::NameConverter;
pub use naming_convention::CategoryConvention;
pub use naming_convention::DEFAULT_CASE_TRANSFORM;
pub use naming_convention::NameCategory;
pub use naming_convention::NamingConvention;
pub use naming_convention::parse_selector;
