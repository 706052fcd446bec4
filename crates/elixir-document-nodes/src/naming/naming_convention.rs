use crate::config::ConfigError;
use crate::config::RawNamingConvention;
use crate::naming::CaseTransform;

const KEEP_SELECTOR: &str = "keep";
const SUPPORTED_MODULES: &[&str] = &["change-case-all", "change-case"];

/// The transform used when no naming convention is configured (or when a
/// per-category map leaves a category unset).
///
/// Generated constants are Elixir function names, which must start with a
/// lowercase letter.
pub const DEFAULT_CASE_TRANSFORM: CaseTransform = CaseTransform::Snake;

/// What a single name category resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CategoryConvention {
    Keep,
    Transform(CaseTransform),
}

/// The categories of names a [`NamingConvention`] can target separately.
///
/// Operation and fragment names always belong to
/// [`NameCategory::TypeNames`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameCategory {
    EnumValues,
    TypeNames,
}

/// A naming convention, resolved once from its raw configuration form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NamingConvention {
    /// Names are emitted exactly as written in the GraphQL source.
    Keep,

    /// One transform for every name category.
    Single(CaseTransform),

    /// Per-category conventions. Unset categories use
    /// [`DEFAULT_CASE_TRANSFORM`].
    PerCategory {
        enum_values: Option<CategoryConvention>,
        type_names: Option<CategoryConvention>,
    },
}
impl NamingConvention {
    pub fn category(&self, category: NameCategory) -> CategoryConvention {
        match self {
            Self::Keep => CategoryConvention::Keep,
            Self::Single(transform) => CategoryConvention::Transform(*transform),
            Self::PerCategory { enum_values, type_names } => {
                let convention = match category {
                    NameCategory::EnumValues => enum_values,
                    NameCategory::TypeNames => type_names,
                };
                convention.unwrap_or(
                    CategoryConvention::Transform(DEFAULT_CASE_TRANSFORM),
                )
            },
        }
    }

    pub fn from_raw(raw: &RawNamingConvention) -> Result<Self, ConfigError> {
        match raw {
            RawNamingConvention::Selector(selector) =>
                Ok(match parse_selector(selector)? {
                    CategoryConvention::Keep => Self::Keep,
                    CategoryConvention::Transform(transform) =>
                        Self::Single(transform),
                }),

            RawNamingConvention::PerCategory(map) => Ok(Self::PerCategory {
                enum_values: map.enum_values.as_deref()
                    .map(parse_selector)
                    .transpose()?,
                type_names: map.type_names.as_deref()
                    .map(parse_selector)
                    .transpose()?,
            }),
        }
    }
}
impl Default for NamingConvention {
    fn default() -> Self {
        Self::Single(DEFAULT_CASE_TRANSFORM)
    }
}

/// Parse a selector string such as `"keep"`, `"change-case-all#pascalCase"`
/// or just `"pascalCase"`.
pub fn parse_selector(selector: &str) -> Result<CategoryConvention, ConfigError> {
    let selector = selector.trim();
    if selector == KEEP_SELECTOR {
        return Ok(CategoryConvention::Keep);
    }

    let function_name = match selector.split_once('#') {
        Some((module, function_name)) => {
            if !SUPPORTED_MODULES.contains(&module) {
                return Err(ConfigError::UnknownNamingModule {
                    module: module.to_string(),
                    selector: selector.to_string(),
                });
            }
            function_name
        },
        None => selector,
    };

    CaseTransform::from_function_name(function_name)
        .map(CategoryConvention::Transform)
        .ok_or_else(|| ConfigError::UnknownCaseFunction {
            function: function_name.to_string(),
            selector: selector.to_string(),
        })
}
