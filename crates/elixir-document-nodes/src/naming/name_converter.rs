use crate::config::ConfigError;
use crate::config::RawNamingConvention;
use crate::naming::CaseTransform;
use crate::naming::CategoryConvention;
use crate::naming::NameCategory;
use crate::naming::NamingConvention;

/// Applies a resolved [`NamingConvention`] to GraphQL names.
///
/// Unless `transform_underscore` is set, a name is split on `_`, each part
/// is transformed on its own and the parts are re-joined with `_`, so
/// underscores written in the source survive the transform.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameConverter {
    convention: NamingConvention,
    transform_underscore: bool,
}
impl NameConverter {
    pub fn convert(&self, name: &str, category: NameCategory) -> String {
        match self.convention.category(category) {
            CategoryConvention::Keep => name.to_string(),
            CategoryConvention::Transform(transform) =>
                self.apply_name_parts(name, transform),
        }
    }

    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    pub fn new(convention: NamingConvention, transform_underscore: bool) -> Self {
        Self {
            convention,
            transform_underscore,
        }
    }

    /// Resolve the raw `namingConvention` and `transformUnderscore` options.
    ///
    /// A `transformUnderscore` set inside a per-category map is OR-ed with
    /// the top-level flag.
    pub fn resolve(
        raw_convention: Option<&RawNamingConvention>,
        transform_underscore: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let mut transform_underscore = transform_underscore.unwrap_or(false);
        let convention = match raw_convention {
            Some(raw) => {
                if let RawNamingConvention::PerCategory(map) = raw {
                    transform_underscore |= map.transform_underscore.unwrap_or(false);
                }
                NamingConvention::from_raw(raw)?
            },
            None => NamingConvention::default(),
        };

        log::trace!(
            "Resolved naming convention {convention:?} \
            (transform_underscore={transform_underscore}).",
        );

        Ok(Self::new(convention, transform_underscore))
    }

    pub fn transform_underscore(&self) -> bool {
        self.transform_underscore
    }

    fn apply_name_parts(&self, name: &str, transform: CaseTransform) -> String {
        if self.transform_underscore {
            return transform.apply(name);
        }

        name.split('_')
            .map(|part| transform.apply(part))
            .collect::<Vec<_>>()
            .join("_")
    }
}
