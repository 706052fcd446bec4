use heck::ToKebabCase;
use heck::ToLowerCamelCase;
use heck::ToShoutySnakeCase;
use heck::ToSnakeCase;
use heck::ToTitleCase;
use heck::ToTrainCase;
use heck::ToUpperCamelCase;

/// A case-conversion function applied to GraphQL definition names.
///
/// Each variant corresponds to one of the `change-case-all` function names
/// accepted in `namingConvention` selectors (see
/// [`CaseTransform::from_function_name`]).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CaseTransform {
    /// `getUserQuery`
    Camel,
    /// `Get User Query`
    Capital,
    /// `GET_USER_QUERY`
    Constant,
    /// `get.user.query`
    Dot,
    /// `Get-User-Query`
    Header,
    /// `get user query`
    No,
    /// `get-user-query`
    Param,
    /// `GetUserQuery`
    Pascal,
    /// `get/user/query`
    Path,
    /// `Get user query`
    Sentence,
    /// `get_user_query`
    Snake,
    Title,
    Lower,
    LowerFirst,
    Upper,
    UpperFirst,
}
impl CaseTransform {
    const ALL: &'static [(&'static str, CaseTransform)] = &[
        ("camelCase", CaseTransform::Camel),
        ("capitalCase", CaseTransform::Capital),
        ("constantCase", CaseTransform::Constant),
        ("dotCase", CaseTransform::Dot),
        ("headerCase", CaseTransform::Header),
        ("noCase", CaseTransform::No),
        ("paramCase", CaseTransform::Param),
        ("pascalCase", CaseTransform::Pascal),
        ("pathCase", CaseTransform::Path),
        ("sentenceCase", CaseTransform::Sentence),
        ("snakeCase", CaseTransform::Snake),
        ("titleCase", CaseTransform::Title),
        ("lowerCase", CaseTransform::Lower),
        ("localeLowerCase", CaseTransform::Lower),
        ("lowerCaseFirst", CaseTransform::LowerFirst),
        ("upperCase", CaseTransform::Upper),
        ("localeUpperCase", CaseTransform::Upper),
        ("upperCaseFirst", CaseTransform::UpperFirst),
    ];

    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Camel => input.to_lower_camel_case(),
            Self::Capital | Self::Title => input.to_title_case(),
            Self::Constant => input.to_shouty_snake_case(),
            Self::Dot => join_snake_words(input, "."),
            Self::Header => input.to_train_case(),
            Self::No => join_snake_words(input, " "),
            Self::Param => input.to_kebab_case(),
            Self::Pascal => input.to_upper_camel_case(),
            Self::Path => join_snake_words(input, "/"),
            Self::Sentence => upper_first(&join_snake_words(input, " ")),
            Self::Snake => input.to_snake_case(),
            Self::Lower => input.to_lowercase(),
            Self::LowerFirst => lower_first(input),
            Self::Upper => input.to_uppercase(),
            Self::UpperFirst => upper_first(input),
        }
    }

    /// Look up a transform by its `change-case-all` function name (e.g.
    /// `"pascalCase"`).
    pub fn from_function_name(function_name: &str) -> Option<Self> {
        Self::ALL.iter()
            .find(|(name, _)| *name == function_name)
            .map(|(_, transform)| *transform)
    }

    pub fn function_name(&self) -> &'static str {
        Self::ALL.iter()
            .find(|(_, transform)| transform == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

fn join_snake_words(input: &str, separator: &str) -> String {
    input.to_snake_case().replace('_', separator)
}

fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
