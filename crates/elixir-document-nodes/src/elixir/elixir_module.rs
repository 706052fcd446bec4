pub const MODULE_DOC: &str = "Generated GraphQL queries";

/// The generated `.ex` module: an opening `defmodule`, a fixed `@doc`, the
/// emitted constants and the closing `end`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElixirModule {
    body: String,
    module_name: String,
}
impl ElixirModule {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Join the fragment block and the rendered definitions with newlines.
    pub fn new(
        module_name: impl Into<String>,
        fragments_block: String,
        definitions: impl IntoIterator<Item = String>,
    ) -> Self {
        let body = std::iter::once(fragments_block)
            .chain(definitions)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            body,
            module_name: module_name.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "defmodule {} do\n  @doc \"{MODULE_DOC}\"\n{}\nend",
            self.module_name,
            self.body,
        )
    }
}
