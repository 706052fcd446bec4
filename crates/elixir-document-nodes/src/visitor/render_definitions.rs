use crate::ast;

/// The rendering capability the plugin consumes: turn each definition of a
/// document into emitted source text.
pub trait RenderDefinitions {
    /// The emitted constants for every local fragment, joined by newlines.
    fn fragments(&self) -> String;

    /// The emitted constant for `definition`, or `None` when the definition
    /// does not produce output of its own (fragments, anonymous operations).
    fn render_definition(&self, definition: &ast::Definition) -> Option<String>;

    /// Render every definition of `document`, in order.
    fn visit_document(&self, document: &ast::Document) -> Vec<Option<String>> {
        document.definitions.iter()
            .map(|definition| self.render_definition(definition))
            .collect()
    }
}
