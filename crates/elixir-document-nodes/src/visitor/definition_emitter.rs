/// Target-language strategy for emitting one named document constant.
pub trait DefinitionEmitter {
    /// Emit a constant called `variable_name` whose value is
    /// `document_text`.
    fn emit_constant(&self, variable_name: &str, document_text: &str) -> String;
}
