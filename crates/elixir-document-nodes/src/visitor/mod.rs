mod definition_emitter;
mod documents_visitor;
mod render_definitions;

pub use definition_emitter::DefinitionEmitter;
pub use documents_visitor::DocumentsVisitor;
pub use documents_visitor::DuplicateGeneratedNameError;
pub use documents_visitor::GeneratedNameSource;
pub use render_definitions::RenderDefinitions;
