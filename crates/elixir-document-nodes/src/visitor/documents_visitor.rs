use crate::ast;
use crate::combined_document::CombinedDocument;
use crate::config::NamingParams;
use crate::fragments::FragmentRegistry;
use crate::fragments::LoadedFragment;
use crate::loc;
use crate::naming::NameCategory;
use crate::naming::NameConverter;
use crate::visitor::DefinitionEmitter;
use crate::visitor::RenderDefinitions;
use std::collections::HashMap;
use thiserror::Error;

/// Names each operation and fragment, prints its document text (with every
/// fragment it depends on) and hands both to a [`DefinitionEmitter`].
#[derive(Debug)]
pub struct DocumentsVisitor<'a, E: DefinitionEmitter> {
    emitter: E,
    fragments: &'a FragmentRegistry,
    name_converter: &'a NameConverter,
    naming_params: &'a NamingParams,
}

impl<'a, E: DefinitionEmitter> DocumentsVisitor<'a, E> {
    pub fn new(
        emitter: E,
        fragments: &'a FragmentRegistry,
        name_converter: &'a NameConverter,
        naming_params: &'a NamingParams,
    ) -> Self {
        Self {
            emitter,
            fragments,
            name_converter,
            naming_params,
        }
    }

    /// Check that no two emitted constants share a name.
    ///
    /// Emitted constants are the local fragments plus every named operation
    /// of `combined`.
    pub fn check_generated_names(
        &self,
        combined: &CombinedDocument,
    ) -> Result<(), DuplicateGeneratedNameError> {
        let mut seen: HashMap<String, GeneratedNameSource> = HashMap::new();

        let fragment_sources = self.fragments.local_fragments()
            .map(|fragment| GeneratedNameSource {
                definition_name: format!("fragment {}", fragment.name),
                generated_name: self.fragment_variable_name(&fragment.name),
                location: fragment.def_location.clone(),
            });

        let operation_sources = combined.definitions_with_origin()
            .filter_map(|(def, file_path)| match def {
                ast::Definition::Operation(op) => {
                    let name = ast::operation_name(op)?;
                    Some(GeneratedNameSource {
                        definition_name: format!("operation {name}"),
                        generated_name: self.operation_variable_name(name),
                        location: loc::FilePosition::from_pos(
                            file_path,
                            ast::operation_position(op),
                        ),
                    })
                },
                ast::Definition::Fragment(_) => None,
            });

        for source in fragment_sources.chain(operation_sources) {
            if let Some(first) = seen.get(&source.generated_name) {
                return Err(DuplicateGeneratedNameError {
                    generated_name: source.generated_name.clone(),
                    first: first.clone(),
                    second: source,
                });
            }
            seen.insert(source.generated_name.clone(), source);
        }

        Ok(())
    }

    /// The printed text of a definition followed by every fragment it
    /// (transitively) spreads.
    pub fn document_text(
        &self,
        definition: ast::Definition,
        selection_set: &ast::SelectionSet,
    ) -> String {
        let own_name = match &definition {
            ast::Definition::Fragment(frag_def) => Some(frag_def.name.clone()),
            ast::Definition::Operation(_) => None,
        };

        let dependencies = self.fragments.transitive_dependencies(selection_set)
            .into_iter()
            .filter(|fragment| Some(&fragment.name) != own_name.as_ref())
            .map(|fragment| ast::Definition::Fragment(fragment.node.clone()));

        let mut definitions = vec![definition];
        definitions.extend(dependencies);

        let document = ast::Document { definitions };
        document.to_string().trim().to_string()
    }

    pub fn fragment_variable_name(&self, fragment_name: &str) -> String {
        format!(
            "{}{}{}",
            self.naming_params.fragment_variable_prefix,
            self.name_converter.convert(fragment_name, NameCategory::TypeNames),
            self.naming_params.fragment_variable_suffix,
        )
    }

    pub fn operation_variable_name(&self, operation_name: &str) -> String {
        format!(
            "{}{}{}",
            self.naming_params.document_variable_prefix,
            self.name_converter.convert(operation_name, NameCategory::TypeNames),
            self.naming_params.document_variable_suffix,
        )
    }

    pub fn render_fragment(&self, fragment: &LoadedFragment) -> String {
        let text = self.document_text(
            ast::Definition::Fragment(fragment.node.clone()),
            &fragment.node.selection_set,
        );
        self.emitter.emit_constant(
            &self.fragment_variable_name(&fragment.name),
            &text,
        )
    }

    pub fn render_operation(&self, op: &ast::OperationDefinition) -> Option<String> {
        let Some(name) = ast::operation_name(op) else {
            let pos = ast::operation_position(op);
            log::warn!(
                "Skipping anonymous operation at line {}, column {}: only \
                named operations are emitted.",
                pos.line,
                pos.column,
            );
            return None;
        };

        let text = self.document_text(
            ast::Definition::Operation(op.clone()),
            ast::operation_selection_set(op),
        );
        Some(self.emitter.emit_constant(&self.operation_variable_name(name), &text))
    }
}

impl<E: DefinitionEmitter> RenderDefinitions for DocumentsVisitor<'_, E> {
    fn fragments(&self) -> String {
        self.fragments.dependency_order().into_iter()
            .filter(|fragment| !fragment.is_external)
            .map(|fragment| self.render_fragment(fragment))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_definition(&self, definition: &ast::Definition) -> Option<String> {
        match definition {
            ast::Definition::Fragment(_) => None,
            ast::Definition::Operation(op) => self.render_operation(op),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedNameSource {
    pub definition_name: String,
    pub generated_name: String,
    pub location: loc::FilePosition,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Generated name `{generated_name}` is used by both {} and {}",
    format_name_source(.first),
    format_name_source(.second)
)]
pub struct DuplicateGeneratedNameError {
    pub first: GeneratedNameSource,
    pub generated_name: String,
    pub second: GeneratedNameSource,
}

fn format_name_source(source: &GeneratedNameSource) -> String {
    format!("{} (at {})", source.definition_name, source.location)
}
