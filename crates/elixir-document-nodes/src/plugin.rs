use crate::ast;
use crate::combined_document::CombinedDocument;
use crate::config::PluginConfig;
use crate::config::RawPluginConfig;
use crate::document_file::DocumentFile;
use crate::elixir::ElixirEmitter;
use crate::elixir::ElixirModule;
use crate::fragments::FragmentRegistryBuilder;
use crate::fragments::validate_operation_references;
use crate::plugin_error::PluginError;
use crate::schema::Schema;
use crate::visitor::DocumentsVisitor;
use crate::visitor::RenderDefinitions;
use std::path::Path;

type Result<T> = std::result::Result<T, PluginError>;

pub const OUTPUT_FILE_EXTENSION: &str = ".ex";
pub const PLUGIN_NAME: &str = "elixir-document-nodes";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PluginOutput {
    pub content: String,
}

/// Generate an Elixir module holding one constant per named operation and
/// per local fragment in `documents`.
///
/// Documents without a parsed AST are skipped. Fragments listed in
/// `config.external_fragments` can be spread by operations and are embedded
/// in their text, but are not emitted as constants of their own.
///
/// ```
/// use elixir_document_nodes::DocumentFile;
/// use elixir_document_nodes::Schema;
/// use elixir_document_nodes::config::RawPluginConfig;
///
/// let documents = vec![
///     DocumentFile::from_str(None, "query GetUser { user { id } }").unwrap(),
/// ];
/// let output = elixir_document_nodes::plugin(
///     &Schema::empty(),
///     &documents,
///     &RawPluginConfig::default(),
/// ).unwrap();
///
/// assert!(output.content.starts_with("defmodule Generated.GraphQL do\n"));
/// assert!(output.content.contains("  def get_user do\n"));
/// assert!(output.content.ends_with("\nend"));
/// ```
pub fn plugin(
    schema: &Schema,
    documents: &[DocumentFile],
    raw_config: &RawPluginConfig,
) -> Result<PluginOutput> {
    let config = PluginConfig::resolve(raw_config)?;
    log::debug!(
        "[{PLUGIN_NAME}] Generating module `{}` from {} documents (schema \
        has {} definitions).",
        config.module_name,
        documents.len(),
        schema.num_definitions(),
    );

    let combined = CombinedDocument::concat(documents);

    let mut errors = vec![];
    let mut registry_builder = FragmentRegistryBuilder::new();
    if let Err(errs) = registry_builder.add_from_combined_document(&combined) {
        errors.extend(errs);
    }
    if let Err(errs) = registry_builder.add_external_fragments(&raw_config.external_fragments) {
        errors.extend(errs);
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }
    let registry = registry_builder.build()?;

    for (def, file_path) in combined.definitions_with_origin() {
        // Anonymous operations are never emitted, so their spreads don't matter.
        if let ast::Definition::Operation(op) = def
            && let Some(op_name) = ast::operation_name(op) {
            errors.extend(validate_operation_references(
                &registry,
                op_name,
                ast::operation_selection_set(op),
                file_path,
            ));
        }
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let visitor = DocumentsVisitor::new(
        ElixirEmitter,
        &registry,
        &config.name_converter,
        &config.naming_params,
    );
    visitor.check_generated_names(&combined)?;

    let fragments_block = visitor.fragments();
    let definitions = visitor.visit_document(combined.document())
        .into_iter()
        .flatten();

    let module = ElixirModule::new(&config.module_name, fragments_block, definitions);
    Ok(PluginOutput {
        content: module.render(),
    })
}

/// Check that the output file is an Elixir source file (`.ex`).
pub fn validate(
    _schema: &Schema,
    _documents: &[DocumentFile],
    _config: &RawPluginConfig,
    output_file: impl AsRef<Path>,
) -> Result<()> {
    let output_file = output_file.as_ref();
    if !output_file.to_string_lossy().ends_with(OUTPUT_FILE_EXTENSION) {
        return Err(PluginError::InvalidOutputExtension {
            output_file: output_file.to_path_buf(),
        });
    }
    Ok(())
}
