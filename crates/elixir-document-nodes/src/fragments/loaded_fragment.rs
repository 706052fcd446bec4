use crate::ast;
use crate::document_file::DocumentFile;
use crate::document_file::DocumentLoadError;
use crate::loc;
use std::path::Path;

/// A fragment definition known to a generation run, either found in the
/// document set (local) or supplied by the host (external).
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedFragment {
    pub def_location: loc::FilePosition,
    pub is_external: bool,
    pub name: String,
    pub node: ast::FragmentDefinition,
    pub on_type: String,
}
impl LoadedFragment {
    pub fn external(node: ast::FragmentDefinition, file_path: Option<&Path>) -> Self {
        Self::new(node, file_path, true)
    }

    /// Parse every fragment definition in `content` as an external
    /// fragment. Operation definitions in `content` are ignored.
    pub fn externals_from_str(
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Vec<Self>, DocumentLoadError> {
        let document_file = DocumentFile::from_str(file_path, content)?;
        Ok(Self::externals_from_document_file(&document_file))
    }

    pub fn externals_from_document_file(document_file: &DocumentFile) -> Vec<Self> {
        let Some(document) = &document_file.document else {
            return vec![];
        };

        document.definitions.iter()
            .filter_map(|def| match def {
                ast::Definition::Fragment(frag_def) => Some(Self::external(
                    frag_def.clone(),
                    document_file.location.as_deref(),
                )),
                ast::Definition::Operation(_) => None,
            })
            .collect()
    }

    pub fn local(node: ast::FragmentDefinition, file_path: Option<&Path>) -> Self {
        Self::new(node, file_path, false)
    }

    fn new(
        node: ast::FragmentDefinition,
        file_path: Option<&Path>,
        is_external: bool,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, node.position),
            is_external,
            name: node.name.clone(),
            on_type: ast::type_condition_name(&node.type_condition).to_string(),
            node,
        }
    }
}
