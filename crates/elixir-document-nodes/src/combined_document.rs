use crate::ast;
use crate::document_file::DocumentFile;
use std::path::Path;
use std::path::PathBuf;

/// Every definition of every parsed [`DocumentFile`], concatenated into a
/// single [`ast::Document`].
///
/// The originating file of each definition is tracked alongside so that
/// errors can point back at it.
#[derive(Clone, Debug)]
pub struct CombinedDocument {
    document: ast::Document,
    origins: Vec<Option<PathBuf>>,
}
impl CombinedDocument {
    pub fn concat(documents: &[DocumentFile]) -> Self {
        let mut definitions = vec![];
        let mut origins = vec![];
        let mut num_skipped = 0;

        for document_file in documents {
            let Some(document) = &document_file.document else {
                log::trace!(
                    "Skipping unparsed document {:?}.",
                    document_file.location,
                );
                num_skipped += 1;
                continue;
            };

            for def in &document.definitions {
                definitions.push(def.clone());
                origins.push(document_file.location.clone());
            }
        }

        log::debug!(
            "Concatenated {} definitions from {} documents ({} skipped).",
            definitions.len(),
            documents.len() - num_skipped,
            num_skipped,
        );

        Self {
            document: ast::Document { definitions },
            origins,
        }
    }

    pub fn definitions_with_origin(
        &self,
    ) -> impl Iterator<Item = (&ast::Definition, Option<&Path>)> {
        self.document.definitions.iter()
            .zip(self.origins.iter().map(|origin| origin.as_deref()))
    }

    pub fn document(&self) -> &ast::Document {
        &self.document
    }
}
