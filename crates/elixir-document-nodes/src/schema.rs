use crate::ast;
use crate::file_reader;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// The parsed schema supplied by the host alongside the documents.
///
/// Generation never inspects the schema; it is carried so that the plugin
/// entry points keep the same shape as every other document plugin.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    document: ast::schema::Document,
    file_path: Option<PathBuf>,
}
impl Schema {
    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn empty() -> Self {
        Self {
            document: ast::schema::Document { definitions: vec![] },
            file_path: None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        Self::from_str(Some(file_path), content.as_str())
    }

    pub fn from_str(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let document = ast::schema::parse(content)
            .map_err(|err| SchemaLoadError::Parse {
                file_path: file_path.map(Path::to_path_buf),
                err: err.to_string(),
            })?;

        Ok(Self {
            document,
            file_path: file_path.map(Path::to_path_buf),
        })
    }

    pub fn num_definitions(&self) -> usize {
        self.document.definitions.len()
    }
}

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error(transparent)]
    FileRead(#[from] file_reader::ReadContentError),

    #[error("Failed to parse schema{}: {err}", format_file_suffix(.file_path.as_deref()))]
    Parse {
        file_path: Option<PathBuf>,
        err: String,
    },
}

pub(crate) fn format_file_suffix(file_path: Option<&Path>) -> String {
    match file_path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}
