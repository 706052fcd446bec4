use crate::ast;
use crate::file_reader;
use crate::schema::format_file_suffix;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentLoadError>;

/// A GraphQL document file handed to the plugin by the host.
///
/// `document` is `None` when the host could not (or chose not to) parse the
/// file; such files are skipped during generation.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFile {
    pub document: Option<ast::Document>,
    pub location: Option<PathBuf>,
    pub raw_sdl: Option<String>,
}
impl DocumentFile {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        Self::from_str(Some(file_path), content)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let content = content.into();
        let document = ast::parse(content.as_str())
            .map_err(|err| DocumentLoadError::Parse {
                file_path: file_path.map(Path::to_path_buf),
                err: err.to_string(),
            })?;

        Ok(Self {
            document: Some(document),
            location: file_path.map(Path::to_path_buf),
            raw_sdl: Some(content),
        })
    }

    pub fn unparsed(
        location: Option<PathBuf>,
        raw_sdl: Option<String>,
    ) -> Self {
        Self {
            document: None,
            location,
            raw_sdl,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentLoadError {
    #[error(transparent)]
    FileRead(#[from] file_reader::ReadContentError),

    #[error("Failed to parse GraphQL document{}: {err}", format_file_suffix(.file_path.as_deref()))]
    Parse {
        file_path: Option<PathBuf>,
        err: String,
    },
}
