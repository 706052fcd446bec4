//! Reads GraphQL, SDL and JSON sources from disk.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const UTF8_BOM: char = '\u{FEFF}';

/// Reads `file_path` as UTF-8 text, dropping a leading byte-order mark so
/// the parser sees the first token at 1:1.
pub fn read_content<P: AsRef<Path>>(
    file_path: P,
) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let content = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })
        .and_then(|bytes| String::from_utf8(bytes).map_err(|err| {
            ReadContentError::FileDecodeError {
                file_path: file_path.to_path_buf(),
                valid_up_to: err.utf8_error().valid_up_to(),
            }
        }))?;

    log::trace!("Read {} bytes from {file_path:?}.", content.len());
    Ok(match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("{file_path:?} is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    FileDecodeError {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Path is not a file: {0:?}")]
    PathIsNotAFile(PathBuf),
}
