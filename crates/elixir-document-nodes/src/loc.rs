use std::path::Path;
use std::path::PathBuf;

/// Where a definition or spread appears: a 1-based line/column pair plus the
/// file it was read from. Sources parsed from strings carry no file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    /// Formats as `path:line:col`, the shape editors and terminals link.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = self.file.as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<str>".to_string());
        write!(f, "{file}:{}:{}", self.line, self.col)
    }
}
