use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DocumentPaths {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Find all GraphQL files recursively located at or under each of
/// `file_or_dir_paths`, keeping files whose extension is one of
/// `graphql_file_exts`.
pub(crate) fn find_document_paths(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<DocumentPaths> {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<String> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!(
        "Scanning {} input paths...",
        file_or_dir_paths.len(),
    );
    let mut found = DocumentPaths::default();
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Encountered an error while iterating recursive filesystem \
                entities at/under {path:?}.",
            ))?;

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:?}.");
                continue;
            }

            let has_graphql_ext = entry_path.extension()
                .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                .unwrap_or(false);
            if has_graphql_ext {
                log::trace!("Found GraphQL file at {entry_path:?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                log::trace!("Skipping non-GraphQL file: {entry_path:?}.");
                found.num_skipped_files += 1;
            }
        }
    }

    // A single file path passed explicitly is presumed to be a GraphQL file,
    // even if its extension doesn't match `graphql_file_exts`.
    if found.file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding with {first_arg_path:?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.file_paths.push(first_arg_path.to_path_buf());
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
    }

    log::debug!("Found {} GraphQL documents.", found.file_paths.len());
    Ok(found)
}
