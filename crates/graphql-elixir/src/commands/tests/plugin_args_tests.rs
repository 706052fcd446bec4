use crate::commands::plugin_args::PluginArgs;
use std::path::Path;
use std::path::PathBuf;

fn scratch_documents(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("graphql-elixir-args-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("user.graphql"),
        "query GetUser { user { ...UserFields } }\nfragment UserFields on User { id }",
    ).unwrap();
    std::fs::write(dir.join("notes.txt"), "not graphql").unwrap();
    dir
}

fn args_for(dir: &Path, output: &str) -> PluginArgs {
    PluginArgs {
        config: None,
        external_fragments: vec![],
        graphql_file_exts: vec!["graphql".to_string()],
        output: dir.join(output),
        schema: None,
        document_paths: vec![dir.to_path_buf()],
    }
}

#[test]
fn run_plugin_generates_without_writing() {
    let dir = scratch_documents("generates");
    let run = args_for(&dir, "queries.ex").run_plugin().unwrap();

    assert_eq!(run.num_documents, 1);
    assert_eq!(run.num_skipped_files, 1);
    assert!(run.output.content.starts_with("defmodule Generated.GraphQL do\n"));
    assert!(run.output.content.contains("  def get_user do\n"));
    assert!(run.output.content.contains("  def user_fields do\n"));
    assert!(!dir.join("queries.ex").exists());
}

#[test]
fn run_plugin_rejects_non_elixir_output() {
    let dir = scratch_documents("extension");
    let err = args_for(&dir, "queries.exs").run_plugin().unwrap_err();
    assert!(format!("{err:#}").contains("requires extension to be \".ex\""));
}
