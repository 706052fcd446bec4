use crate::DocumentFile;
use crate::PluginError;
use crate::PluginOutput;
use crate::Schema;
use crate::config::RawNamingConvention;
use crate::config::RawPluginConfig;
use crate::fragments::FragmentRegistryBuildError;
use crate::fragments::LoadedFragment;
use crate::plugin;
use crate::visitor::DuplicateGeneratedNameError;
use std::path::Path;

type Result<T> = std::result::Result<T, PluginError>;

const HEADER: &str = "defmodule Generated.GraphQL do\n  @doc \"Generated GraphQL queries\"\n";

fn docs(sources: &[&str]) -> Vec<DocumentFile> {
    sources.iter()
        .enumerate()
        .map(|(idx, source)| {
            let path = format!("doc{idx}.graphql");
            DocumentFile::from_str(Some(Path::new(&path)), *source).unwrap()
        })
        .collect()
}

fn generate(sources: &[&str], config: &RawPluginConfig) -> Result<PluginOutput> {
    plugin(&Schema::empty(), &docs(sources), config)
}

#[test]
fn empty_document_set_keeps_the_module_scaffold() -> Result<()> {
    let output = plugin(&Schema::empty(), &[], &RawPluginConfig::default())?;
    assert_eq!(output.content, format!("{HEADER}\nend"));
    Ok(())
}

#[test]
fn configured_module_name_opens_the_module() -> Result<()> {
    let config = RawPluginConfig {
        module_name: Some("MyApp.Api.Documents".to_string()),
        ..Default::default()
    };
    let output = generate(&["query GetUser { user { id } }"], &config)?;

    let mut lines = output.content.lines();
    assert_eq!(lines.next(), Some("defmodule MyApp.Api.Documents do"));
    assert_eq!(lines.next(), Some("  @doc \"Generated GraphQL queries\""));
    assert!(output.content.ends_with("\nend"));
    Ok(())
}

#[test]
fn operations_only_are_emitted_in_source_order() -> Result<()> {
    let output = generate(
        &[
            "query GetUser { user { id } }",
            "mutation UpdateUser { updateUser { id } }\nsubscription OnUser { userChanged { id } }",
        ],
        &RawPluginConfig::default(),
    )?;

    assert_eq!(output.content, format!(
        "{HEADER}\n{}\n{}\n{}\nend",
        concat!(
            "  def get_user do\n",
            "    \"\"\"\n",
            "    query GetUser {\n",
            "      user {\n",
            "        id\n",
            "      }\n",
            "    }\n",
            "    \"\"\"\n",
            "  end",
        ),
        concat!(
            "  def update_user do\n",
            "    \"\"\"\n",
            "    mutation UpdateUser {\n",
            "      updateUser {\n",
            "        id\n",
            "      }\n",
            "    }\n",
            "    \"\"\"\n",
            "  end",
        ),
        concat!(
            "  def on_user do\n",
            "    \"\"\"\n",
            "    subscription OnUser {\n",
            "      userChanged {\n",
            "        id\n",
            "      }\n",
            "    }\n",
            "    \"\"\"\n",
            "  end",
        ),
    ));
    Ok(())
}

#[test]
fn fragments_are_emitted_once_and_embedded_where_spread() -> Result<()> {
    let output = generate(
        &[
            "query GetUser { user { ...UserFields } }",
            "fragment UserFields on User { id name }",
        ],
        &RawPluginConfig::default(),
    )?;
    let content = &output.content;

    assert_eq!(content.matches("  def user_fields do\n").count(), 1);
    assert_eq!(content.matches("  def get_user do\n").count(), 1);
    // Once as its own constant, once embedded in `get_user`
    assert_eq!(content.matches("fragment UserFields on User {").count(), 2);

    // The fragment block comes before the operations
    let fragment_at = content.find("  def user_fields do").unwrap();
    let operation_at = content.find("  def get_user do").unwrap();
    assert!(fragment_at < operation_at);

    let get_user = &content[operation_at..];
    assert!(get_user.contains(concat!(
        "    query GetUser {\n",
        "      user {\n",
        "        ...UserFields\n",
        "      }\n",
        "    }\n",
        "\n",
        "    fragment UserFields on User {\n",
        "      id\n",
        "      name\n",
        "    }\n",
        "    \"\"\"\n",
    )));
    Ok(())
}

#[test]
fn fragment_constants_embed_their_dependencies_but_not_themselves_twice() -> Result<()> {
    let output = generate(
        &["fragment UserFields on User { id ...NameFields }\nfragment NameFields on User { name }"],
        &RawPluginConfig::default(),
    )?;
    let content = &output.content;

    assert_eq!(content.matches("fragment UserFields on User {").count(), 1);
    assert_eq!(content.matches("fragment NameFields on User {").count(), 2);
    assert!(content.contains(concat!(
        "  def user_fields do\n",
        "    \"\"\"\n",
        "    fragment UserFields on User {\n",
        "      id\n",
        "      ...NameFields\n",
        "    }\n",
        "\n",
        "    fragment NameFields on User {\n",
        "      name\n",
        "    }\n",
        "    \"\"\"\n",
        "  end",
    )));
    Ok(())
}

#[test]
fn unparsed_documents_are_skipped() -> Result<()> {
    let mut documents = docs(&["query GetUser { user { id } }"]);
    documents.push(DocumentFile::unparsed(None, Some("not graphql".to_string())));

    let output = plugin(&Schema::empty(), &documents, &RawPluginConfig::default())?;
    assert_eq!(output.content.matches("  def ").count(), 1);
    Ok(())
}

#[test]
fn prefixes_and_suffixes_wrap_generated_names() -> Result<()> {
    let config = RawPluginConfig {
        fragment_prefix: Some("frag_".to_string()),
        fragment_suffix: Some("_fragment".to_string()),
        name_prefix: Some("gql_".to_string()),
        name_suffix: Some("_query".to_string()),
        ..Default::default()
    };
    let output = generate(
        &["query GetUser { user { ...UserFields } }\nfragment UserFields on User { id }"],
        &config,
    )?;

    assert!(output.content.contains("  def gql_get_user_query do\n"));
    assert!(output.content.contains("  def frag_user_fields_fragment do\n"));
    Ok(())
}

#[test]
fn naming_convention_is_applied_to_generated_names() -> Result<()> {
    let config = RawPluginConfig {
        naming_convention: Some(RawNamingConvention::Selector(
            "change-case-all#camelCase".to_string(),
        )),
        ..Default::default()
    };
    let output = generate(&["query GetUser { user { id } }"], &config)?;
    assert!(output.content.contains("  def getUser do\n"));

    let config = RawPluginConfig {
        naming_convention: Some(RawNamingConvention::Selector("keep".to_string())),
        name_prefix: Some("q_".to_string()),
        ..Default::default()
    };
    let output = generate(&["query get_User { user { id } }"], &config)?;
    assert!(output.content.contains("  def q_get_User do\n"));
    Ok(())
}

#[test]
fn anonymous_operations_are_not_emitted() -> Result<()> {
    let output = generate(
        &["{ me { id } }", "query GetUser { user { id } }"],
        &RawPluginConfig::default(),
    )?;
    assert_eq!(output.content.matches("  def ").count(), 1);
    assert!(!output.content.contains("me {"));
    Ok(())
}

#[test]
fn external_fragments_are_embedded_but_not_emitted() -> Result<()> {
    let config = RawPluginConfig::default().with_external_fragments(
        LoadedFragment::externals_from_str(
            Some(Path::new("shared/user.graphql")),
            "fragment UserFields on User { id }",
        ).unwrap(),
    );
    let output = generate(&["query GetUser { user { ...UserFields } }"], &config)?;

    assert!(!output.content.contains("  def user_fields do"));
    assert_eq!(output.content.matches("fragment UserFields on User {").count(), 1);
    Ok(())
}

#[test]
fn local_fragment_shadows_external_fragment() -> Result<()> {
    let config = RawPluginConfig::default().with_external_fragments(
        LoadedFragment::externals_from_str(None, "fragment UserFields on User { externalField }").unwrap(),
    );
    let output = generate(
        &["query GetUser { user { ...UserFields } }\nfragment UserFields on User { localField }"],
        &config,
    )?;

    assert!(output.content.contains("localField"));
    assert!(!output.content.contains("externalField"));
    Ok(())
}

#[test]
fn undefined_fragment_spread_fails_generation() {
    let err = generate(
        &["query GetUser { user { ...Missing } }"],
        &RawPluginConfig::default(),
    ).unwrap_err();

    let errors = match err {
        PluginError::Fragments(errors) => errors,
        other => panic!("expected fragment errors, got {other:?}"),
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        FragmentRegistryBuildError::UndefinedFragmentReference { undefined_fragment, .. }
            if undefined_fragment == "Missing"
    ));
}

#[test]
fn duplicate_fragments_across_documents_fail_generation() {
    let err = generate(
        &[
            "fragment UserFields on User { id }",
            "fragment UserFields on User { name }",
        ],
        &RawPluginConfig::default(),
    ).unwrap_err();

    assert!(matches!(
        err,
        PluginError::Fragments(ref errors) if matches!(
            &errors[0],
            FragmentRegistryBuildError::DuplicateFragmentDefinition { .. }
        )
    ));
}

#[test]
fn fragment_cycles_fail_generation() {
    let err = generate(
        &["fragment A on User { ...B }\nfragment B on User { ...A }"],
        &RawPluginConfig::default(),
    ).unwrap_err();

    assert!(matches!(
        err,
        PluginError::Fragments(ref errors) if matches!(
            &errors[0],
            FragmentRegistryBuildError::FragmentCycleDetected { .. }
        )
    ));
}

#[test]
fn colliding_generated_names_fail_generation() {
    let err = generate(
        &["query UserFields { user { ...UserFields } }\nfragment UserFields on User { id }"],
        &RawPluginConfig::default(),
    ).unwrap_err();

    let DuplicateGeneratedNameError { first, generated_name, second } = match err {
        PluginError::DuplicateGeneratedName(err) => err,
        other => panic!("expected a generated-name collision, got {other:?}"),
    };
    assert_eq!(generated_name, "user_fields");
    assert_eq!(first.definition_name, "fragment UserFields");
    assert_eq!(first.location.line, 2);
    assert_eq!(second.definition_name, "operation UserFields");
    assert_eq!(second.generated_name, "user_fields");
    assert_eq!(second.location.line, 1);
}

#[test]
fn spreads_in_anonymous_operations_are_not_checked() -> Result<()> {
    let output = generate(
        &["{ ...Missing }\nquery A { id }"],
        &RawPluginConfig::default(),
    )?;
    assert_eq!(output.content.matches("  def ").count(), 1);
    assert!(output.content.contains("  def a do\n"));
    Ok(())
}

#[test]
fn invalid_naming_convention_fails_generation() {
    let config = RawPluginConfig {
        naming_convention: Some(RawNamingConvention::Selector(
            "my-module#camelCase".to_string(),
        )),
        ..Default::default()
    };
    let err = generate(&["query GetUser { user { id } }"], &config).unwrap_err();
    assert!(matches!(err, PluginError::Config(_)));
}
