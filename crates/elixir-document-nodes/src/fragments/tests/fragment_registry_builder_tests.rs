use crate::ast;
use crate::fragments::FragmentRegistryBuildError;
use crate::fragments::FragmentRegistryBuilder;
use crate::fragments::LoadedFragment;
use crate::fragments::validate_operation_references;
use crate::loc;
use std::path::Path;
use std::path::PathBuf;

fn parse(content: &str) -> ast::Document {
    ast::parse(content).unwrap()
}

fn external_fragments(content: &str) -> Vec<LoadedFragment> {
    LoadedFragment::externals_from_str(None, content).unwrap()
}

#[test]
fn empty_registry_creation() {
    let builder = FragmentRegistryBuilder::new();
    let registry = builder.build().unwrap();
    assert_eq!(registry.fragments().len(), 0);
}

#[test]
fn single_fragment_addition() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(&parse("fragment UserFields on User { id name }"), None)
        .unwrap();

    let registry = builder.build().unwrap();
    assert_eq!(registry.fragments().len(), 1);

    let fragment = registry.get("UserFields").unwrap();
    assert_eq!(fragment.on_type, "User");
    assert!(!fragment.is_external);
}

#[test]
fn operations_are_ignored() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse(r#"
            query GetUser { user { ...UserFields } }
            fragment UserFields on User { id }
            "#),
            None,
        )
        .unwrap();

    let registry = builder.build().unwrap();
    assert_eq!(
        registry.fragments().keys().collect::<Vec<_>>(),
        vec!["UserFields"],
    );
}

#[test]
fn duplicate_local_fragment_detection() {
    let file_a = PathBuf::from("a.graphql");
    let file_b = PathBuf::from("b.graphql");
    let mut builder = FragmentRegistryBuilder::new();

    builder
        .add_from_document_ast(
            &parse("fragment UserFields on User { id name }"),
            Some(file_a.as_path()),
        )
        .unwrap();

    let errors = builder
        .add_from_document_ast(
            &parse("\n\nfragment UserFields on User { id }"),
            Some(file_b.as_path()),
        )
        .unwrap_err();

    assert_eq!(errors, vec![
        FragmentRegistryBuildError::DuplicateFragmentDefinition {
            fragment_name: "UserFields".to_string(),
            first_def_location: loc::FilePosition {
                col: 1,
                file: Some(file_a),
                line: 1,
            },
            second_def_location: loc::FilePosition {
                col: 1,
                file: Some(file_b),
                line: 3,
            },
        },
    ]);
}

#[test]
fn duplicate_external_fragment_detection() {
    let mut builder = FragmentRegistryBuilder::new();
    let externals = external_fragments(r#"
        fragment UserFields on User { id }
        fragment UserFields on User { name }
    "#);

    let errors = builder.add_external_fragments(&externals).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        FragmentRegistryBuildError::DuplicateFragmentDefinition { fragment_name, .. }
            if fragment_name == "UserFields"
    ));
}

#[test]
fn local_fragment_shadows_external_fragment() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_external_fragments(&external_fragments(
            "fragment UserFields on User { name }",
        ))
        .unwrap();
    builder
        .add_from_document_ast(&parse("fragment UserFields on User { id }"), None)
        .unwrap();

    let registry = builder.build().unwrap();
    assert_eq!(registry.fragments().len(), 1);
    assert!(!registry.get("UserFields").unwrap().is_external);
}

#[test]
fn externals_are_registered_after_locals() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_external_fragments(&external_fragments(
            "fragment PostFields on Post { title }",
        ))
        .unwrap();
    builder
        .add_from_document_ast(&parse("fragment UserFields on User { id }"), None)
        .unwrap();

    let registry = builder.build().unwrap();
    assert_eq!(
        registry.fragments().keys().collect::<Vec<_>>(),
        vec!["UserFields", "PostFields"],
    );
    assert!(registry.get("PostFields").unwrap().is_external);
    assert_eq!(registry.local_fragments().count(), 1);
}

#[test]
fn simple_self_referencing_cycle() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse("fragment UserFields on User { id ...UserFields }"),
            None,
        )
        .unwrap();

    let errors = builder.build().unwrap_err();
    assert_eq!(errors, vec![
        FragmentRegistryBuildError::FragmentCycleDetected {
            cycle_path: vec!["UserFields".to_string(), "UserFields".to_string()],
        },
    ]);
}

#[test]
fn two_fragment_cycle() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse(r#"
            fragment FragA on User { id ...FragB }
            fragment FragB on User { name ...FragA }
            "#),
            None,
        )
        .unwrap();

    let errors = builder.build().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        FragmentRegistryBuildError::FragmentCycleDetected { .. }
    ));
}

#[test]
fn three_fragment_cycle_through_nested_selections() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse(r#"
            fragment FragA on User { id friends { ...FragB } }
            fragment FragB on User { ... on User { ...FragC } }
            fragment FragC on User { id ...FragA }
            "#),
            None,
        )
        .unwrap();

    let errors = builder.build().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        FragmentRegistryBuildError::FragmentCycleDetected { cycle_path }
            if cycle_path.len() == 4
    ));
}

#[test]
fn cycle_entered_from_outside_reports_only_the_loop() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse(r#"
            fragment Entry on User { ...FragA }
            fragment FragA on User { id ...FragB }
            fragment FragB on User { name ...FragA }
            "#),
            None,
        )
        .unwrap();

    let errors = builder.build().unwrap_err();
    assert_eq!(errors, vec![
        FragmentRegistryBuildError::FragmentCycleDetected {
            cycle_path: vec![
                "FragA".to_string(),
                "FragB".to_string(),
                "FragA".to_string(),
            ],
        },
    ]);
}

#[test]
fn undefined_fragment_reference() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse("fragment UserFields on User { id ...Missing }"),
            None,
        )
        .unwrap();

    let errors = builder.build().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        FragmentRegistryBuildError::UndefinedFragmentReference {
            referenced_by,
            undefined_fragment,
            ..
        } if referenced_by == "UserFields" && undefined_fragment == "Missing"
    ));
}

#[test]
fn external_fragments_satisfy_references() {
    let mut builder = FragmentRegistryBuilder::new();
    builder
        .add_from_document_ast(
            &parse("fragment UserFields on User { id ...NameFields }"),
            None,
        )
        .unwrap();
    builder
        .add_external_fragments(&external_fragments(
            "fragment NameFields on User { name }",
        ))
        .unwrap();

    assert!(builder.build().is_ok());
}

#[test]
fn operation_references_are_validated() {
    let registry = {
        let mut builder = FragmentRegistryBuilder::new();
        builder
            .add_from_document_ast(&parse("fragment UserFields on User { id }"), None)
            .unwrap();
        builder.build().unwrap()
    };

    let doc = parse("query GetUser {\n  user { ...UserFields ...Missing }\n}");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };

    let errors = validate_operation_references(
        &registry,
        "GetUser",
        ast::operation_selection_set(op),
        Some(Path::new("ops.graphql")),
    );

    assert_eq!(errors.len(), 1);
    let FragmentRegistryBuildError::UndefinedFragmentReference {
        referenced_by,
        undefined_fragment,
        reference_location,
    } = &errors[0] else {
        panic!("expected an undefined fragment reference");
    };
    assert_eq!(referenced_by, "GetUser");
    assert_eq!(undefined_fragment, "Missing");
    assert_eq!(reference_location.file.as_deref(), Some(Path::new("ops.graphql")));
    assert_eq!(reference_location.line, 2);
}
