use crate::ast;
use crate::combined_document::CombinedDocument;
use crate::fragments::FragmentRegistry;
use crate::fragments::LoadedFragment;
use crate::loc;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentRegistryBuildError>>;

/// Collects the fragments of a generation run and validates them into a
/// [`FragmentRegistry`].
///
/// Local and external fragments are collected separately and merged by
/// [`FragmentRegistryBuilder::build`]:
///
/// - two local (or two external) fragments with the same name are a
///   [`FragmentRegistryBuildError::DuplicateFragmentDefinition`],
/// - a local fragment shadows an external fragment of the same name.
///
/// ```
/// use elixir_document_nodes::DocumentFile;
/// use elixir_document_nodes::fragments::FragmentRegistryBuilder;
///
/// let doc = DocumentFile::from_str(
///     None,
///     "fragment UserFields on User { id ...NameFields }
///      fragment NameFields on User { name }",
/// ).unwrap();
///
/// let mut fragments = FragmentRegistryBuilder::new();
/// fragments.add_from_document_ast(doc.document.as_ref().unwrap(), None).unwrap();
/// let registry = fragments.build().unwrap();
///
/// let names: Vec<_> = registry.dependency_order().iter()
///     .map(|fragment| fragment.name.as_str())
///     .collect();
/// assert_eq!(names, vec!["NameFields", "UserFields"]);
/// ```
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder {
    external_fragments: IndexMap<String, LoadedFragment>,
    local_fragments: IndexMap<String, LoadedFragment>,
}

impl FragmentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the registry.
    ///
    /// Returns an error if a fragment with the same name and the same origin
    /// (local or external) was already added.
    pub fn add_fragment(
        &mut self,
        fragment: LoadedFragment,
    ) -> std::result::Result<(), FragmentRegistryBuildError> {
        let fragments =
            if fragment.is_external {
                &mut self.external_fragments
            } else {
                &mut self.local_fragments
            };

        if let Some(existing) = fragments.get(&fragment.name) {
            return Err(FragmentRegistryBuildError::DuplicateFragmentDefinition {
                fragment_name: fragment.name.clone(),
                first_def_location: existing.def_location.clone(),
                second_def_location: fragment.def_location.clone(),
            });
        }

        fragments.insert(fragment.name.clone(), fragment);
        Ok(())
    }

    /// Add every fragment definition in `ast` as a local fragment.
    ///
    /// Operation definitions in the document are ignored.
    pub fn add_from_document_ast(
        &mut self,
        ast: &ast::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        self.add_local_definitions(
            ast.definitions.iter().map(|def| (def, file_path)),
        )
    }

    /// Add every fragment definition of a [`CombinedDocument`] as a local
    /// fragment, keeping track of the file each one came from.
    pub fn add_from_combined_document(
        &mut self,
        combined: &CombinedDocument,
    ) -> Result<()> {
        self.add_local_definitions(combined.definitions_with_origin())
    }

    /// Add external fragments, collecting every duplicate.
    pub fn add_external_fragments<'a>(
        &mut self,
        fragments: impl IntoIterator<Item = &'a LoadedFragment>,
    ) -> Result<()> {
        let errors: Vec<_> = fragments.into_iter()
            .filter_map(|fragment| {
                let external = LoadedFragment {
                    is_external: true,
                    ..fragment.clone()
                };
                self.add_fragment(external).err()
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Merges local and external fragments, then checks the merged set for
    /// spread cycles and spreads of unknown fragments. All problems found
    /// are returned together.
    pub fn build(self) -> Result<FragmentRegistry> {
        let mut fragments = self.local_fragments;
        for (name, external) in self.external_fragments {
            if fragments.contains_key(&name) {
                log::debug!(
                    "Local fragment `{name}` shadows the external fragment \
                    defined at {}.",
                    external.def_location,
                );
                continue;
            }
            fragments.insert(name, external);
        }

        let registry = FragmentRegistry { fragments };

        let mut errors = Vec::new();
        errors.extend(CycleDetector::detect(&registry));
        errors.extend(validate_fragment_references(&registry));

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "Built fragment registry with {} fragments.",
            registry.fragments.len(),
        );
        Ok(registry)
    }

    fn add_local_definitions<'a>(
        &mut self,
        definitions: impl Iterator<Item = (&'a ast::Definition, Option<&'a Path>)>,
    ) -> Result<()> {
        let errors: Vec<_> = definitions
            .filter_map(|(def, file_path)| match def {
                ast::Definition::Fragment(frag_def) => Some((frag_def, file_path)),
                ast::Definition::Operation(_) => None,
            })
            .filter_map(|(frag_def, file_path)| {
                self.add_fragment(LoadedFragment::local(frag_def.clone(), file_path)).err()
            })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Check that every fragment spread in an operation refers to a registered
/// fragment.
pub fn validate_operation_references(
    registry: &FragmentRegistry,
    operation_name: &str,
    selection_set: &ast::SelectionSet,
    file_path: Option<&Path>,
) -> Vec<FragmentRegistryBuildError> {
    ast::fragment_spreads(selection_set).into_iter()
        .filter(|(ref_name, _)| registry.get(ref_name).is_none())
        .map(|(ref_name, pos)| {
            FragmentRegistryBuildError::UndefinedFragmentReference {
                referenced_by: operation_name.to_string(),
                undefined_fragment: ref_name.to_string(),
                reference_location: loc::FilePosition::from_pos(file_path, pos),
            }
        })
        .collect()
}

fn validate_fragment_references(
    registry: &FragmentRegistry,
) -> Vec<FragmentRegistryBuildError> {
    registry.fragments.values()
        .flat_map(|fragment| {
            ast::fragment_spreads(&fragment.node.selection_set).into_iter()
                .filter(|(ref_name, _)| registry.get(ref_name).is_none())
                .map(|(ref_name, pos)| {
                    FragmentRegistryBuildError::UndefinedFragmentReference {
                        referenced_by: fragment.name.clone(),
                        undefined_fragment: ref_name.to_string(),
                        reference_location: loc::FilePosition::from_pos(
                            fragment.def_location.file.as_deref(),
                            pos,
                        ),
                    }
                })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitState {
    Done,
    OnStack,
}

/// Depth-first walk over fragment spreads. Each fragment is explored once,
/// so every back edge (and therefore every reported cycle) is seen once.
struct CycleDetector<'a> {
    cycles: Vec<FragmentRegistryBuildError>,
    registry: &'a FragmentRegistry,
    stack: Vec<&'a str>,
    states: HashMap<&'a str, VisitState>,
}
impl<'a> CycleDetector<'a> {
    fn detect(registry: &'a FragmentRegistry) -> Vec<FragmentRegistryBuildError> {
        let mut detector = Self {
            cycles: vec![],
            registry,
            stack: vec![],
            states: HashMap::new(),
        };
        for fragment_name in registry.fragments.keys() {
            detector.visit(fragment_name);
        }
        detector.cycles
    }

    fn visit(&mut self, fragment_name: &'a str) {
        match self.states.get(fragment_name) {
            Some(VisitState::Done) => return,
            Some(VisitState::OnStack) => {
                // The stack prefix before the first occurrence only leads
                // into the loop.
                let loop_start = self.stack.iter()
                    .position(|name| *name == fragment_name)
                    .unwrap_or(0);
                let cycle_path = self.stack[loop_start..].iter()
                    .chain(std::iter::once(&fragment_name))
                    .map(|name| name.to_string())
                    .collect();
                self.cycles.push(
                    FragmentRegistryBuildError::FragmentCycleDetected { cycle_path },
                );
                return;
            },
            None => (),
        }

        // Undefined fragments are reported by reference validation
        let Some(fragment) = self.registry.get(fragment_name) else {
            return;
        };

        self.states.insert(fragment_name, VisitState::OnStack);
        self.stack.push(fragment_name);
        for (spread_name, _) in ast::fragment_spreads(&fragment.node.selection_set) {
            self.visit(spread_name);
        }
        self.stack.pop();
        self.states.insert(fragment_name, VisitState::Done);
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentRegistryBuildError {
    #[error(
        "Fragment `{fragment_name}` is defined twice: at {first_def_location} \
        and at {second_def_location}"
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::FilePosition,
        second_def_location: loc::FilePosition,
    },

    #[error("Fragments spread each other in a loop: {}", .cycle_path.join(" -> "))]
    FragmentCycleDetected { cycle_path: Vec<String> },

    #[error(
        "`{referenced_by}` spreads unknown fragment `{undefined_fragment}` \
        at {reference_location}"
    )]
    UndefinedFragmentReference {
        referenced_by: String,
        undefined_fragment: String,
        reference_location: loc::FilePosition,
    },
}
