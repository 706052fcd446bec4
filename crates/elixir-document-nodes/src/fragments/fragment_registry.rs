use crate::ast;
use crate::fragments::LoadedFragment;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Every fragment available to a generation run, keyed by name.
///
/// Built (and validated) by
/// [`FragmentRegistryBuilder`](crate::fragments::FragmentRegistryBuilder):
/// names are unique, every spread resolves and there are no cycles. Local
/// fragments come first, in source order, followed by external fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: IndexMap<String, LoadedFragment>,
}
impl FragmentRegistry {
    /// All fragments ordered so that every fragment comes after the
    /// fragments it spreads. Ties keep registration order.
    pub fn dependency_order(&self) -> Vec<&LoadedFragment> {
        let mut ordered = vec![];
        let mut visited = HashSet::new();
        for fragment in self.fragments.values() {
            self.visit_dependencies(fragment, &mut visited, &mut ordered);
        }
        ordered
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &IndexMap<String, LoadedFragment> {
        &self.fragments
    }

    pub fn get(&self, name: &str) -> Option<&LoadedFragment> {
        self.fragments.get(name)
    }

    pub fn local_fragments(&self) -> impl Iterator<Item = &LoadedFragment> {
        self.fragments.values().filter(|fragment| !fragment.is_external)
    }

    /// The fragments spread by `selection_set`, directly or through other
    /// fragments, each listed once and after its own dependencies.
    ///
    /// Spreads of names missing from the registry are skipped.
    pub fn transitive_dependencies(
        &self,
        selection_set: &ast::SelectionSet,
    ) -> Vec<&LoadedFragment> {
        let mut ordered = vec![];
        let mut visited = HashSet::new();
        for (fragment_name, _) in ast::fragment_spreads(selection_set) {
            if let Some(fragment) = self.fragments.get(fragment_name) {
                self.visit_dependencies(fragment, &mut visited, &mut ordered);
            }
        }
        ordered
    }

    fn visit_dependencies<'a>(
        &'a self,
        fragment: &'a LoadedFragment,
        visited: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a LoadedFragment>,
    ) {
        if !visited.insert(fragment.name.as_str()) {
            return;
        }

        for (dep_name, _) in ast::fragment_spreads(&fragment.node.selection_set) {
            if let Some(dep) = self.fragments.get(dep_name) {
                self.visit_dependencies(dep, visited, ordered);
            }
        }

        ordered.push(fragment);
    }
}
