use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// A fragment definition accepted into a [`FragmentRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredFragment {
    pub(super) def_location: loc::FilePosition,
    pub(super) definition: ast::operation::FragmentDefinition,
    pub(super) spread_names: Vec<String>,
}
impl RegisteredFragment {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn definition(&self) -> &ast::operation::FragmentDefinition {
        &self.definition
    }

    pub(super) fn from_ast(
        file_path: Option<&std::path::Path>,
        definition: &ast::operation::FragmentDefinition,
    ) -> Self {
        let mut spread_names = vec![];
        collect_spread_names(&definition.selection_set, &mut spread_names);
        Self {
            def_location: loc::FilePosition::from_pos(file_path, definition.position),
            definition: definition.clone(),
            spread_names,
        }
    }

    pub fn name(&self) -> &str {
        self.definition.name.as_str()
    }

    /// Names of the fragments spread directly within this fragment, in the
    /// order they first appear.
    pub fn spread_names(&self) -> &[String] {
        &self.spread_names
    }

    pub fn type_condition(&self) -> &str {
        let ast::operation::TypeCondition::On(type_name) = &self.definition.type_condition;
        type_name.as_str()
    }
}

fn collect_spread_names(
    selection_set: &ast::operation::SelectionSet,
    spread_names: &mut Vec<String>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::operation::Selection::Field(field) =>
                collect_spread_names(&field.selection_set, spread_names),
            ast::operation::Selection::FragmentSpread(spread) =>
                if !spread_names.contains(&spread.fragment_name) {
                    spread_names.push(spread.fragment_name.to_string());
                },
            ast::operation::Selection::InlineFragment(inline) =>
                collect_spread_names(&inline.selection_set, spread_names),
        }
    }
}

/// Name-unique set of fragment definitions, in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: IndexMap<String, RegisteredFragment>,
}

impl FragmentRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &IndexMap<String, RegisteredFragment> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Option<&RegisteredFragment> {
        self.fragments.get(fragment_name)
    }

    pub fn contains(&self, fragment_name: &str) -> bool {
        self.fragments.contains_key(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// A document holding every registered fragment definition.
    pub fn to_document(&self) -> ast::operation::Document {
        ast::operation::Document {
            definitions: self.fragments
                .values()
                .map(|fragment| ast::operation::Definition::Fragment(
                    fragment.definition.clone(),
                ))
                .collect(),
        }
    }

    /// Expand `fragment_names` with every fragment they spread (directly or
    /// not). Each fragment is listed once, right after the first fragment
    /// that uses it. Unregistered names are skipped.
    pub fn with_transitive_dependencies<'a>(
        &self,
        fragment_names: impl IntoIterator<Item = &'a str>,
    ) -> IndexSet<String> {
        let mut resolved = IndexSet::new();
        for fragment_name in fragment_names {
            self.visit_dependencies(fragment_name, &mut resolved);
        }
        resolved
    }

    fn visit_dependencies(&self, fragment_name: &str, resolved: &mut IndexSet<String>) {
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };
        if !resolved.insert(fragment_name.to_string()) {
            return;
        }
        for spread_name in &fragment.spread_names {
            self.visit_dependencies(spread_name, resolved);
        }
    }
}
