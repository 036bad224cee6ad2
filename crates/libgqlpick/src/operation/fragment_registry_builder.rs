use crate::ast;
use crate::loc;
use crate::operation::FragmentRegistry;
use crate::operation::RegisteredFragment;
use crate::schema::Schema;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentRegistryBuildError>>;

/// Builder for constructing a [`FragmentRegistry`] with validation.
///
/// Fragments may be added from any number of parsed documents. Calling
/// [`FragmentRegistryBuilder::build`] then checks that the fragments form
/// a closed, acyclic set and produces an immutable [`FragmentRegistry`].
///
/// # Example
///
/// ```
/// use libgqlpick::schema::SchemaBuilder;
/// use libgqlpick::operation::FragmentRegistryBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(
///     None,
///     "type Query { me: User } type User { id: ID! name: String }",
/// )?
/// .build()?;
///
/// let doc = libgqlpick::ast::operation::parse(
///     "fragment UserFields on User { id name }",
/// )?;
///
/// let mut builder = FragmentRegistryBuilder::new(&schema);
/// builder.add_from_document_ast(&doc, None).unwrap();
/// let registry = builder.build().unwrap();
/// assert!(registry.contains("UserFields"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct FragmentRegistryBuilder<'schema> {
    fragments: IndexMap<String, RegisteredFragment>,
    schema: &'schema Schema,
}

impl<'schema> FragmentRegistryBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            fragments: IndexMap::new(),
            schema,
        }
    }

    /// Add a single fragment definition.
    ///
    /// Fails if the fragment's type condition does not name a composite
    /// type of the schema, or if a fragment of the same name was already
    /// added.
    pub fn add_fragment(
        &mut self,
        definition: &ast::operation::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> std::result::Result<(), FragmentRegistryBuildError> {
        let fragment = RegisteredFragment::from_ast(file_path, definition);
        let type_condition = fragment.type_condition();
        let is_composite = self.schema
            .get_type(type_condition)
            .is_some_and(|type_| type_.is_composite());
        if !is_composite {
            return Err(FragmentRegistryBuildError::InvalidTypeCondition {
                fragment_name: fragment.name().to_string(),
                location: fragment.def_location.clone(),
                type_name: type_condition.to_string(),
            });
        }

        if let Some(existing) = self.fragments.get(fragment.name()) {
            return Err(FragmentRegistryBuildError::DuplicateFragmentDefinition {
                fragment_name: fragment.name().to_string(),
                first_def_location: existing.def_location.clone(),
                second_def_location: fragment.def_location.clone(),
            });
        }

        log::trace!(
            "registered fragment `{}` on `{}`",
            fragment.name(),
            fragment.type_condition(),
        );
        self.fragments.insert(fragment.name().to_string(), fragment);
        Ok(())
    }

    /// Add every fragment definition found in `ast`.
    ///
    /// Operation definitions in the document are ignored.
    pub fn add_from_document_ast(
        &mut self,
        ast: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let mut errors = vec![];
        for def in &ast.definitions {
            if let ast::operation::Definition::Fragment(frag_def) = def {
                if let Err(err) = self.add_fragment(frag_def, file_path) {
                    errors.push(err);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Build the immutable [`FragmentRegistry`].
    ///
    /// This method performs the following validations:
    /// - Detects cycles in fragment spreads
    /// - Deduplicates phase-shifted cycles (e.g., A→B→C→A is the same as B→C→A→B)
    /// - Validates that all fragment references exist
    ///
    /// All errors found are returned at once.
    pub fn build(self) -> Result<FragmentRegistry> {
        let mut errors = Vec::new();
        errors.extend(self.validate_no_cycles());
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(FragmentRegistry {
            fragments: self.fragments,
        })
    }

    fn validate_no_cycles(&self) -> Vec<FragmentRegistryBuildError> {
        let mut all_cycles = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = Vec::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }

        all_cycles
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        errors: &mut Vec<FragmentRegistryBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if let Some(cycle_start) = path.iter().position(|name| name == fragment_name) {
            let mut cycle_path = path[cycle_start..].to_vec();
            cycle_path.push(fragment_name.to_string());

            let normalized = Self::normalize_cycle(&cycle_path);
            if seen_normalized.insert(normalized) {
                errors.push(FragmentRegistryBuildError::FragmentCycleDetected {
                    cycle_path,
                });
            }
            return;
        }

        // Unknown fragments are reported by reference validation.
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        for spread_name in fragment.spread_names() {
            self.check_fragment_cycles(spread_name, path, errors, seen_normalized);
        }
        path.pop();
    }

    fn validate_fragment_references(&self) -> Vec<FragmentRegistryBuildError> {
        let mut errors = Vec::new();
        for (fragment_name, fragment) in &self.fragments {
            self.check_fragment_refs_in_selection_set(
                fragment_name,
                fragment.def_location.file.as_deref(),
                &fragment.definition.selection_set,
                &mut errors,
            );
        }
        errors
    }

    fn check_fragment_refs_in_selection_set(
        &self,
        parent_fragment: &str,
        file_path: Option<&Path>,
        selection_set: &ast::operation::SelectionSet,
        errors: &mut Vec<FragmentRegistryBuildError>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::operation::Selection::FragmentSpread(spread) =>
                    if !self.fragments.contains_key(&spread.fragment_name) {
                        errors.push(FragmentRegistryBuildError::UndefinedFragmentReference {
                            fragment_name: parent_fragment.to_string(),
                            reference_location: loc::FilePosition::from_pos(
                                file_path,
                                spread.position,
                            ),
                            undefined_fragment: spread.fragment_name.to_string(),
                        });
                    },
                ast::operation::Selection::InlineFragment(inline) =>
                    self.check_fragment_refs_in_selection_set(
                        parent_fragment,
                        file_path,
                        &inline.selection_set,
                        errors,
                    ),
                ast::operation::Selection::Field(field) =>
                    self.check_fragment_refs_in_selection_set(
                        parent_fragment,
                        file_path,
                        &field.selection_set,
                        errors,
                    ),
            }
        }
    }

    /// Rotate a cycle (`[A, B, C, A]`) so it starts at its lexicographically
    /// smallest fragment name, dropping the repeated tail.
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.is_empty() {
            return Vec::new();
        }

        let cycle_without_repeat = &cycle[..cycle.len() - 1];
        let min_idx = cycle_without_repeat
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = Vec::new();
        normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
        normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
        normalized
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentRegistryBuildError {
    #[error("Fragment cycle detected: {}", cycle_path.join(" -> "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error(
        "Duplicate fragment definition: `{fragment_name}` (first defined at \
        {first_def_location}, redefined at {second_def_location})"
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::FilePosition,
        second_def_location: loc::FilePosition,
    },

    #[error(
        "Fragment `{fragment_name}` at {location} has a type condition on \
        `{type_name}`, which is not an object, interface or union type of \
        the schema"
    )]
    InvalidTypeCondition {
        fragment_name: String,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Fragment `{fragment_name}` spreads undefined fragment \
        `{undefined_fragment}` at {reference_location}"
    )]
    UndefinedFragmentReference {
        fragment_name: String,
        reference_location: loc::FilePosition,
        undefined_fragment: String,
    },
}
