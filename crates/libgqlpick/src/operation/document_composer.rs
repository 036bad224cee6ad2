use crate::ast;
use crate::operation::FragmentRegistry;
use crate::operation::PrunedOperation;
use crate::operation::SkeletonVariable;
use crate::operation::VariableScope;
use crate::PickError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, PickError>;

/// Merges [`PrunedOperation`]s into one executable document.
///
/// * A single operation keeps its generated name. Several operations merge
///   into one anonymous operation selecting every root field.
/// * Only variables bound to root field arguments are declared. Arguments
///   of nested fields are removed from the selections.
/// * Roots binding the same variable name share one declaration, which
///   requires them to agree on its type.
/// * Every fragment spread by the operations, together with the fragments
///   those spread, is appended after the operation in order of first use.
#[derive(Clone, Debug)]
pub struct DocumentComposer<'a> {
    fragment_registry: &'a FragmentRegistry,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(fragment_registry: &'a FragmentRegistry) -> Self {
        Self { fragment_registry }
    }

    pub fn compose(
        &self,
        operations: Vec<PrunedOperation>,
        fragments_used: &IndexSet<String>,
    ) -> Result<ast::operation::Document> {
        let Some(first) = operations.first() else {
            return Err(PickError::UnspecifiedSelections { path: None });
        };
        let kind = first.kind;
        let name = match operations.as_slice() {
            [only] => Some(only.name.to_string()),
            _ => None,
        };

        // Variable name -> (root field declaring it first, variable).
        let mut variables: IndexMap<String, (String, SkeletonVariable)> = IndexMap::new();
        let mut items = vec![];
        for operation in operations {
            for variable in operation.variables {
                if variable.scope != VariableScope::Root {
                    continue;
                }
                match variables.get(&variable.name) {
                    Some((first_root_field, first))
                        if first.type_annotation != variable.type_annotation =>
                        return Err(PickError::ConflictingVariableTypes {
                            first_root_field: first_root_field.to_string(),
                            first_type: first.type_annotation.to_string(),
                            second_root_field: operation.root_field_name.to_string(),
                            second_type: variable.type_annotation.to_string(),
                            variable_name: variable.name.to_string(),
                        }),
                    Some(_) => (),
                    None => {
                        variables.insert(
                            variable.name.to_string(),
                            (operation.root_field_name.to_string(), variable),
                        );
                    },
                }
            }
            items.extend(operation.selection_set.items);
        }

        let declared: HashSet<&str> = variables.keys().map(String::as_str).collect();
        for selection in items.iter_mut() {
            strip_unbound_arguments(selection, &declared);
        }

        let mut definitions = vec![ast::operation::Definition::Operation(
            kind.to_ast_definition(
                name,
                variables.values().map(|(_, variable)| variable.to_ast()).collect(),
                ast::operation::SelectionSet {
                    span: (ast::synthetic_pos(), ast::synthetic_pos()),
                    items,
                },
            ),
        )];

        let fragment_names = self.fragment_registry
            .with_transitive_dependencies(fragments_used.iter().map(String::as_str));
        for fragment_name in fragments_used {
            if !fragment_names.contains(fragment_name) {
                return Err(PickError::UnmatchedFragment {
                    fragment_name: fragment_name.to_string(),
                });
            }
        }
        for fragment_name in &fragment_names {
            if let Some(fragment) = self.fragment_registry.get(fragment_name) {
                definitions.push(ast::operation::Definition::Fragment(
                    fragment.definition().clone(),
                ));
            }
        }

        log::debug!(
            "composed {kind} document with {} variable(s) and {} fragment(s)",
            variables.len(),
            fragment_names.len(),
        );

        Ok(ast::operation::Document { definitions })
    }
}

/// Remove arguments whose value is a variable not in `declared`.
fn strip_unbound_arguments(
    selection: &mut ast::operation::Selection,
    declared: &HashSet<&str>,
) {
    let selection_set = match selection {
        ast::operation::Selection::Field(field) => {
            field.arguments.retain(|(_, value)| match value {
                ast::operation::Value::Variable(var_name) =>
                    declared.contains(var_name.as_str()),
                _ => true,
            });
            &mut field.selection_set
        },
        ast::operation::Selection::FragmentSpread(_) => return,
        ast::operation::Selection::InlineFragment(inline) => &mut inline.selection_set,
    };
    for child in selection_set.items.iter_mut() {
        strip_unbound_arguments(child, declared);
    }
}
