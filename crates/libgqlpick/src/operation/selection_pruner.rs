use crate::ast;
use crate::operation::FragmentRegistry;
use crate::operation::OperationSkeleton;
use crate::operation::PrunedOperation;
use crate::path;
use crate::path::FieldPath;
use crate::path::SelectedFields;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::PickError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, PickError>;

/// Reduces an [`OperationSkeleton`] to the selections named by a set of
/// [`FieldPath`]s sharing its root field.
///
/// Positions are visited breadth-first. At each position the selected
/// subtree decides which skeleton selections survive:
///
/// * A path that ends at a field keeps everything beneath that field.
/// * `__fragment_<Name>` segments become spreads of registered fragments.
/// * At union and interface positions, `__on_<Type>` (or a bare `<Type>`)
///   segments choose branches explicitly. Remaining segments are routed to
///   the only possible type left after removing the `no_resolve` types.
#[derive(Clone, Debug)]
pub struct SelectionPruner<'a> {
    fragment_registry: &'a FragmentRegistry,
    no_resolve: &'a [String],
    schema: &'a Schema,
}

impl<'a> SelectionPruner<'a> {
    pub fn new(
        schema: &'a Schema,
        fragment_registry: &'a FragmentRegistry,
        no_resolve: &'a [String],
    ) -> Self {
        Self {
            fragment_registry,
            no_resolve,
            schema,
        }
    }

    pub fn prune(
        &self,
        skeleton: OperationSkeleton,
        paths: &[&FieldPath],
    ) -> Result<PrunedOperation> {
        let OperationSkeleton {
            kind,
            name,
            root_field_name,
            root_type_name,
            mut selection_set,
            variables,
        } = skeleton;

        let selected = match SelectedFields::from_paths(paths.iter().copied()) {
            SelectedFields::SubTree(children) => children,
            _ => IndexMap::new(),
        };

        let mut fragments_used = IndexSet::new();
        let root_is_composite = self.schema
            .get_type(&root_type_name)
            .is_some_and(GraphQLType::is_composite);

        if !root_is_composite {
            if !selected.is_empty() {
                return Err(PickError::UnspecifiedSelections {
                    path: Some(root_field_name),
                });
            }
        } else {
            if selected.is_empty() {
                return Err(PickError::UnspecifiedSelections {
                    path: Some(root_field_name),
                });
            }

            let root_field = selection_set.items
                .iter_mut()
                .find_map(|selection| match selection {
                    ast::operation::Selection::Field(field) => Some(field),
                    _ => None,
                })
                .ok_or_else(|| PickError::UnspecifiedSelections {
                    path: Some(root_field_name.to_string()),
                })?;

            let mut frontier = VecDeque::from([FrontierEntry {
                depth: 1,
                parent_type_name: root_type_name,
                path: root_field_name.to_string(),
                selected,
                selection_set: &mut root_field.selection_set,
            }]);
            while let Some(entry) = frontier.pop_front() {
                self.prune_entry(entry, &mut frontier, &mut fragments_used)?;
            }
        }

        log::debug!(
            "pruned `{name}` using {} path(s), spreading {} fragment(s)",
            paths.len(),
            fragments_used.len(),
        );

        Ok(PrunedOperation {
            fragments_used,
            kind,
            name,
            root_field_name,
            selection_set,
            variables,
        })
    }

    fn prune_entry<'ops>(
        &self,
        entry: FrontierEntry<'ops>,
        frontier: &mut VecDeque<FrontierEntry<'ops>>,
        fragments_used: &mut IndexSet<String>,
    ) -> Result<()> {
        log::trace!("pruning `{}` (depth {})", entry.path, entry.depth);

        let Some(parent_type) = self.schema.get_type(&entry.parent_type_name) else {
            return Err(PickError::UnspecifiedSelections {
                path: Some(entry.path),
            });
        };

        let spreads = self.fragment_spreads(&entry, fragments_used)?;
        if parent_type.is_abstract() {
            self.prune_abstract_position(entry, spreads, frontier)
        } else {
            self.prune_object_position(entry, spreads, frontier)
        }
    }

    /// Spreads for every `__fragment_<Name>` selected at this position.
    fn fragment_spreads(
        &self,
        entry: &FrontierEntry<'_>,
        fragments_used: &mut IndexSet<String>,
    ) -> Result<Vec<ast::operation::Selection>> {
        let position_types = self.schema.possible_type_names(&entry.parent_type_name);
        let mut spreads = vec![];
        for node in entry.selected.values() {
            let SelectedFields::FragmentSpread(fragment_name) = node else {
                continue;
            };

            let fragment = self.fragment_registry
                .get(fragment_name)
                .ok_or_else(|| PickError::UnmatchedFragment {
                    fragment_name: fragment_name.to_string(),
                })?;

            let fragment_types = self.schema.possible_type_names(fragment.type_condition());
            if !fragment_types.iter().any(|type_name| position_types.contains(type_name)) {
                return Err(PickError::FragmentTypeMismatch {
                    fragment_name: fragment_name.to_string(),
                    parent_type_name: entry.parent_type_name.to_string(),
                    path: entry.path.to_string(),
                    type_condition: fragment.type_condition().to_string(),
                });
            }

            fragments_used.insert(fragment_name.to_string());
            spreads.push(ast::operation::Selection::FragmentSpread(
                ast::operation::FragmentSpread {
                    position: ast::synthetic_pos(),
                    fragment_name: fragment_name.to_string(),
                    directives: vec![],
                },
            ));
        }
        Ok(spreads)
    }

    fn prune_object_position<'ops>(
        &self,
        entry: FrontierEntry<'ops>,
        spreads: Vec<ast::operation::Selection>,
        frontier: &mut VecDeque<FrontierEntry<'ops>>,
    ) -> Result<()> {
        let FrontierEntry {
            depth,
            parent_type_name,
            path,
            mut selected,
            selection_set,
        } = entry;

        let mut kept = vec![];
        let mut descents = vec![];
        for selection in std::mem::take(&mut selection_set.items) {
            let ast::operation::Selection::Field(field) = selection else {
                continue;
            };

            for (key, alias, node) in take_field_matches(&mut selected, &field) {
                let mut picked = field.clone();
                picked.alias = alias;
                match node {
                    SelectedFields::Leaf => {
                        kept.push(ast::operation::Selection::Field(picked));
                        descents.push(None);
                    },
                    SelectedFields::SubTree(children)
                        if !picked.selection_set.items.is_empty() => {
                        kept.push(ast::operation::Selection::Field(picked));
                        descents.push(Some((key, children)));
                    },
                    _ => log::debug!(
                        "`{path}.{key}` selects beneath `{}`, which has no \
                        selections; dropping it",
                        field.name,
                    ),
                }
            }
        }

        for key in selected.keys() {
            if !path::is_fragment_segment(key) {
                log::debug!("ignoring unmatched segment `{key}` beneath `{path}`");
            }
        }

        kept.extend(spreads);
        if kept.is_empty() {
            return Err(PickError::UnspecifiedSelections { path: Some(path) });
        }
        selection_set.items = kept;

        for (selection, descent) in selection_set.items.iter_mut().zip(descents) {
            let (ast::operation::Selection::Field(field), Some((key, children))) =
                (selection, descent) else {
                continue;
            };
            let Some(result_type_name) =
                self.field_result_type_name(&parent_type_name, &field.name) else {
                continue;
            };
            frontier.push_back(FrontierEntry {
                depth: depth + 1,
                parent_type_name: result_type_name,
                path: format!("{path}.{key}"),
                selected: children,
                selection_set: &mut field.selection_set,
            });
        }

        Ok(())
    }

    fn prune_abstract_position<'ops>(
        &self,
        entry: FrontierEntry<'ops>,
        spreads: Vec<ast::operation::Selection>,
        frontier: &mut VecDeque<FrontierEntry<'ops>>,
    ) -> Result<()> {
        let FrontierEntry {
            depth,
            parent_type_name,
            path,
            selected,
            selection_set,
        } = entry;

        let candidates: Vec<String> = self.schema
            .possible_type_names(&parent_type_name)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut branches: IndexMap<String, Branch> = IndexMap::new();
        let mut remaining: IndexMap<String, SelectedFields> = IndexMap::new();
        for (key, node) in selected {
            if matches!(node, SelectedFields::FragmentSpread(_)) {
                continue;
            }

            let is_prefixed = path::parse_type_condition_segment(&key).is_some();
            let type_name = path::parse_type_condition_segment(&key)
                .unwrap_or(&key)
                .to_string();

            if candidates.contains(&type_name) {
                match branches.get_mut(&type_name) {
                    Some(branch) => branch.selected.merge(node),
                    None => {
                        branches.insert(type_name, Branch {
                            key: Some(key),
                            selected: node,
                        });
                    },
                }
            } else if is_prefixed {
                log::debug!(
                    "ignoring `{key}` beneath `{path}`: `{type_name}` is not a \
                    possible type of `{parent_type_name}`",
                );
            } else {
                remaining.insert(key, node);
            }
        }

        if !remaining.is_empty() {
            let survivors: Vec<&String> = candidates
                .iter()
                .filter(|candidate| !self.no_resolve.contains(*candidate))
                .collect();
            let resolved = match survivors.as_slice() {
                [survivor] if candidates.len() > 1 => survivor.to_string(),
                _ => return Err(PickError::UnspecifiedTypeResolver {
                    candidates: candidates.clone(),
                    path,
                    type_name: parent_type_name,
                }),
            };

            log::debug!("resolved `{path}` ({parent_type_name}) to `{resolved}`");
            let resolved_selection = SelectedFields::SubTree(remaining);
            match branches.get_mut(&resolved) {
                Some(branch) => {
                    branch.selected.merge(resolved_selection);
                    branch.key = None;
                },
                None => {
                    branches.insert(resolved, Branch {
                        key: None,
                        selected: resolved_selection,
                    });
                },
            }
        }

        let mut kept = vec![];
        let mut descents = vec![];
        for selection in std::mem::take(&mut selection_set.items) {
            let ast::operation::Selection::InlineFragment(inline) = &selection else {
                continue;
            };
            let Some(ast::operation::TypeCondition::On(type_name)) = &inline.type_condition else {
                continue;
            };
            let Some(branch) = branches.shift_remove(type_name) else {
                continue;
            };
            descents.push((type_name.to_string(), branch));
            kept.push(selection);
        }

        for type_name in branches.keys() {
            log::debug!("`{type_name}` has no selections beneath `{path}`; ignoring it");
        }

        kept.extend(spreads);
        if kept.is_empty() {
            return Err(PickError::UnspecifiedSelections { path: Some(path) });
        }
        selection_set.items = kept;

        for (selection, (type_name, branch)) in selection_set.items.iter_mut().zip(descents) {
            let ast::operation::Selection::InlineFragment(inline) = selection else {
                continue;
            };
            // A branch selected in full keeps the whole inline fragment.
            let SelectedFields::SubTree(children) = branch.selected else {
                continue;
            };
            match branch.key {
                Some(key) => frontier.push_back(FrontierEntry {
                    depth: depth + 1,
                    parent_type_name: type_name,
                    path: format!("{path}.{key}"),
                    selected: children,
                    selection_set: &mut inline.selection_set,
                }),

                // Resolved branches continue at the same path.
                None => frontier.push_front(FrontierEntry {
                    depth,
                    parent_type_name: type_name,
                    path: path.to_string(),
                    selected: children,
                    selection_set: &mut inline.selection_set,
                }),
            }
        }

        Ok(())
    }

    fn field_result_type_name(&self, parent_type_name: &str, field_name: &str) -> Option<String> {
        let field = match self.schema.get_type(parent_type_name)? {
            GraphQLType::Interface(iface_type) => iface_type.field(field_name),
            GraphQLType::Object(obj_type) => obj_type.field(field_name),
            _ => None,
        }?;
        Some(field.type_annotation().innermost_type_name().to_string())
    }
}

/// Remove from `selected` every entry that picks `field`: the plain field
/// name and any `__alias_<alias>_<field>` segments. Yields
/// `(segment, alias to emit, selection beneath)` per match.
fn take_field_matches(
    selected: &mut IndexMap<String, SelectedFields>,
    field: &ast::operation::Field,
) -> Vec<(String, Option<String>, SelectedFields)> {
    let mut matches = vec![];
    if let Some(node) = selected.shift_remove(&field.name) {
        matches.push((field.name.to_string(), field.alias.clone(), node));
    }

    let alias_keys: Vec<String> = selected
        .keys()
        .filter(|key| {
            path::parse_alias_segment(key)
                .is_some_and(|(_, field_name)| field_name == field.name)
        })
        .cloned()
        .collect();
    for key in alias_keys {
        if let Some(SelectedFields::Alias { alias, selection }) = selected.shift_remove(&key) {
            matches.push((key, Some(alias), *selection));
        }
    }

    matches
}

struct Branch {
    /// Segment that chose this branch, or `None` when the branch was
    /// resolved through `no_resolve`.
    key: Option<String>,
    selected: SelectedFields,
}

struct FrontierEntry<'ops> {
    depth: usize,
    parent_type_name: String,
    path: String,
    selected: IndexMap<String, SelectedFields>,
    selection_set: &'ops mut ast::operation::SelectionSet,
}
