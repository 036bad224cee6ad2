use crate::ast;
use crate::operation::OperationKind;
use crate::operation::OperationSkeleton;
use crate::operation::SkeletonVariable;
use crate::operation::VariableScope;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::PickError;
use crate::DEFAULT_CIRCULAR_REFERENCE_DEPTH;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, PickError>;

/// Expands a single root field of the schema into an [`OperationSkeleton`]
/// selecting everything reachable beneath it.
///
/// * Each argument of the root field is bound to a variable of the same
///   name. Arguments of nested fields are bound to variables named after
///   the path leading to them (`user_posts_first`).
/// * Union and interface positions expand into one inline fragment per
///   possible object type.
/// * An object type already present on the current ancestry chain
///   `circular_reference_depth` times is not expanded again. Composite
///   fields (and inline fragments) that end up with nothing beneath them
///   are left out.
/// * Composite fields returning a root operation type are left out.
#[derive(Clone, Debug)]
pub struct OperationSkeletonBuilder<'schema> {
    circular_reference_depth: usize,
    kind: OperationKind,
    schema: &'schema Schema,
}

impl<'schema> OperationSkeletonBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            circular_reference_depth: DEFAULT_CIRCULAR_REFERENCE_DEPTH,
            kind: OperationKind::Query,
            schema,
        }
    }

    pub fn circular_reference_depth(mut self, depth: usize) -> Self {
        self.circular_reference_depth = depth;
        self
    }

    pub fn kind(mut self, kind: OperationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn build(&self, root_field_name: &str) -> Result<OperationSkeleton> {
        let root_type = self.schema
            .root_operation_type(self.kind)
            .ok_or(PickError::UndefinedRootOperationType { kind: self.kind })?;

        let root_field = root_type
            .field(root_field_name)
            .ok_or_else(|| PickError::UndefinedRootField {
                field_name: root_field_name.to_string(),
                kind: self.kind,
                root_type_name: root_type.name().to_string(),
            })?;

        let mut state = ExpansionState::default();
        let mut arguments = vec![];
        for param in root_field.parameters().values() {
            let var_name = param.name().to_string();
            state.declare_variable(&var_name, param, VariableScope::Root);
            arguments.push((
                param.name().to_string(),
                ast::operation::Value::Variable(var_name),
            ));
        }

        let root_type_name = root_field.type_annotation().innermost_type_name();
        let root_path = vec![root_field_name.to_string()];
        let items = match self.schema.get_type(root_type_name) {
            Some(result_type) if result_type.is_composite() =>
                self.expand_type(&mut state, result_type, &root_path),
            _ => vec![],
        };

        let field = ast::operation::Field {
            position: ast::synthetic_pos(),
            alias: None,
            name: root_field_name.to_string(),
            arguments,
            directives: vec![],
            selection_set: ast::operation::SelectionSet {
                span: (ast::synthetic_pos(), ast::synthetic_pos()),
                items,
            },
        };

        log::debug!(
            "built {} skeleton for `{root_field_name}` with {} variable(s)",
            self.kind,
            state.variables.len(),
        );

        Ok(OperationSkeleton {
            kind: self.kind,
            name: format!("{root_field_name}_{}", self.kind.as_str()),
            root_field_name: root_field_name.to_string(),
            root_type_name: root_type_name.to_string(),
            selection_set: ast::operation::SelectionSet {
                span: (ast::synthetic_pos(), ast::synthetic_pos()),
                items: vec![ast::operation::Selection::Field(field)],
            },
            variables: state.variables.into_values().collect(),
        })
    }

    fn expand_type(
        &self,
        state: &mut ExpansionState,
        type_: &GraphQLType,
        path: &[String],
    ) -> Vec<ast::operation::Selection> {
        match type_ {
            GraphQLType::Object(obj_type) =>
                self.expand_object(state, obj_type, path)
                    .into_iter()
                    .map(ast::operation::Selection::Field)
                    .collect(),

            GraphQLType::Interface(iface_type) => {
                let implementors = self.schema.implementors_of(iface_type.name());
                self.expand_branches(state, implementors, path)
            },

            GraphQLType::Union(union_type) => {
                let members = union_type
                    .member_type_names()
                    .into_iter()
                    .filter_map(|type_name| self.schema.get_type(type_name))
                    .filter_map(|type_| type_.as_object())
                    .collect();
                self.expand_branches(state, members, path)
            },

            _ => vec![],
        }
    }

    fn expand_branches(
        &self,
        state: &mut ExpansionState,
        obj_types: Vec<&ObjectType>,
        path: &[String],
    ) -> Vec<ast::operation::Selection> {
        let mut branches = vec![];
        for obj_type in obj_types {
            let fields = self.expand_object(state, obj_type, path);
            if fields.is_empty() {
                continue;
            }
            branches.push(ast::operation::Selection::InlineFragment(
                ast::operation::InlineFragment {
                    position: ast::synthetic_pos(),
                    type_condition: Some(ast::operation::TypeCondition::On(
                        obj_type.name().to_string(),
                    )),
                    directives: vec![],
                    selection_set: ast::operation::SelectionSet {
                        span: (ast::synthetic_pos(), ast::synthetic_pos()),
                        items: fields
                            .into_iter()
                            .map(ast::operation::Selection::Field)
                            .collect(),
                    },
                },
            ));
        }
        branches
    }

    fn expand_object(
        &self,
        state: &mut ExpansionState,
        obj_type: &ObjectType,
        path: &[String],
    ) -> Vec<ast::operation::Field> {
        let type_name = obj_type.name();
        let times_seen = state.ancestry.get(type_name).copied().unwrap_or(0);
        if times_seen >= self.circular_reference_depth {
            log::trace!(
                "not expanding `{type_name}` again beneath `{}`",
                path.join("."),
            );
            return vec![];
        }

        *state.ancestry.entry(type_name.to_string()).or_insert(0) += 1;
        let fields = obj_type
            .fields()
            .values()
            .filter_map(|field| self.expand_field(state, field, path))
            .collect();
        if let Some(count) = state.ancestry.get_mut(type_name) {
            *count -= 1;
        }

        fields
    }

    fn expand_field(
        &self,
        state: &mut ExpansionState,
        field: &Field,
        parent_path: &[String],
    ) -> Option<ast::operation::Field> {
        let result_type = self.schema.get_type(field.type_annotation().innermost_type_name())?;
        if result_type.is_composite() && self.schema.is_root_type(result_type.name()) {
            return None;
        }

        let mut field_path = parent_path.to_vec();
        field_path.push(field.name().to_string());

        let items = if result_type.is_composite() {
            let items = self.expand_type(state, result_type, &field_path);
            if items.is_empty() {
                return None;
            }
            items
        } else {
            vec![]
        };

        let mut arguments = vec![];
        for param in field.parameters().values() {
            let var_name = format!("{}_{}", field_path.join("_"), param.name());
            state.declare_variable(&var_name, param, VariableScope::Nested);
            arguments.push((
                param.name().to_string(),
                ast::operation::Value::Variable(var_name),
            ));
        }

        Some(ast::operation::Field {
            position: ast::synthetic_pos(),
            alias: state.type_signature_alias(&field_path, field),
            name: field.name().to_string(),
            arguments,
            directives: vec![],
            selection_set: ast::operation::SelectionSet {
                span: (ast::synthetic_pos(), ast::synthetic_pos()),
                items,
            },
        })
    }
}

#[derive(Debug, Default)]
struct ExpansionState {
    /// Object type name -> number of times it appears on the current
    /// ancestry chain.
    ancestry: HashMap<String, usize>,

    /// Dotted field path -> type signature of the first field emitted there.
    field_type_signatures: HashMap<String, String>,

    variables: IndexMap<String, SkeletonVariable>,
}
impl ExpansionState {
    fn declare_variable(&mut self, name: &str, param: &Parameter, scope: VariableScope) {
        self.variables
            .entry(name.to_string())
            .or_insert_with(|| SkeletonVariable {
                default_value: param.default_value().cloned(),
                name: name.to_string(),
                scope,
                type_annotation: param.type_annotation().clone(),
            });
    }

    /// Sibling inline fragments may each select a field of the same name
    /// but with a different type, which GraphQL rejects unless the fields
    /// are aliased apart. The first field emitted at a path keeps its name.
    /// Any later field there whose signature differs from the first one gets
    /// an alias derived from its own signature (`value` of type `Int`
    /// becomes `valueInt`).
    fn type_signature_alias(&mut self, field_path: &[String], field: &Field) -> Option<String> {
        let signature = field.type_annotation().to_graphql_string();
        let first = self.field_type_signatures
            .entry(field_path.join("."))
            .or_insert_with(|| signature.clone());
        match first {
            first if *first != signature => {
                let suffix = signature
                    .replace('!', "NonNull")
                    .replace('[', "List")
                    .replace(']', "");
                Some(format!("{}{suffix}", field.name()))
            },
            _ => None,
        }
    }
}
