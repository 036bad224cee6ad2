use crate::ast;
use crate::operation::OperationKind;
use crate::types::TypeAnnotation;

/// Whether a variable binds an argument of the root field or of a field
/// nested beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableScope {
    Nested,
    Root,
}

/// A variable declared by an [`OperationSkeleton`].
#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonVariable {
    pub(crate) default_value: Option<ast::operation::Value>,
    pub(crate) name: String,
    pub(crate) scope: VariableScope,
    pub(crate) type_annotation: TypeAnnotation,
}
impl SkeletonVariable {
    pub fn default_value(&self) -> Option<&ast::operation::Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn scope(&self) -> VariableScope {
        self.scope
    }

    pub fn to_ast(&self) -> ast::operation::VariableDefinition {
        ast::operation::VariableDefinition {
            position: ast::synthetic_pos(),
            name: self.name.to_string(),
            var_type: self.type_annotation.to_ast_type(),
            default_value: self.default_value.clone(),
        }
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// The fully expanded operation for a single root field: every reachable
/// field, argument and variable, before any pruning.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationSkeleton {
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) root_field_name: String,
    pub(crate) root_type_name: String,
    pub(crate) selection_set: ast::operation::SelectionSet,
    pub(crate) variables: Vec<SkeletonVariable>,
}
impl OperationSkeleton {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// `<rootField>_<kind>`, e.g. `user_query`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root_field(&self) -> Option<&ast::operation::Field> {
        self.selection_set.items.iter().find_map(|selection| match selection {
            ast::operation::Selection::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn root_field_name(&self) -> &str {
        self.root_field_name.as_str()
    }

    /// Name of the type the root field resolves to (list and non-null
    /// wrappers removed).
    pub fn root_type_name(&self) -> &str {
        self.root_type_name.as_str()
    }

    pub fn selection_set(&self) -> &ast::operation::SelectionSet {
        &self.selection_set
    }

    pub fn to_ast_definition(&self) -> ast::operation::OperationDefinition {
        self.kind.to_ast_definition(
            Some(self.name.to_string()),
            self.variables.iter().map(SkeletonVariable::to_ast).collect(),
            self.selection_set.clone(),
        )
    }

    pub fn variables(&self) -> &[SkeletonVariable] {
        &self.variables
    }
}
