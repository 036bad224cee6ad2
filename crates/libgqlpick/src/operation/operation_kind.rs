use crate::ast;

/// The kind of root operation a picked document executes as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// Lowercase keyword used both in GraphQL syntax and as the suffix of a
    /// generated operation name (e.g. `user_query`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl OperationKind {
    /// Wrap a selection set in an operation definition of this kind.
    pub(crate) fn to_ast_definition(
        self,
        name: Option<String>,
        variable_definitions: Vec<ast::operation::VariableDefinition>,
        selection_set: ast::operation::SelectionSet,
    ) -> ast::operation::OperationDefinition {
        let position = ast::synthetic_pos();
        match self {
            Self::Mutation => ast::operation::OperationDefinition::Mutation(
                ast::operation::Mutation {
                    position,
                    name,
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
            Self::Query => ast::operation::OperationDefinition::Query(
                ast::operation::Query {
                    position,
                    name,
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
            Self::Subscription => ast::operation::OperationDefinition::Subscription(
                ast::operation::Subscription {
                    position,
                    name,
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
        }
    }
}
