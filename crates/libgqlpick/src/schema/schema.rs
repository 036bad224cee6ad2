use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in declaration order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Every [`ObjectType`] implementing the named interface, in schema
    /// declaration order.
    pub fn implementors_of(&self, interface_name: &str) -> Vec<&ObjectType> {
        self.types
            .values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj_type| obj_type.implements_interface(interface_name))
            .collect()
    }

    /// Indicates whether the named type is the Query, Mutation or
    /// Subscription root type of this schema.
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.query_type == type_name
            || self.mutation_type.as_deref() == Some(type_name)
            || self.subscription_type.as_deref() == Some(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    /// Names of the concrete object types a value of the named type may
    /// have at runtime:
    ///
    /// * union: its members, in declared order
    /// * interface: its implementors, in schema declaration order
    /// * object: the object itself
    ///
    /// Any other kind of type (or an unknown name) yields an empty list.
    pub fn possible_type_names(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Union(union_type)) => union_type.member_type_names(),
            Some(GraphQLType::Interface(iface_type)) =>
                self.implementors_of(iface_type.name())
                    .into_iter()
                    .map(|obj_type| obj_type.name())
                    .collect(),
            Some(GraphQLType::Object(obj_type)) => vec![obj_type.name()],
            _ => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL [defines an object type named "Query" as the _default_ Query
    /// type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { query: ... }` block may name a different type. This
    /// factors in any such override.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
    }

    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        self.root_operation_type_name(kind)
            .and_then(|type_name| self.types.get(type_name))
            .and_then(|type_| type_.as_object())
    }

    pub fn root_operation_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }
}
