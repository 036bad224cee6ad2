use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    /// The [`FilePosition`](loc::FilePosition) indicating where this
    /// [`UnionType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|member| member == type_name)
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type in the schema. Members added from
    /// type extensions appear after the members of the original definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
