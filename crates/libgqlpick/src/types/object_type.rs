use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents a
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`loc::FilePosition`] indicating where this [`ObjectType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        self.0.def_location()
    }

    /// Look up a single [`Field`] defined on this [`ObjectType`] by name.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the [`ObjectType`] in
    /// the schema. Fields added by a type extension appear after the fields of
    /// the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all interfaces implemented by this [`ObjectType`], in the
    /// order they were declared.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
impl ObjectType {
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.interfaces.iter().any(|iface| iface == interface_name)
    }
}
