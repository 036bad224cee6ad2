use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents a
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`loc::FilePosition`] indicating where this [`InterfaceType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::FilePosition {
        self.0.def_location()
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`] in the schema, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    // The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
