use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input objects only ever appear as argument types, so each input field is
/// modeled as a [`Parameter`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
