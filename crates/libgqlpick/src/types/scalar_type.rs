use crate::loc;

/// A custom scalar type (e.g. `scalar DateTime`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
