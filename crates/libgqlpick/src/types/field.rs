use crate::ast;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) def_location: loc::FilePosition,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        field: &ast::schema::Field,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, field.position),
            name: field.name.to_string(),
            parameters: field.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters (arguments) accepted by this field, in the order they
    /// were declared.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
