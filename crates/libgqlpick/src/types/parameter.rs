use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(super) def_location: loc::FilePosition,
    pub(super) default_value: Option<ast::operation::Value>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::operation::Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Parameter {
            def_location: loc::FilePosition::from_pos(file_path, input_val.position),
            default_value: input_val.default_value.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
