use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::Parameter;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Visits the definitions and extensions of one kind of type while a schema
/// is being loaded.
///
/// Extensions may appear before the type they extend (e.g. in an earlier
/// file), so builders defer those until [`TypeBuilder::finalize`] runs.
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_map_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn check_dunder_prefixed_name(
        def_location: &loc::FilePosition,
        type_name: &str,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            });
        }
        Ok(())
    }

    pub fn input_fields_from_ast(
        file_path: Option<&Path>,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
        existing_fields: &mut IndexMap<String, Parameter>,
    ) -> Result<()> {
        for input_field in input_fields {
            let param = Parameter::from_ast(file_path, input_field);
            if let Some(existing) = existing_fields.get(input_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: input_field.name.to_string(),
                    field_def1: existing.def_location().to_owned(),
                    field_def2: param.def_location().to_owned(),
                });
            }
            existing_fields.insert(input_field.name.to_string(), param);
        }
        Ok(())
    }

    pub fn interface_names_from_ast(
        file_path: Option<&Path>,
        position: ast::AstPos,
        type_name: &str,
        implements_interfaces: &[String],
        existing_interfaces: &mut Vec<String>,
    ) -> Result<()> {
        for iface_name in implements_interfaces {
            // Type declarations must declare a unique list of interfaces they
            // implement.
            //
            // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
            if existing_interfaces.contains(iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: loc::FilePosition::from_pos(file_path, position),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            existing_interfaces.push(iface_name.to_string());
        }
        Ok(())
    }

    pub fn object_fielddefs_from_ast(
        file_path: Option<&Path>,
        type_name: &str,
        fields: &[ast::schema::Field],
        existing_fields: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for field in fields {
            let field_def = Field::from_ast(file_path, field);
            if let Some(existing_field) = existing_fields.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field_def.def_location().to_owned(),
                });
            }
            existing_fields.insert(field.name.to_string(), field_def);
        }
        Ok(())
    }
}
