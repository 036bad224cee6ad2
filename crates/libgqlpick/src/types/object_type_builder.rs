use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ObjectTypeExtension)>,
}

impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        obj_type: &mut ObjectType,
        ext_file_path: Option<&Path>,
        ext: &ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        TypeBuilderHelpers::interface_names_from_ast(
            ext_file_path,
            ext.position,
            ext.name.as_str(),
            &ext.implements_interfaces,
            &mut obj_type.0.interfaces,
        )?;
        TypeBuilderHelpers::object_fielddefs_from_ast(
            ext_file_path,
            ext.name.as_str(),
            &ext.fields,
            &mut obj_type.0.fields,
        )
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::schema::ObjectType;
    type AstTypeExtension = ast::schema::ObjectTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let extension_location =
                loc::FilePosition::from_pos(ext_path.as_deref(), ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Object(obj_type)) =>
                    Self::merge_type_extension(obj_type, ext_path.as_deref(), &ext)?,

                Some(non_obj_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: ext.name.to_string(),
                        type_kind: non_obj_type.kind(),
                        extension_location,
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_location,
                    }),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: ast::schema::ObjectType,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(file_path, def.position);

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::object_fielddefs_from_ast(
            file_path,
            def.name.as_str(),
            &def.fields,
            &mut fields,
        )?;

        let mut interfaces = vec![];
        TypeBuilderHelpers::interface_names_from_ast(
            file_path,
            def.position,
            def.name.as_str(),
            &def.implements_interfaces,
            &mut interfaces,
        )?;

        types_builder.add_new_type(
            file_position.clone(),
            def.name.as_str(),
            GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                def_location: file_position,
                fields,
                interfaces,
                name: def.name.to_string(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Object(obj_type)) =>
                Self::merge_type_extension(obj_type, file_path, &ext),

            Some(non_obj_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_obj_type.kind(),
                    extension_location: loc::FilePosition::from_pos(
                        file_path,
                        ext.position,
                    ),
                }),

            None => {
                self.extensions.push((file_path.map(|p| p.to_path_buf()), ext));
                Ok(())
            },
        }
    }
}
