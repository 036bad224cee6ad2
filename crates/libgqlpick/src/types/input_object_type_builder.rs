use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::InputObjectTypeExtension)>,
}

impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::InputObject(input_type)) =>
                    TypeBuilderHelpers::input_fields_from_ast(
                        ext_path.as_deref(),
                        ext.name.as_str(),
                        &ext.fields,
                        &mut input_type.fields,
                    )?,

                Some(non_input_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: ext.name.to_string(),
                        type_kind: non_input_type.kind(),
                        extension_location: loc::FilePosition::from_pos(
                            ext_path.as_deref(),
                            ext.position,
                        ),
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_location: loc::FilePosition::from_pos(
                            ext_path.as_deref(),
                            ext.position,
                        ),
                    }),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::input_fields_from_ast(
            file_path,
            def.name.as_str(),
            &def.fields,
            &mut fields,
        )?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::InputObject(InputObjectType {
                def_location,
                fields,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::InputObject(input_type)) =>
                TypeBuilderHelpers::input_fields_from_ast(
                    file_path,
                    ext.name.as_str(),
                    &ext.fields,
                    &mut input_type.fields,
                ),

            Some(non_input_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_input_type.kind(),
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
