use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::EnumTypeExtension)>,
}

impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn add_values(
        enum_name: &str,
        location: &loc::FilePosition,
        values: &mut Vec<String>,
        new_values: &[ast::schema::EnumValue],
    ) -> Result<()> {
        for value in new_values {
            if values.contains(&value.name) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    location: location.to_owned(),
                    value_name: value.name.to_string(),
                });
            }
            values.push(value.name.to_string());
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let extension_location =
                loc::FilePosition::from_pos(ext_path.as_deref(), ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Enum(enum_type)) => Self::add_values(
                    ext.name.as_str(),
                    &extension_location,
                    &mut enum_type.values,
                    &ext.values,
                )?,

                Some(non_enum_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: ext.name.to_string(),
                        type_kind: non_enum_type.kind(),
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
        def: ast::schema::EnumType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);

        let mut values = vec![];
        Self::add_values(def.name.as_str(), &def_location, &mut values, &def.values)?;

        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Enum(EnumType {
                def_location,
                name: def.name.to_string(),
                values,
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        let extension_location = loc::FilePosition::from_pos(file_path, ext.position);
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Enum(enum_type)) => Self::add_values(
                ext.name.as_str(),
                &extension_location,
                &mut enum_type.values,
                &ext.values,
            ),

            Some(non_enum_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_enum_type.kind(),
                    extension_location,
                }),

            None => {
                self.extensions.push((file_path.map(|p| p.to_path_buf()), ext));
                Ok(())
            },
        }
    }
}
