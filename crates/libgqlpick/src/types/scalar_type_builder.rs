use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Scalar extensions can only add directives, so they are only checked to
/// target an existing scalar.
#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ScalarTypeExtension)>,
}

impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn check_extension(
        types_builder: &mut TypesMapBuilder,
        type_name: &str,
        extension_location: loc::FilePosition,
    ) -> Result<()> {
        match types_builder.get_type_mut(type_name) {
            Some(GraphQLType::Scalar(_)) => Ok(()),

            Some(non_scalar_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: type_name.to_string(),
                    type_kind: non_scalar_type.kind(),
                    extension_location,
                }),

            None =>
                Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: type_name.to_string(),
                    extension_location,
                }),
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            Self::check_extension(
                types_builder,
                ext.name.as_str(),
                loc::FilePosition::from_pos(ext_path.as_deref(), ext.position),
            )?;
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: ast::schema::ScalarType,
    ) -> Result<()> {
        let def_location = loc::FilePosition::from_pos(file_path, def.position);
        types_builder.add_new_type(
            def_location.clone(),
            def.name.as_str(),
            GraphQLType::Scalar(ScalarType {
                def_location,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        _types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::ScalarTypeExtension,
    ) -> Result<()> {
        self.extensions.push((file_path.map(|p| p.to_path_buf()), ext));
        Ok(())
    }
}
