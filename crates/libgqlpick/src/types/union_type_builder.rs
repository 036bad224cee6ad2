use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::UnionTypeExtension)>,
}

impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn add_members(
        union_name: &str,
        union_loc: &loc::FilePosition,
        members: &mut Vec<String>,
        new_member_names: &[String],
    ) -> Result<()> {
        for member_name in new_member_names {
            if members.contains(member_name) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    location: union_loc.to_owned(),
                    member_name: member_name.to_string(),
                    union_name: union_name.to_string(),
                });
            }
            members.push(member_name.to_string());
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let extension_location =
                loc::FilePosition::from_pos(ext_path.as_deref(), ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Union(union_type)) => Self::add_members(
                    ext.name.as_str(),
                    &extension_location,
                    &mut union_type.members,
                    &ext.types,
                )?,

                Some(non_union_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: ext.name.to_string(),
                        type_kind: non_union_type.kind(),
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
        def: ast::schema::UnionType,
    ) -> Result<()> {
        let uniondef_loc = loc::FilePosition::from_pos(file_path, def.position);

        let mut members = vec![];
        Self::add_members(def.name.as_str(), &uniondef_loc, &mut members, &def.types)?;

        types_builder.add_new_type(
            uniondef_loc.clone(),
            def.name.as_str(),
            GraphQLType::Union(UnionType {
                def_location: uniondef_loc,
                members,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        let extension_location = loc::FilePosition::from_pos(file_path, ext.position);
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Union(union_type)) => Self::add_members(
                ext.name.as_str(),
                &extension_location,
                &mut union_type.members,
                &ext.types,
            ),

            Some(non_union_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: ext.name.to_string(),
                    type_kind: non_union_type.kind(),
                    extension_location,
                }),

            None => {
                self.extensions.push((file_path.map(|p| p.to_path_buf()), ext));
                Ok(())
            },
        }
    }
}
