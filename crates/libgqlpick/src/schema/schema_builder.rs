use crate::ast;
use crate::file_reader;
use crate::file_reader::ReadSourceError;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// ```
/// use libgqlpick::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { me: User } type User { id: ID! }")
///     .and_then(|builder| builder.build())
///     .expect("valid schema");
/// assert!(schema.get_type("User").is_some());
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    enum_builder: EnumTypeBuilder,
    inputobject_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    scalar_builder: ScalarTypeBuilder,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.enum_builder.finalize(&mut self.types_map_builder)?;
        self.inputobject_builder.finalize(&mut self.types_map_builder)?;
        self.interface_builder.finalize(&mut self.types_map_builder)?;
        self.object_builder.finalize(&mut self.types_map_builder)?;
        self.scalar_builder.finalize(&mut self.types_map_builder)?;
        self.union_builder.finalize(&mut self.types_map_builder)?;

        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        log::debug!(
            "built schema with {} types (query root: `{query_type}`)",
            types.len(),
        );

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_str(file_path: Option<&Path>, content: &str) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn new() -> Self {
        Self {
            enum_builder: EnumTypeBuilder::new(),
            inputobject_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            query_type: None,
            scalar_builder: ScalarTypeBuilder::new(),
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_graphql_source(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
            self = self.load_str(Some(file_path), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    /// Pick the explicitly declared root type for `kind` (from a `schema {}`
    /// block), falling back to the conventional default name.
    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        kind: OperationKind,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<String>> {
        let default_name = match kind {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };

        let Some(declared) = declared else {
            return Ok(match types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match types.get(declared.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(declared.type_name)),
            Some(non_obj_type) => Err(SchemaBuildError::RootOperationTypeIsNotAnObject {
                location: declared.def_location,
                operation: kind,
                type_kind: non_obj_type.kind(),
                type_name: declared.type_name,
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                location: declared.def_location,
                operation: kind,
                type_name: declared.type_name,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) => {
                // Directives never influence which selections get picked.
                log::trace!("skipping directive definition `@{}`", directive_def.name);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (kind, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };

            let typedef_loc = NamedTypeDefLocation {
                def_location: loc::FilePosition::from_pos(file_path, schema_def.position),
                type_name,
            };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let declared = [
            (OperationKind::Query, &self.query_type),
            (OperationKind::Mutation, &self.mutation_type),
            (OperationKind::Subscription, &self.subscription_type),
        ];
        for (idx, (kind1, type1)) in declared.iter().enumerate() {
            for (kind2, type2) in declared.iter().skip(idx + 1) {
                if let (Some(type1), Some(type2)) = (type1, type2) {
                    if type1.type_name == type2.type_name {
                        return Err(SchemaBuildError::NonUniqueOperationTypes {
                            reused_type_name: type1.type_name.to_owned(),
                            operation1: *kind1,
                            operation2: *kind2,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    iface_def,
                ),

            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    obj_def,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_def,
                ),

            TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("The `{value_name}` value is defined more than once on the `{enum_name}` enum ({location})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        location: loc::FilePosition,
        value_name: String,
    },

    #[error(
        "Multiple fields named `{field_name}` were defined on the `{type_name}` \
        type ({field_def1} and {field_def2})"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::FilePosition,
        field_def2: loc::FilePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::FilePosition,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::FilePosition,
    },

    #[error("The `{union_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        location: loc::FilePosition,
        member_name: String,
        union_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, but no such type was defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error("Type names may not begin with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` with an extension of the wrong \
        kind: `{type_name}` is a {type_kind} type"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_location: loc::FilePosition,
    },

    #[error("No Query root type was defined by the schema")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations may not share the \
        same type (`{reused_type_name}`)"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Error parsing schema source {file:?}: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {type_kind} type"
    )]
    RootOperationTypeIsNotAnObject {
        location: loc::FilePosition,
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Error loading schema file: {0}")]
    SchemaFileReadError(Box<ReadSourceError>),

    #[error(
        "Found {} type error(s) while building the schema:\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type was declared as `{type_name}`, \
        but no such type was defined"
    )]
    UndefinedRootOperationType {
        location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },
}

/// A root operation type name as declared in a `schema {}` block, along with
/// where that declaration was made.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::FilePosition,
    pub type_name: String,
}
