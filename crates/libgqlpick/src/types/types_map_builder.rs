use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::Parameter;
use crate::types::TypeBuilderHelpers;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates every type visited while loading a schema, in declaration
/// order, starting from the built-in scalars.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        def_location: loc::FilePosition,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        TypeBuilderHelpers::check_dunder_prefixed_name(&def_location, type_name)?;

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: def_location,
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Check every type reference across the whole set of types and hand
    /// back the final types map.
    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(input_type) =>
                    for param in input_type.fields.values() {
                        self.validate_input_type_ref(input_type.name(), param, &mut errors);
                    },

                GraphQLType::Interface(iface_type) =>
                    self.validate_object_or_interface(&iface_type.0, &mut errors),

                GraphQLType::Object(obj_type) =>
                    self.validate_object_or_interface(&obj_type.0, &mut errors),

                GraphQLType::Union(union_type) =>
                    for member_name in &union_type.members {
                        match self.types.get(member_name.as_str()) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(non_obj_type) => errors.push(
                                TypeValidationError::InvalidUnionMemberType {
                                    location: union_type.def_location.to_owned(),
                                    member_kind: non_obj_type.kind(),
                                    member_name: member_name.to_string(),
                                    union_name: union_type.name.to_string(),
                                }
                            ),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                location: union_type.def_location.to_owned(),
                                undefined_type_name: member_name.to_string(),
                            }),
                        }
                    },
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    fn validate_field(
        &self,
        type_name: &str,
        field: &Field,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let result_type_name = field.type_annotation().innermost_type_name();
        match self.types.get(result_type_name) {
            Some(GraphQLType::InputObject(_)) => errors.push(
                TypeValidationError::InvalidOutputFieldWithInputType {
                    field_name: field.name().to_string(),
                    input_type_name: result_type_name.to_string(),
                    location: field.def_location().to_owned(),
                    parent_type_name: type_name.to_string(),
                }
            ),
            Some(_) => (),
            None => errors.push(TypeValidationError::UndefinedTypeName {
                location: field.def_location().to_owned(),
                undefined_type_name: result_type_name.to_string(),
            }),
        }

        for param in field.parameters().values() {
            self.validate_input_type_ref(type_name, param, errors);
        }
    }

    fn validate_input_type_ref(
        &self,
        type_name: &str,
        param: &Parameter,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let param_type_name = param.type_annotation().innermost_type_name();
        match self.types.get(param_type_name).map(GraphQLTypeKind::from) {
            Some(GraphQLTypeKind::Interface)
                | Some(GraphQLTypeKind::Object)
                | Some(GraphQLTypeKind::Union) => errors.push(
                TypeValidationError::InvalidParameterWithOutputType {
                    location: param.def_location().to_owned(),
                    output_type_name: param_type_name.to_string(),
                    parameter_name: param.name().to_string(),
                    parent_type_name: type_name.to_string(),
                }
            ),
            Some(_) => (),
            None => errors.push(TypeValidationError::UndefinedTypeName {
                location: param.def_location().to_owned(),
                undefined_type_name: param_type_name.to_string(),
            }),
        }
    }

    fn validate_object_or_interface(
        &self,
        type_data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in &type_data.interfaces {
            match self.types.get(iface_name.as_str()) {
                Some(GraphQLType::Interface(_)) => (),
                Some(non_iface_type) => errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        implemented_type_kind: non_iface_type.kind(),
                        implemented_type_name: iface_name.to_string(),
                        location: type_data.def_location.to_owned(),
                        type_name: type_data.name.to_string(),
                    }
                ),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    location: type_data.def_location.to_owned(),
                    undefined_type_name: iface_name.to_string(),
                }),
            }
        }

        for field in type_data.fields.values() {
            self.validate_field(type_data.name.as_str(), field, errors);
        }
    }
}
