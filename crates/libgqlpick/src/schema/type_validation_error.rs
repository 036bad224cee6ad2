use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type declares that it implements \
        `{implemented_type_name}`, but that is a {implemented_type_kind} type \
        rather than an interface"
    )]
    ImplementsNonInterfaceType {
        implemented_type_kind: GraphQLTypeKind,
        implemented_type_name: String,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        location: loc::FilePosition,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter on `{parent_type_name}` was declared with \
        the `{output_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputType {
        location: loc::FilePosition,
        output_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_name}` type defines one of its \
        members as `{member_name}`, but this type is a {member_kind} type and \
        union members can only be object types."
    )]
    InvalidUnionMemberType {
        location: loc::FilePosition,
        member_kind: GraphQLTypeKind,
        member_name: String,
        union_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}` ({location})")]
    UndefinedTypeName {
        location: loc::FilePosition,
        undefined_type_name: String,
    },
}
