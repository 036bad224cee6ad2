use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) => t.def_location.clone().into(),
            GraphQLType::InputObject(t) => t.def_location.clone().into(),
            GraphQLType::Interface(t) => t.0.def_location.clone().into(),
            GraphQLType::Object(t) => t.0.def_location.clone().into(),
            GraphQLType::Scalar(t) => t.def_location.clone().into(),
            GraphQLType::Union(t) => t.def_location.clone().into(),
        }
    }

    /// Union and interface types: positions where a selection has to be
    /// narrowed to a concrete object type.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Types that carry a selection set when selected (objects, interfaces
    /// and unions).
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name.as_str(),
            GraphQLType::InputObject(t) => t.name.as_str(),
            GraphQLType::Interface(t) => t.0.name.as_str(),
            GraphQLType::Object(t) => t.0.name.as_str(),
            GraphQLType::Scalar(t) => t.name.as_str(),
            GraphQLType::Union(t) => t.name.as_str(),
        }
    }
}
