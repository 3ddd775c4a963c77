use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// The selectable fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Object, interface, and union types: the types that take a selection
    /// set.
    pub fn is_composite_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Interface and union types.
    pub fn is_abstract_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Types that may be used for variables, arguments, and input fields.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    /// Scalars and enums: the types that terminate a selection.
    pub fn is_leaf_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    /// Types that may be used as the type of an object or interface field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
