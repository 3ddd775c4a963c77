use crate::loc;
use crate::types::InputField;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::sync::LazyLock;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or an
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputField>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn typename_field() -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeAnnotation::non_null_named("String"),
        }
    }

    /// A shared instance of the implicit `__typename` field, for types (like
    /// unions) that do not store one.
    pub(crate) fn typename_field_ref() -> &'static Self {
        static TYPENAME_FIELD: LazyLock<Field> = LazyLock::new(Field::typename_field);
        &TYPENAME_FIELD
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputField> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
