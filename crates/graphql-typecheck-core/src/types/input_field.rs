use crate::loc;
use crate::types::TypeAnnotation;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// of an [`InputObjectType`](crate::types::InputObjectType), or a parameter
/// declared on a [`Field`](crate::types::Field). The two share a grammar
/// (`InputValueDefinition`) and the same validation rules.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputField {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub(crate) fn builtin(
        name: &str,
        type_annotation: TypeAnnotation,
        default_value: Option<&str>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            default_value: default_value.map(str::to_string),
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The default value as written in the schema (printed back as GraphQL),
    /// if one was declared.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// An input field must be provided when it is non-null and has no default
    /// value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
