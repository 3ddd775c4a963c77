use crate::loc;
use crate::types::TypeAnnotation;

/// A variable declared by an operation, e.g. `$language: String! = "en"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Variable {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// The default value as written in the query (printed back as GraphQL).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Callers may leave a variable out when its type is nullable or it
    /// declares a default.
    pub fn is_optional(&self) -> bool {
        self.type_annotation.nullable() || self.default_value.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
