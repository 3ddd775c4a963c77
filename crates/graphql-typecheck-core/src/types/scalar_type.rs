use crate::loc;

/// Names of the scalar types every schema defines implicitly.
pub const BUILTIN_SCALAR_NAMES: &[&str] = &["Boolean", "Float", "ID", "Int", "String"];

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars): either
/// one of the built-in scalars or a custom scalar declared in the schema.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// Indicates if this is one of `Boolean`, `Float`, `ID`, `Int` or
    /// `String`.
    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
