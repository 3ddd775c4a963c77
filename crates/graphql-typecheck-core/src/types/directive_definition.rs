use crate::loc;
use crate::types::InputField;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a directive that may be applied in documents checked against
/// some [`Schema`](crate::schema::Schema): either one of the built-in
/// directives (`@skip`, `@include`, `@deprecated`, `@specifiedBy`) or a
/// custom directive declared with `directive @name(...) on ...`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputField>,
}
impl DirectiveDefinition {
    pub(crate) fn builtins() -> Vec<Self> {
        let conditional = |name: &str| Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            locations: vec![
                "FIELD".to_string(),
                "FRAGMENT_SPREAD".to_string(),
                "INLINE_FRAGMENT".to_string(),
            ],
            name: name.to_string(),
            parameters: IndexMap::from([(
                "if".to_string(),
                InputField::builtin("if", TypeAnnotation::non_null_named("Boolean"), None),
            )]),
        };

        vec![
            conditional("skip"),
            conditional("include"),
            Self {
                def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                locations: vec![
                    "FIELD_DEFINITION".to_string(),
                    "ARGUMENT_DEFINITION".to_string(),
                    "INPUT_FIELD_DEFINITION".to_string(),
                    "ENUM_VALUE".to_string(),
                ],
                name: "deprecated".to_string(),
                parameters: IndexMap::from([(
                    "reason".to_string(),
                    InputField::builtin(
                        "reason",
                        TypeAnnotation::nullable_named("String"),
                        Some("\"No longer supported\""),
                    ),
                )]),
            },
            Self {
                def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                locations: vec!["SCALAR".to_string()],
                name: "specifiedBy".to_string(),
                parameters: IndexMap::from([(
                    "url".to_string(),
                    InputField::builtin("url", TypeAnnotation::non_null_named("String"), None),
                )]),
            },
        ]
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// Indicates if this directive may be applied at `location` (one of the
    /// `DirectiveLocation` names, e.g. `"FIELD"` or `"INLINE_FRAGMENT"`).
    pub fn is_allowed_at(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    pub fn locations(&self) -> &Vec<String> {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputField> {
        &self.parameters
    }
}
