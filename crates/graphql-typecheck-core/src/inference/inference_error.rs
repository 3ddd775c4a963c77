use crate::types::GraphQLTypeKind;

/// Inference runs only on validated documents, so each of these indicates a
/// document or schema that slipped past validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("field `{type_name}.{field_name}` selects subfields of a type that has none")]
    UnexpectedSelectionSet {
        field_name: String,
        type_name: String,
    },

    #[error("field `{type_name}.{field_name}` has no selection of subfields")]
    MissingSelectionSet {
        field_name: String,
        type_name: String,
    },

    #[error("type `{type_name}` is not defined in the schema")]
    UndefinedType {
        type_name: String,
    },

    #[error("variable `${variable_name}` has type `{type_name}` ({type_kind}), which is not an input type")]
    NonInputVariableType {
        type_kind: GraphQLTypeKind,
        type_name: String,
        variable_name: String,
    },

    #[error("field `{field_name}` has type `{type_name}` ({type_kind}), which is not an output type")]
    NonOutputFieldType {
        field_name: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },
}
