use thiserror::Error;

/// Why a query was rejected by
/// [`parse_and_validate()`](crate::operation::parse_and_validate). The
/// variants are checked in declaration order and are mutually exclusive.
#[derive(Clone, Debug, Error, PartialEq, serde::Serialize)]
pub enum QueryError {
    /// The query text contains a `${` placeholder. `offset` is the byte
    /// offset of the first one.
    #[error("Interpolation not allowed in gql template literals")]
    InterpolationNotAllowed {
        offset: usize,
    },

    /// The GraphQL parser's own message, verbatim.
    #[error("{0}")]
    ParseError(String),

    /// One line per validation error, each formatted as
    /// `message (line:column)`.
    #[error("{0}")]
    InvalidDocument(String),

    #[error("Only a single definition is allowed in gql template literals")]
    MultipleDefinitionsNotAllowed,

    #[error("Only query operations are allowed in gql template literals")]
    OnlyQueryOperationsAllowed,
}
