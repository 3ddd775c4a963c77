use crate::loc;

/// A single executable-document validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ValidationError {
    pub(crate) message: String,
    pub(crate) position: loc::FilePosition,
}
impl ValidationError {
    pub(crate) fn new(message: impl Into<String>, pos: graphql_parser::Pos) -> Self {
        Self {
            message: message.into(),
            position: loc::FilePosition::from_pos(None, pos),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Where in the query text the problem was found (1-based line and
    /// column).
    pub fn position(&self) -> &loc::FilePosition {
        &self.position
    }
}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.position)
    }
}
