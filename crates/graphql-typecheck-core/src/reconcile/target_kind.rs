/// What kind of call site an annotation is attached to.
///
/// Only hosts and configuration care about the distinction; inference,
/// rendering and reconciliation treat every kind the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// `annotateQuery<...>(gql`...`)`
    Function,
    /// `Api.query<...>(conn, gql`...`)`
    Method,
    /// `tgql<...>`...``
    TaggedTemplate,
}
impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Function => "function call",
            Self::Method => "method call",
            Self::TaggedTemplate => "tagged template",
        })
    }
}
