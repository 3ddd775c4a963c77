/// The kind of an operation definition. Only [`OperationKind::Query`]
/// documents are accepted for type inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub(crate) fn from_ast(op: &crate::ast::query::OperationDefinition) -> Self {
        use crate::ast::query::OperationDefinition;
        match op {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The `DirectiveLocation` name for directives applied to an operation of
    /// this kind.
    pub(crate) fn directive_location(&self) -> &'static str {
        match self {
            Self::Mutation => "MUTATION",
            Self::Query => "QUERY",
            Self::Subscription => "SUBSCRIPTION",
        }
    }

    /// The name of the root type used when the schema has no explicit
    /// `schema { ... }` block.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
