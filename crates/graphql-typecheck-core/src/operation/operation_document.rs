use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use indexmap::IndexMap;

/// A validated, single-operation query document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDocument {
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variables: IndexMap<String, Variable>,
}
impl OperationDocument {
    /// Only query documents are accepted by
    /// [`parse_and_validate()`](crate::operation::parse_and_validate).
    pub fn kind(&self) -> OperationKind {
        OperationKind::Query
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The operation's variable definitions, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}
