use crate::loc;
use crate::operation::SelectionSet;

/// An inline fragment (`... on Type { ... }` or a bare `... { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment {
    pub(crate) conditional: bool,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
