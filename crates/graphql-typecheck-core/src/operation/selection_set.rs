use crate::operation::FieldSelection;
use crate::operation::InlineFragment;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
}

/// An ordered list of [`Selection`]s along with the name of the type they
/// were selected on.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
    pub(crate) type_name: String,
}
impl SelectionSet {
    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
