use crate::loc;
use crate::operation::SelectionSet;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field selected within a [`SelectionSet`], resolved against the schema.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, String>,
    pub(crate) conditional: bool,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) selection_set: Option<SelectionSet>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Argument values keyed by argument name, printed back as GraphQL.
    pub fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// Indicates if this selection carries `@skip` or `@include` and so may
    /// be absent from a response.
    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the object, interface, or union type this field was selected
    /// on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    /// The field's type as declared in the schema.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
