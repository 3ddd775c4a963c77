mod field_selection;
mod inline_fragment;
mod operation_document;
mod operation_document_builder;
mod operation_kind;
mod query_error;
mod query_parser;
mod selection_set;
pub(crate) mod validation;
mod variable;

pub use field_selection::FieldSelection;
pub use inline_fragment::InlineFragment;
pub use operation_document::OperationDocument;
pub(crate) use operation_document_builder::OperationDocumentBuilder;
pub use operation_kind::OperationKind;
pub use query_error::QueryError;
pub use query_parser::parse_and_validate;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use validation::validate_document;
pub use validation::ValidationError;
pub use variable::Variable;

#[cfg(test)]
mod tests;
