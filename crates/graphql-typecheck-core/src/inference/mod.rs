//! Synthesizes the structural types implied by a validated
//! [`OperationDocument`].

mod arguments_type_builder;
mod inference_error;
mod inferred_types;
mod result_type_builder;
mod type_descriptor;

pub use inference_error::InferenceError;
pub use inferred_types::InferredTypes;
pub use type_descriptor::RecordEntry;
pub use type_descriptor::TypeDescriptor;

use crate::operation::OperationDocument;
use crate::schema::Schema;
use arguments_type_builder::ArgumentsTypeBuilder;
use result_type_builder::ResultTypeBuilder;

/// Infer the result type and the arguments type of `document`.
///
/// `document` must have been produced by
/// [`parse_and_validate()`](crate::operation::parse_and_validate) against the
/// same `schema`; an [`InferenceError`] means it was not.
pub fn infer_types(
    schema: &Schema,
    document: &OperationDocument,
) -> Result<InferredTypes, InferenceError> {
    let result_type = ResultTypeBuilder::new(schema).build(document.selection_set())?;
    let arguments_type = ArgumentsTypeBuilder::new(schema).build(document.variables())?;
    log::debug!(
        "inferred types for operation `{}` ({} variable(s))",
        document.name().unwrap_or("<anonymous>"),
        document.variables().len(),
    );
    Ok(InferredTypes::new(result_type, arguments_type))
}

#[cfg(test)]
mod tests;
