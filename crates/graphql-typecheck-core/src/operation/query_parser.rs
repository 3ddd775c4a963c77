use crate::ast;
use crate::operation::validate_document;
use crate::operation::OperationDocument;
use crate::operation::OperationDocumentBuilder;
use crate::operation::QueryError;
use crate::panic_guard::catch_panic;
use crate::schema::Schema;

/// Parse `query_text` and validate it against `schema`, producing the typed
/// [`OperationDocument`] that inference works from.
///
/// Problems are reported in a fixed order: interpolation placeholders, then
/// syntax, then schema validation, then the single-definition and
/// query-only restrictions.
pub fn parse_and_validate(
    schema: &Schema,
    query_text: &str,
) -> Result<OperationDocument, QueryError> {
    if let Some(offset) = query_text.find("${") {
        return Err(QueryError::InterpolationNotAllowed { offset });
    }

    let document = ast::query::parse(query_text)
        .map_err(|err| QueryError::ParseError(err.to_string()))?;

    let validation = catch_panic(|| validate_document(schema, &document));
    let errors = match validation {
        Ok(errors) => errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        Err(panic) => vec![panic.message],
    };
    if !errors.is_empty() {
        log::debug!("query failed validation with {} error(s)", errors.len());
        return Err(QueryError::InvalidDocument(errors.join("\n")));
    }

    let op = match document.definitions.as_slice() {
        [ast::query::Definition::Operation(op)] => op,
        [_, _, ..] => return Err(QueryError::MultipleDefinitionsNotAllowed),
        _ => return Err(QueryError::OnlyQueryOperationsAllowed),
    };
    match op {
        ast::query::OperationDefinition::Query(_)
            | ast::query::OperationDefinition::SelectionSet(_) => (),
        _ => return Err(QueryError::OnlyQueryOperationsAllowed),
    }

    OperationDocumentBuilder::new(schema).build(op)
}
