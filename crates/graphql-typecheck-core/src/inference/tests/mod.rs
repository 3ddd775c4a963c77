mod arguments_type_tests;

use crate::inference::infer_types;
use crate::inference::InferredTypes;
use crate::operation::parse_and_validate;
use crate::render::render;
use crate::schema::Schema;
use crate::test;

fn infer_with(schema: &Schema, query: &str) -> InferredTypes {
    let doc = parse_and_validate(schema, query).expect("query is valid");
    infer_types(schema, &doc).expect("inference succeeds on a validated query")
}

fn infer(query: &str) -> InferredTypes {
    infer_with(&test::library_schema(), query)
}

/// Inferred `(result, arguments)` types of `query` against the library
/// fixture, rendered on one line each.
fn rendered(query: &str) -> (String, String) {
    let inferred = infer(query);
    (render(inferred.result_type()), render(inferred.arguments_type()))
}
