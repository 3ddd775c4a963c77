use crate::operation::parse_and_validate;
use crate::operation::QueryError;
use crate::test;

#[test]
fn interpolation_is_rejected_before_parsing() {
    let schema = test::greeting_schema();
    // Not valid GraphQL either; interpolation wins.
    let err = parse_and_validate(&schema, "query { greeting(language: ${lang}) { message }")
        .expect_err("interpolation is not allowed");
    assert_eq!(err, QueryError::InterpolationNotAllowed { offset: 27 });
}

#[test]
fn parse_errors_carry_the_parser_message() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(&schema, "query {").expect_err("query is truncated");
    let QueryError::ParseError(message) = err else {
        panic!("expected ParseError, got {err:?}");
    };
    assert!(message.starts_with("query parse error"), "{message}");
}

#[test]
fn unknown_field_is_invalid_and_named() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(
        &schema,
        r#"query { greeting(language: "en") { mesage } }"#,
    ).expect_err("field does not exist");
    assert_eq!(
        err,
        QueryError::InvalidDocument(
            "Cannot query field \"mesage\" on type \"Greeting\". (1:36)".to_string(),
        ),
    );
}

#[test]
fn validation_errors_are_joined_one_per_line() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(&schema, "query { greeting { nope } }")
        .expect_err("two problems");
    let QueryError::InvalidDocument(message) = err else {
        panic!("expected InvalidDocument, got {err:?}");
    };
    assert_eq!(message.lines().collect::<Vec<_>>(), vec![
        "Field \"greeting\" argument \"language\" of type \"String!\" is required, but it was not provided. (1:9)",
        "Cannot query field \"nope\" on type \"Greeting\". (1:20)",
    ]);
}

#[test]
fn two_operations_are_not_allowed() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(&schema, concat!(
        "query A { greeting(language: \"en\") { message } }\n",
        "query B { greeting(language: \"fr\") { message } }\n",
    )).expect_err("only one definition is allowed");
    assert_eq!(err, QueryError::MultipleDefinitionsNotAllowed);
}

#[test]
fn validation_runs_before_the_definition_count_check() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(&schema, concat!(
        "query A { greeting(language: \"en\") { message } }\n",
        "query A { greeting(language: \"fr\") { message } }\n",
    )).expect_err("duplicate operation names");
    assert!(matches!(err, QueryError::InvalidDocument(_)), "{err:?}");
}

#[test]
fn fragment_with_its_operation_is_multiple_definitions() {
    let schema = test::greeting_schema();
    let err = parse_and_validate(&schema, concat!(
        "query { greeting(language: \"en\") { ...Parts } }\n",
        "fragment Parts on Greeting { message }\n",
    )).expect_err("fragments are separate definitions");
    assert_eq!(err, QueryError::MultipleDefinitionsNotAllowed);
}

#[test]
fn mutations_are_not_allowed() {
    let schema = test::library_schema();
    let err = parse_and_validate(
        &schema,
        "mutation { addBook(input: { title: \"t\", genre: POETRY, authorId: 1 }) { id } }",
    ).expect_err("only queries are allowed");
    assert_eq!(err, QueryError::OnlyQueryOperationsAllowed);
}

#[test]
fn lone_fragment_is_not_a_query() {
    let schema = test::greeting_schema();
    // The fragment is unused, so validation reports that first.
    let err = parse_and_validate(&schema, "fragment Parts on Greeting { message }")
        .expect_err("a fragment is not a query");
    assert_eq!(
        err,
        QueryError::InvalidDocument("Fragment \"Parts\" is never used. (1:1)".to_string()),
    );
}

#[test]
fn shorthand_query_is_accepted() {
    let schema = test::greeting_schema();
    let doc = parse_and_validate(&schema, r#"{ greeting(language: "en") { message } }"#)
        .expect("query is valid");
    assert_eq!(doc.name(), None);
    assert!(doc.variables().is_empty());
}
