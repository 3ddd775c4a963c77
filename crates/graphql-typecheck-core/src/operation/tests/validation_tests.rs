use crate::ast;
use crate::operation::validate_document;
use crate::test;

/// Validate `query` against the library fixture and return each error's
/// message without its position.
fn messages(query: &str) -> Vec<String> {
    let schema = test::library_schema();
    let doc = ast::query::parse(query).expect("query parses");
    validate_document(&schema, &doc)
        .into_iter()
        .map(|err| err.message().to_string())
        .collect()
}

#[test]
fn valid_query_has_no_errors() {
    let errors = messages(r#"
        query Search($term: String!, $first: Int = 5) {
          search(term: $term) {
            __typename
            ... on Book { title genre }
            ... on Author { name }
          }
          books(first: $first, filter: { genre: FICTION, and: [{ titleContains: "x" }] }) {
            id
            ratings
          }
          viewer @include(if: true) { name }
        }
    "#);
    assert_eq!(errors, Vec::<String>::new());
}

mod fields {
    use super::*;

    #[test]
    fn leaf_field_with_selection() {
        assert_eq!(messages("{ viewer { name { length } } }"), vec![
            "Field \"name\" must not have a selection since type \"String!\" has no subfields.",
        ]);
    }

    #[test]
    fn composite_field_without_selection() {
        assert_eq!(messages("{ viewer }"), vec![
            "Field \"viewer\" of type \"Author\" must have a selection of subfields. Did you \
            mean \"viewer { ... }\"?",
        ]);
    }

    #[test]
    fn union_only_allows_typename() {
        assert_eq!(messages("{ search(term: \"x\") { __typename title } }"), vec![
            "Cannot query field \"title\" on type \"SearchResult\".",
        ]);
    }

    #[test]
    fn interface_fields_are_queryable() {
        assert!(messages("{ node(id: 1) { id __typename } }").is_empty());
    }

    #[test]
    fn conflicting_response_keys() {
        assert_eq!(messages("{ viewer { name: id name } }"), vec![
            "Fields \"name\" conflict because \"id\" and \"name\" are different fields. Use \
            different aliases on the fields to fetch both if this was intentional.",
        ]);
    }

    #[test]
    fn conflicting_arguments() {
        assert_eq!(messages("{ book(id: 1) { id } book(id: 2) { id } }"), vec![
            "Fields \"book\" conflict because they have differing arguments. Use different \
            aliases on the fields to fetch both if this was intentional.",
        ]);
    }

    #[test]
    fn same_key_on_exclusive_object_types_does_not_conflict() {
        assert!(messages(
            "{ search(term: \"x\") { ... on Book { label: title } ... on Author { label: name } } }",
        ).is_empty());
    }

    #[test]
    fn repeated_identical_field_is_fine() {
        assert!(messages("{ viewer { name name } }").is_empty());
    }
}

mod arguments {
    use super::*;

    #[test]
    fn unknown_and_duplicate_arguments() {
        assert_eq!(messages("{ book(id: 1, id: 2, isbn: 3) { id } }"), vec![
            "There can be only one argument named \"id\".",
            "Unknown argument \"isbn\" on field \"Query.book\".",
        ]);
    }

    #[test]
    fn literal_types_are_checked() {
        assert_eq!(
            messages("{ books(first: \"ten\", filter: { genre: SCIFI, limit: null }) { id } }"),
            vec![
                "Expected value of type \"Int\", found \"ten\".",
                "Value \"SCIFI\" does not exist in \"Genre\" enum.",
            ],
        );
    }

    #[test]
    fn null_for_non_null_argument() {
        assert_eq!(messages("{ book(id: null) { id } }"), vec![
            "Expected value of type \"ID!\", found null.",
        ]);
    }

    #[test]
    fn input_object_fields_are_checked() {
        assert_eq!(messages("mutation { addBook(input: { title: \"t\", pages: 3 }) { id } }"), vec![
            "Field \"pages\" is not defined by type \"NewBook\".",
            "Field \"NewBook.genre\" of required type \"Genre!\" was not provided.",
            "Field \"NewBook.authorId\" of required type \"ID!\" was not provided.",
        ]);
    }
}

mod variables {
    use super::*;

    #[test]
    fn undefined_and_unused_variables() {
        assert_eq!(messages("query Q($unused: Int) { book(id: $id) { id } }"), vec![
            "Variable \"$id\" is not defined by operation \"Q\".",
            "Variable \"$unused\" is never used in operation \"Q\".",
        ]);
    }

    #[test]
    fn anonymous_operation_messages() {
        assert_eq!(messages("query($unused: Int) { viewer { id } }"), vec![
            "Variable \"$unused\" is never used.",
        ]);
    }

    #[test]
    fn duplicate_variables() {
        assert_eq!(messages("query($id: ID!, $id: ID!) { book(id: $id) { id } }"), vec![
            "There can be only one variable named \"$id\".",
        ]);
    }

    #[test]
    fn variable_types_must_be_input_types() {
        assert_eq!(messages("query($a: Author, $b: Missing) { viewer { id } }"), vec![
            "Variable \"$a\" cannot be non-input type \"Author\".",
            "Unknown type \"Missing\".",
            "Variable \"$a\" is never used.",
            "Variable \"$b\" is never used.",
        ]);
    }

    #[test]
    fn nullable_variable_in_non_null_position() {
        assert_eq!(messages("query($id: ID) { book(id: $id) { id } }"), vec![
            "Variable \"$id\" of type \"ID\" used in position expecting type \"ID!\".",
        ]);
    }

    #[test]
    fn default_value_satisfies_non_null_position() {
        assert!(messages("query($id: ID = 1) { book(id: $id) { id } }").is_empty());
    }

    #[test]
    fn variables_inside_input_objects_and_lists() {
        assert_eq!(
            messages("query($g: Genre, $t: Int) { books(filter: { genre: $g, and: [{ titleContains: $t }] }) { id } }"),
            vec!["Variable \"$t\" of type \"Int\" used in position expecting type \"String\"."],
        );
    }
}

mod fragments {
    use super::*;

    #[test]
    fn variables_used_through_fragments_count_as_used() {
        assert!(messages(concat!(
            "query($id: ID!) { ...Root }\n",
            "fragment Root on Query { book(id: $id) { id } }\n",
        )).is_empty());
    }

    #[test]
    fn unknown_fragment_and_unused_fragment() {
        assert_eq!(
            messages("{ viewer { ...Missing } }\nfragment Unused on Author { id }"),
            vec![
                "Unknown fragment \"Missing\".",
                "Fragment \"Unused\" is never used.",
            ],
        );
    }

    #[test]
    fn impossible_inline_fragment() {
        assert_eq!(messages("{ viewer { ... on Book { id } } }"), vec![
            "Fragment cannot be spread here as objects of type \"Author\" can never be of type \"Book\".",
        ]);
    }

    #[test]
    fn non_composite_type_condition() {
        assert_eq!(messages("{ viewer { ... on Genre { id } } }"), vec![
            "Fragment cannot condition on non composite type \"Genre\".",
        ]);
    }

    #[test]
    fn fragment_cycles() {
        assert_eq!(
            messages(concat!(
                "{ viewer { ...A } }\n",
                "fragment A on Author { ...B }\n",
                "fragment B on Author { ...A }\n",
            )),
            vec!["Cannot spread fragment \"A\" within itself via \"B\"."],
        );
    }

    #[test]
    fn duplicate_fragment_names() {
        assert_eq!(
            messages(concat!(
                "{ viewer { ...A } }\n",
                "fragment A on Author { id }\n",
                "fragment A on Author { name }\n",
            )),
            vec!["There can be only one fragment named \"A\"."],
        );
    }
}

mod directives {
    use super::*;

    #[test]
    fn unknown_and_misplaced_directives() {
        assert_eq!(messages("query @skip(if: true) { viewer @cached { id } }"), vec![
            "Directive \"@skip\" may not be used on QUERY.",
            "Unknown directive \"@cached\".",
        ]);
    }

    #[test]
    fn conditional_directives_need_a_boolean() {
        assert_eq!(messages("query($s: String) { viewer @include(if: $s) { id } book @skip { id } }"), vec![
            "Directive \"@skip\" argument \"if\" of type \"Boolean!\" is required, but it was not provided.",
            "Field \"book\" argument \"id\" of type \"ID!\" is required, but it was not provided.",
            "Variable \"$s\" of type \"String\" used in position expecting type \"Boolean!\".",
        ]);
    }
}

mod operations {
    use super::*;

    #[test]
    fn lone_anonymous_operation() {
        assert_eq!(messages("{ viewer { id } }\nquery Named { viewer { id } }"), vec![
            "This anonymous operation must be the only defined operation.",
        ]);
    }

    #[test]
    fn missing_root_type() {
        assert_eq!(messages("subscription { viewer { id } }"), vec![
            "Schema is not configured to execute subscription operation.",
        ]);
    }
}

#[test]
fn errors_carry_positions() {
    let schema = test::greeting_schema();
    let doc = ast::query::parse("query {\n  greeting(language: \"en\") {\n    nope\n  }\n}")
        .expect("query parses");
    let errors = validate_document(&schema, &doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].position().line, 3);
    assert_eq!(errors[0].position().col, 5);
    assert_eq!(errors[0].to_string(), "Cannot query field \"nope\" on type \"Greeting\". (3:5)");
}
