use super::infer;
use super::rendered;
use crate::ast;
use crate::inference::infer_types;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;
use crate::operation::OperationDocumentBuilder;
use crate::render::render;
use crate::test;

#[test]
fn no_variables_is_the_empty_record() {
    let inferred = infer("{ viewer { id } }");
    assert_eq!(inferred.arguments_type(), &TypeDescriptor::EmptyRecord);
}

#[test]
fn variables_keep_declaration_order() {
    let (_, arguments) = rendered(r#"
        query($term: String!, $id: ID!) {
          book(id: $id) { id }
          search(term: $term) { __typename }
        }
    "#);
    assert_eq!(arguments, "{ term: string; id: string }");
}

#[test]
fn nullable_or_defaulted_variables_are_optional() {
    let inferred = infer(r#"
        query($first: Int, $id: ID! = 7, $term: String! = "x") {
          books(first: $first) { id }
          book(id: $id) { id }
          search(term: $term) { __typename }
        }
    "#);
    let TypeDescriptor::Record(entries) = inferred.arguments_type() else {
        panic!("expected a record");
    };
    assert_eq!(entries, &vec![
        RecordEntry::new(
            "first",
            TypeDescriptor::Optional(Box::new(TypeDescriptor::Scalar("Int".to_string()))),
            true,
        ),
        RecordEntry::new("id", TypeDescriptor::Scalar("ID".to_string()), true),
        RecordEntry::new("term", TypeDescriptor::Scalar("String".to_string()), true),
    ]);
}

#[test]
fn enum_and_custom_scalar_variables() {
    let (_, arguments) = rendered(r#"
        query($genre: Genre!, $after: DateTime) {
          books(filter: { genre: $genre, publishedAfter: $after }) { id }
        }
    "#);
    assert_eq!(arguments, "{ genre: Genre; after?: DateTime | null }");
}

#[test]
fn input_objects_expand_structurally() {
    // Mutations are rejected before inference, so build the document
    // directly.
    let schema = test::library_schema();
    let doc = ast::query::parse(
        "mutation($input: NewBook!) { addBook(input: $input) { id } }",
    ).expect("query parses");
    let ast::query::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let document = OperationDocumentBuilder::new(&schema).build(op).expect("document builds");
    let inferred = infer_types(&schema, &document).expect("inference succeeds");
    assert_eq!(
        render(inferred.arguments_type()),
        "{ input: { title: string; genre: Genre; authorId: string } }",
    );
}

#[test]
fn recursive_input_objects_become_references() {
    let (_, arguments) = rendered(r#"
        query($filter: BookFilter, $and: [BookFilter!]) {
          books(filter: $filter) { id }
          more: books(filter: { and: $and }) { id }
        }
    "#);
    let filter = "{ genre?: Genre | null; titleContains?: string | null; \
        publishedAfter?: DateTime | null; limit?: number | null; \
        and?: ReadonlyArray<BookFilter> | null }";
    assert_eq!(
        arguments,
        format!("{{ filter?: {filter} | null; and?: ReadonlyArray<{filter}> | null }}"),
    );
}
