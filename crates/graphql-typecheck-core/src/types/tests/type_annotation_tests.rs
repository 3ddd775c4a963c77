use crate::ast;
use crate::types::TypeAnnotation;

fn annotation(type_str: &str) -> TypeAnnotation {
    let doc = ast::query::parse(format!("query($v: {type_str}) {{ a }}").as_str())
        .expect("variable type parses");
    let ast::query::Definition::Operation(
        ast::query::OperationDefinition::Query(query),
    ) = &doc.definitions[0] else {
        panic!("expected a query");
    };
    TypeAnnotation::from_ast_type(&query.variable_definitions[0].var_type)
}

#[test]
fn nullability_is_tracked_per_layer() {
    let annot = annotation("[Int!]");
    assert!(annot.nullable());

    let list = annot.as_list_annotation().expect("is a list");
    assert!(!list.inner_type_annotation().nullable());
    assert_eq!(annot.innermost_type_name(), "Int");

    let annot = annotation("[Int]!");
    assert!(!annot.nullable());
    assert!(annot.as_list_annotation().expect("is a list").inner_type_annotation().nullable());
}

#[test]
fn display_matches_graphql_notation() {
    for type_str in ["String", "String!", "[String]", "[[ID!]]!", "[Genre!]!"] {
        assert_eq!(annotation(type_str).to_string(), type_str);
    }
}

#[test]
fn innermost_named_annotation_skips_lists() {
    let annot = annotation("[[Book!]]");
    let named = annot.innermost_named_type_annotation();
    assert_eq!(named.graphql_type_name(), "Book");
    assert!(!named.nullable());
}

#[test]
fn to_nullable_only_touches_the_outer_layer() {
    assert_eq!(annotation("[Int!]!").to_nullable(), annotation("[Int!]"));
    assert_eq!(annotation("Int").to_nullable(), annotation("Int"));
}

#[test]
fn named_constructors() {
    assert_eq!(TypeAnnotation::non_null_named("Boolean"), annotation("Boolean!"));
    assert_eq!(TypeAnnotation::nullable_named("Boolean"), annotation("Boolean"));
    assert!(TypeAnnotation::nullable_named("Boolean").as_list_annotation().is_none());
}
