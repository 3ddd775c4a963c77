use crate::test;
use crate::types::GraphQLTypeKind;

#[test]
fn type_kinds_and_categories() {
    let schema = test::library_schema();
    let kind_of = |name: &str| schema.lookup_type(name).expect("type exists").type_kind();

    assert_eq!(kind_of("Author"), GraphQLTypeKind::Object);
    assert_eq!(kind_of("Node"), GraphQLTypeKind::Interface);
    assert_eq!(kind_of("SearchResult"), GraphQLTypeKind::Union);
    assert_eq!(kind_of("Genre"), GraphQLTypeKind::Enum);
    assert_eq!(kind_of("BookFilter"), GraphQLTypeKind::InputObject);
    assert_eq!(kind_of("DateTime"), GraphQLTypeKind::Scalar);

    let node = schema.lookup_type("Node").expect("type exists");
    assert!(node.is_composite_type());
    assert!(node.is_abstract_type());
    assert!(node.is_output_type());
    assert!(!node.is_input_type());

    let genre = schema.lookup_type("Genre").expect("type exists");
    assert!(genre.is_leaf_type());
    assert!(genre.is_input_type());
    assert!(genre.is_output_type());

    let filter = schema.lookup_type("BookFilter").expect("type exists");
    assert!(filter.is_input_type());
    assert!(!filter.is_output_type());
    assert!(filter.fields().is_none());
}

#[test]
fn builtin_scalars_are_marked() {
    let schema = test::library_schema();
    let string = schema.lookup_type("String").and_then(|t| t.as_scalar()).expect("scalar");
    assert!(string.is_builtin());

    let date_time = schema.lookup_type("DateTime").and_then(|t| t.as_scalar()).expect("scalar");
    assert!(!date_time.is_builtin());
    assert_eq!(date_time.def_location().to_string(), "6:1");
}

#[test]
fn object_fields_keep_declaration_order() {
    let schema = test::library_schema();
    let book = schema.object_type("Book").expect("object exists");
    assert_eq!(
        book.fields().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["__typename", "id", "title", "genre", "author", "tags", "ratings"],
    );
    assert_eq!(book.interface_names(), &vec!["Node".to_string()]);
    assert_eq!(
        book.field("ratings").expect("field exists").type_annotation().to_string(),
        "[Int!]",
    );
}

#[test]
fn field_parameters_and_defaults() {
    let schema = test::library_schema();
    let books = schema.object_type("Query")
        .and_then(|query| query.field("books"))
        .expect("field exists");
    assert!(!books.parameters()["first"].is_required());

    let filter = schema.input_object_type("BookFilter").expect("input exists");
    let limit = &filter.fields()["limit"];
    assert_eq!(limit.default_value(), Some("10"));
    assert!(!limit.is_required());

    let new_book = schema.input_object_type("NewBook").expect("input exists");
    assert!(new_book.fields()["title"].is_required());
}

#[test]
fn union_members_resolve_to_objects() {
    let schema = test::library_schema();
    let union_type = schema.lookup_type("SearchResult")
        .and_then(|t| t.as_union())
        .expect("union exists");
    assert_eq!(
        union_type.member_types(&schema).iter().map(|t| t.name()).collect::<Vec<_>>(),
        vec!["Book", "Author", "Magazine"],
    );
}

#[test]
fn enum_values() {
    let schema = test::library_schema();
    let genre = schema.lookup_type("Genre").and_then(|t| t.as_enum()).expect("enum exists");
    assert!(genre.has_value("POETRY"));
    assert!(!genre.has_value("poetry"));
    assert_eq!(genre.values().len(), 3);
}
