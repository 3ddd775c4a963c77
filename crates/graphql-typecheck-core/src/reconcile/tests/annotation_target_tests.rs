use crate::loc::TextRange;
use crate::reconcile::AnnotationTarget;
use crate::reconcile::ExistingAnnotation;
use crate::reconcile::TargetKind;

/// Build a target for the first occurrence of `identifier` in `source`.
fn target_in(source: &str, identifier: &str) -> AnnotationTarget {
    let start = source.find(identifier).unwrap();
    AnnotationTarget::from_source(
        source,
        TargetKind::Function,
        TextRange::new(start, start + identifier.len()),
    )
}

#[test]
fn call_without_annotation() {
    let source = "  const x = annotateQuery(gql`{ a }`);";
    let target = target_in(source, "annotateQuery");

    assert_eq!(target.existing_annotation(), None);
    assert_eq!(target.insertion_range(), TextRange::empty_at(25));
    assert_eq!(target.line_prefix(), "  const x = annotateQuery");
    assert_eq!(target.trailing_width(), 1);
}

#[test]
fn nested_generics_and_strings_containing_brackets() {
    let source = "tgql<{ a: ReadonlyArray<\"->\"> }, {}>`{ a }`";
    let target = target_in(source, "tgql");

    assert_eq!(target.existing_annotation(), Some(&ExistingAnnotation {
        range: TextRange::new(4, 36),
        text: "<{ a: ReadonlyArray<\"->\"> }, {}>".to_string(),
    }));
    assert_eq!(target.trailing_width(), 1);
}

#[test]
fn multi_line_annotation_keeps_first_line_prefix() {
    let source = "function f() {\n    return api.query<\n      { a: string },\n      {}\n    >(conn, gql`{ a }`);\n}";
    let target = target_in(source, "query");

    let existing = target.existing_annotation().unwrap();
    assert!(existing.text.starts_with("<\n      { a: string }"));
    assert!(existing.text.ends_with("    >"));
    assert_eq!(target.line_prefix(), "    return api.query");
    assert_eq!(target.format_context().indentation, "    ");
}

#[test]
fn unbalanced_brackets_are_not_an_annotation() {
    let source = "annotateQuery<{ a: string }(gql`{ a }`)";
    let target = target_in(source, "annotateQuery");
    assert_eq!(target.existing_annotation(), None);
    assert_eq!(target.trailing_width(), 0);
}

#[test]
fn out_of_range_identifier_is_tolerated() {
    let target = AnnotationTarget::from_source("f", TargetKind::Function, TextRange::new(0, 5));
    assert_eq!(target.existing_annotation(), None);
    assert_eq!(target.line_prefix(), "");
}

#[test]
fn arrow_in_a_function_type_does_not_close_the_annotation() {
    let source = "q<{ a: () => void }, {}>(gql`{ a }`)";
    let target = target_in(source, "q");

    assert_eq!(target.existing_annotation(), Some(&ExistingAnnotation {
        range: TextRange::new(1, 24),
        text: "<{ a: () => void }, {}>".to_string(),
    }));
    assert_eq!(target.trailing_width(), 1);
}
