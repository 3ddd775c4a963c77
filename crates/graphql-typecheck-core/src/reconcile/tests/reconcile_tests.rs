use crate::annotation::AnnotationFormatter;
use crate::annotation::FormatContext;
use crate::annotation::FormatError;
use crate::annotation::FormatOptions;
use crate::annotation::LayoutFormatter;
use crate::inference::infer_types;
use crate::inference::InferredTypes;
use crate::loc::TextRange;
use crate::operation::parse_and_validate;
use crate::reconcile::reconcile;
use crate::reconcile::AnnotationTarget;
use crate::reconcile::Outcome;
use crate::reconcile::ReconcileError;
use crate::reconcile::ReplaceKind;
use crate::reconcile::TargetKind;
use crate::render::EmptyArgumentsPolicy;
use crate::test;

const GREETING_QUERY: &str =
    "query Greeting($language: String!) { greeting(language: $language) { __typename message } }";

const GREETING_ANNOTATION: &str =
    "<{ greeting: { __typename: \"Greeting\"; message: string } }, { language: string }>";

fn infer_greeting(query: &str) -> InferredTypes {
    let schema = test::greeting_schema();
    let document = parse_and_validate(&schema, query).unwrap();
    infer_types(&schema, &document).unwrap()
}

fn wide_formatter() -> LayoutFormatter {
    LayoutFormatter::new(FormatOptions {
        print_width: 120,
        ..FormatOptions::default()
    })
}

fn target_in(source: &str, identifier: &str) -> AnnotationTarget {
    let start = source.find(identifier).unwrap();
    AnnotationTarget::from_source(
        source,
        TargetKind::Function,
        TextRange::new(start, start + identifier.len()),
    )
}

fn apply(source: &str, range: TextRange, text: &str) -> String {
    format!("{}{text}{}", &source[..range.start], &source[range.end..])
}

fn reconcile_source(source: &str, formatter: &dyn AnnotationFormatter) -> Outcome {
    reconcile(
        &target_in(source, "annotateQuery"),
        &infer_greeting(GREETING_QUERY),
        EmptyArgumentsPolicy::Sentinel,
        formatter,
    ).unwrap()
}

#[test]
fn missing_annotation_is_inserted_after_the_identifier() {
    let source = "const result = annotateQuery(gql`...`);";

    let outcome = reconcile_source(source, &wide_formatter());

    assert_eq!(outcome, Outcome::Replace {
        kind: ReplaceKind::MissingAnnotation,
        range: TextRange::empty_at(28),
        text: GREETING_ANNOTATION.to_string(),
    });
}

#[test]
fn wrong_annotation_is_replaced_in_place() {
    let existing = "<{ greeting: { message: string } }, { language: string }>";
    let source = format!("const result = annotateQuery{existing}(gql`...`);");

    let outcome = reconcile_source(&source, &wide_formatter());

    assert_eq!(outcome, Outcome::Replace {
        kind: ReplaceKind::WrongAnnotation,
        range: TextRange::new(28, 28 + existing.len()),
        text: GREETING_ANNOTATION.to_string(),
    });
}

#[test]
fn equivalent_annotation_in_another_layout_is_unchanged() {
    let source = concat!(
        "const result = annotateQuery<\n",
        "  {\n",
        "    greeting: { message: string, __typename: 'Greeting' };\n",
        "  },\n",
        "  { language: string }\n",
        ">(gql`...`);",
    );
    // Member order matters, so this one is wrong...
    assert!(!reconcile_source(source, &wide_formatter()).is_unchanged());

    let source = source.replace(
        "message: string, __typename: 'Greeting'",
        "__typename: 'Greeting', message: string, // greeting\n",
    );
    // ...and this one is not.
    assert!(reconcile_source(&source, &wide_formatter()).is_unchanged());
}

#[test]
fn unparsable_annotation_is_wrong() {
    let source = "annotateQuery<{ greeting: }>(gql`...`)";
    let Outcome::Replace { kind, .. } = reconcile_source(source, &wide_formatter()) else {
        panic!("expected a replacement");
    };
    assert_eq!(kind, ReplaceKind::WrongAnnotation);
}

#[test]
fn replacement_is_laid_out_for_the_insertion_line() {
    let source = "    const result = await annotateQuery(gql`...`);";

    let outcome = reconcile_source(source, &LayoutFormatter::default());

    let Outcome::Replace { text, .. } = outcome else {
        panic!("expected a replacement");
    };
    assert_eq!(text, concat!(
        "<\n",
        "      { greeting: { __typename: \"Greeting\"; message: string } },\n",
        "      { language: string }\n",
        "    >",
    ));
}

#[test]
fn applying_a_replacement_is_idempotent() {
    for source in [
        "  const r = annotateQuery(gql`...`);",
        "  const r = annotateQuery<{ greeting: null }, {}>(gql`...`);",
    ] {
        let Outcome::Replace { range, text, .. } = reconcile_source(source, &LayoutFormatter::default())
        else {
            panic!("expected a replacement for {source}");
        };
        let fixed = apply(source, range, &text);
        assert_eq!(reconcile_source(&fixed, &LayoutFormatter::default()), Outcome::Unchanged, "{fixed}");
    }
}

#[test]
fn omit_policy_drops_empty_arguments() {
    let inferred = infer_greeting("{ greeting(language: \"en\") { message } }");
    let source = "tgql<{ greeting: { message: string } }>`...`";
    let target = target_in(source, "tgql");

    let omitted = reconcile(&target, &inferred, EmptyArgumentsPolicy::Omit, &wide_formatter());
    assert_eq!(omitted, Ok(Outcome::Unchanged));

    let sentinel = reconcile(&target, &inferred, EmptyArgumentsPolicy::Sentinel, &wide_formatter());
    let Ok(Outcome::Replace { text, .. }) = sentinel else {
        panic!("expected a replacement");
    };
    assert_eq!(text, "<{ greeting: { message: string } }, Record<PropertyKey, never>>");
}

#[test]
fn arrow_types_in_the_existing_annotation_are_replaced_whole() {
    let source = "annotateQuery<{ greeting: () => void }, {}>(gql`...`)";

    let Outcome::Replace { kind, range, text } = reconcile_source(source, &wide_formatter()) else {
        panic!("expected a replacement");
    };
    let fixed = apply(source, range, &text);

    assert_eq!(kind, ReplaceKind::WrongAnnotation);
    assert_eq!(fixed, format!("annotateQuery{GREETING_ANNOTATION}(gql`...`)"));
    assert_eq!(reconcile_source(&fixed, &wide_formatter()), Outcome::Unchanged);
}

/// Targets described field by field, the way a host that owns a syntax tree
/// builds them.
mod host_built_targets {
    use super::*;

    const LINE_PREFIX: &str = "    const result = await annotateQuery";

    const LAID_OUT: &str = concat!(
        "<\n",
        "      { greeting: { __typename: \"Greeting\"; message: string } },\n",
        "      { language: string }\n",
        "    >",
    );

    fn identifier_range() -> TextRange {
        TextRange::new(LINE_PREFIX.len() - "annotateQuery".len(), LINE_PREFIX.len())
    }

    fn reconcile_target(target: &AnnotationTarget) -> Outcome {
        reconcile(
            target,
            &infer_greeting(GREETING_QUERY),
            EmptyArgumentsPolicy::Sentinel,
            &LayoutFormatter::default(),
        ).unwrap()
    }

    #[test]
    fn missing_annotation_uses_the_given_layout() {
        let target = AnnotationTarget::new(TargetKind::Function, identifier_range())
            .with_layout(LINE_PREFIX, 1);

        assert_eq!(reconcile_target(&target), Outcome::Replace {
            kind: ReplaceKind::MissingAnnotation,
            range: TextRange::empty_at(LINE_PREFIX.len()),
            text: LAID_OUT.to_string(),
        });
    }

    #[test]
    fn wrong_annotation_is_replaced_over_its_range() {
        let existing_range = TextRange::new(LINE_PREFIX.len(), LINE_PREFIX.len() + 8);
        let target = AnnotationTarget::new(TargetKind::Function, identifier_range())
            .with_existing_annotation("<{}, {}>", existing_range)
            .with_layout(LINE_PREFIX, 1);

        assert_eq!(reconcile_target(&target), Outcome::Replace {
            kind: ReplaceKind::WrongAnnotation,
            range: existing_range,
            text: LAID_OUT.to_string(),
        });
    }

    #[test]
    fn equivalent_annotation_is_unchanged() {
        let existing = concat!(
            "<\n",
            "  { greeting: { __typename: 'Greeting', message: string } },\n",
            "  { language: string },\n",
            ">",
        );
        let existing_range = TextRange::new(LINE_PREFIX.len(), LINE_PREFIX.len() + existing.len());
        let target = AnnotationTarget::new(TargetKind::Function, identifier_range())
            .with_existing_annotation(existing, existing_range)
            .with_layout(LINE_PREFIX, 1);

        assert_eq!(reconcile_target(&target), Outcome::Unchanged);
    }

    #[test]
    fn layout_defaults_to_column_zero() {
        let target = AnnotationTarget::new(TargetKind::TaggedTemplate, TextRange::new(0, 4));

        assert_eq!(target.line_prefix(), "");
        assert_eq!(target.trailing_width(), 0);
        assert_eq!(reconcile_target(&target), Outcome::Replace {
            kind: ReplaceKind::MissingAnnotation,
            range: TextRange::empty_at(4),
            text: concat!(
                "<\n",
                "  { greeting: { __typename: \"Greeting\"; message: string } },\n",
                "  { language: string }\n",
                ">",
            ).to_string(),
        });
    }
}

mod formatter_failures {
    use super::*;

    struct FixedOutput(Result<String, FormatError>);
    impl AnnotationFormatter for FixedOutput {
        fn format(&self, _: &str, _: &FormatContext) -> Result<String, FormatError> {
            self.0.clone()
        }
    }

    fn reconcile_missing(formatter: &FixedOutput) -> Result<Outcome, ReconcileError> {
        reconcile(
            &AnnotationTarget::new(TargetKind::Method, TextRange::new(0, 5)),
            &infer_greeting(GREETING_QUERY),
            EmptyArgumentsPolicy::Sentinel,
            formatter,
        )
    }

    #[test]
    fn formatter_error_is_propagated() {
        let formatter = FixedOutput(Err(FormatError::Formatter("boom".to_string())));
        assert_eq!(
            reconcile_missing(&formatter),
            Err(ReconcileError::Format(FormatError::Formatter("boom".to_string()))),
        );
    }

    #[test]
    fn formatter_output_must_keep_the_meaning() {
        let formatter = FixedOutput(Ok("<{}, {}>".to_string()));
        assert_eq!(
            reconcile_missing(&formatter),
            Err(ReconcileError::FormatterChangedAnnotation {
                expected: GREETING_ANNOTATION.to_string(),
                formatted: "<{}, {}>".to_string(),
            }),
        );
    }

    #[test]
    fn equivalent_formatter_output_is_accepted() {
        let formatter = FixedOutput(Ok(GREETING_ANNOTATION.replace("; ", ", ")));
        assert!(matches!(
            reconcile_missing(&formatter),
            Ok(Outcome::Replace { kind: ReplaceKind::MissingAnnotation, .. }),
        ));
    }
}
