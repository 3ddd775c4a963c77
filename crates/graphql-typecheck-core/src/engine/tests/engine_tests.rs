use crate::annotation::AnnotationFormatter;
use crate::annotation::FormatContext;
use crate::annotation::FormatError;
use crate::annotation::FormatOptions;
use crate::engine::CallSite;
use crate::engine::Diagnostic;
use crate::engine::DiagnosticKind;
use crate::engine::Engine;
use crate::engine::QueryTemplate;
use crate::engine::TextEdit;
use crate::loc::TextRange;
use crate::reconcile::AnnotationTarget;
use crate::reconcile::TargetKind;
use crate::render::EmptyArgumentsPolicy;
use crate::schema::SchemaCache;
use crate::test;
use std::path::PathBuf;
use std::sync::Arc;

const CALLEE: &str = "annotateQuery";

const GREETING_ANNOTATION: &str =
    "<{ greeting: { __typename: \"Greeting\"; message: string } }, { language: string }>";

const GREETING_QUERY: &str =
    "query Greeting($language: String!) { greeting(language: $language) { __typename message } }";

/// A call site for the `annotateQuery` call and the (single) template
/// literal in `source`.
fn call_site_at(source: &str, schema_path: PathBuf) -> CallSite {
    let identifier_start = source.find(CALLEE).unwrap();
    let identifier_range = TextRange::new(identifier_start, identifier_start + CALLEE.len());
    let template_start = source.find('`').unwrap() + 1;
    let template_end = source.rfind('`').unwrap();

    CallSite {
        empty_arguments: EmptyArgumentsPolicy::Sentinel,
        schema_path,
        target: AnnotationTarget::from_source(source, TargetKind::Function, identifier_range),
        template: QueryTemplate {
            range: TextRange::new(template_start, template_end),
            text: source[template_start..template_end].to_string(),
        },
    }
}

fn call_site(source: &str, schema_file: &str) -> CallSite {
    call_site_at(source, test::fixture_path(schema_file))
}

fn engine() -> Engine {
    Engine::new(Arc::new(SchemaCache::new()), FormatOptions {
        print_width: 120,
        ..FormatOptions::default()
    })
}

fn check(source: &str, schema_file: &str) -> Option<Diagnostic> {
    engine().check_call_site(&call_site(source, schema_file))
}

fn greeting_source(annotation: &str) -> String {
    format!("const result = {CALLEE}{annotation}(gql`{GREETING_QUERY}`);")
}

mod annotations {
    use super::*;

    #[test]
    fn missing_annotation_gets_a_fix() {
        let source = greeting_source("");

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        assert_eq!(diagnostic, Diagnostic {
            fix: Some(TextEdit {
                range: TextRange::empty_at(28),
                text: GREETING_ANNOTATION.to_string(),
            }),
            kind: DiagnosticKind::MissingAnnotation,
            message: "Operation should have a type annotation that matches the GraphQL query type"
                .to_string(),
            range: TextRange::new(15, 28),
        });
    }

    #[test]
    fn wrong_annotation_is_reported_on_the_annotation() {
        let wrong = "<{ greeting: { message: string } }, { language: string }>";
        let source = greeting_source(wrong);

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        let wrong_range = TextRange::new(28, 28 + wrong.len());
        assert_eq!(diagnostic.kind, DiagnosticKind::WrongAnnotation);
        assert_eq!(diagnostic.message, "Operation type annotation does not match GraphQL query type");
        assert_eq!(diagnostic.range, wrong_range);
        assert_eq!(diagnostic.fix, Some(TextEdit {
            range: wrong_range,
            text: GREETING_ANNOTATION.to_string(),
        }));
    }

    #[test]
    fn matching_annotation_produces_nothing() {
        let source = greeting_source(
            "<{ greeting: { __typename: 'Greeting', message: string } }, { language: string }>",
        );
        assert_eq!(check(&source, "greeting.graphql"), None);
    }

    #[test]
    fn applying_the_fix_settles_the_call_site() {
        let engine = Engine::new(Arc::new(SchemaCache::new()), FormatOptions::default());
        let source = format!("    {}", greeting_source("<{}, {}>"));

        let diagnostic = engine
            .check_call_site(&call_site(&source, "greeting.graphql"))
            .unwrap();
        let fixed = diagnostic.fix.unwrap().apply(&source).unwrap();

        assert!(fixed.contains("annotateQuery<\n      { greeting"), "{fixed}");
        assert_eq!(engine.check_call_site(&call_site(&fixed, "greeting.graphql")), None);
    }
}

mod schema_failures {
    use super::*;

    #[test]
    fn unreadable_schema_reports_the_absolute_path() {
        let schema_path = PathBuf::from("does/not/exist.graphql");
        let source = greeting_source("");

        let diagnostic = engine()
            .check_call_site(&call_site_at(&source, schema_path.clone()))
            .unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::SchemaUnreadable);
        assert_eq!(
            diagnostic.message,
            format!(
                "Cannot read GraphQL schema file at '{}':\n\nNo such file (or the path is a directory)",
                std::path::absolute(&schema_path).unwrap().display(),
            ),
        );
        assert_eq!(diagnostic.range, TextRange::new(15, 28));
        assert_eq!(diagnostic.fix, None);
    }

    #[test]
    fn invalid_schema() {
        let diagnostic = check(&greeting_source(""), "invalid.graphql").unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::SchemaInvalid);
        assert!(diagnostic.message.starts_with("Invalid GraphQL schema at '"), "{}", diagnostic.message);
        assert!(diagnostic.message.contains("invalid.graphql':\n\n"), "{}", diagnostic.message);
    }
}

mod query_failures {
    use super::*;

    #[test]
    fn unknown_field_names_the_field() {
        let source = format!("{CALLEE}(gql`{{ greeting(language: \"en\") {{ nope }} }}`)");

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::QueryInvalid);
        assert!(
            diagnostic.message.starts_with(
                "Invalid GraphQL document in template literal:\n\n\
                 Cannot query field \"nope\" on type \"Greeting\".",
            ),
            "{}",
            diagnostic.message,
        );
        assert_eq!(diagnostic.range, TextRange::new(0, CALLEE.len()));
    }

    #[test]
    fn two_operations() {
        let source = format!(
            "{CALLEE}(gql`query A {{ greeting(language: \"en\") {{ message }} }} \
             query B {{ greeting(language: \"fr\") {{ message }} }}`)",
        );

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::QueryInvalid);
        assert_eq!(diagnostic.message, "Only a single definition is allowed in gql template literals");
    }

    #[test]
    fn mutation() {
        let source = format!(
            "{CALLEE}(gql`mutation {{ addBook(input: {{ title: \"t\", genre: POETRY, authorId: \"1\" }}) {{ id }} }}`)",
        );

        let diagnostic = check(&source, "library.graphql").unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::QueryInvalid);
        assert_eq!(diagnostic.message, "Only query operations are allowed in gql template literals");
    }

    #[test]
    fn interpolation_is_reported_on_the_placeholder() {
        let source = format!("{CALLEE}(gql`{{ greeting(language: ${{lang}}) {{ message }} }}`)");
        let placeholder_start = source.find("${").unwrap();

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::InterpolationNotAllowed);
        assert_eq!(diagnostic.message, "Interpolation not allowed in gql template literals");
        assert_eq!(diagnostic.range, TextRange::new(placeholder_start, placeholder_start + 7));
    }

    #[test]
    fn parse_error_is_reported_on_the_template() {
        let source = format!("{CALLEE}(gql`{{ greeting(`)");
        let template_start = source.find('`').unwrap() + 1;

        let diagnostic = check(&source, "greeting.graphql").unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::QueryParseError);
        assert!(
            diagnostic.message.starts_with("Parse error in GraphQL template literal:\n\n"),
            "{}",
            diagnostic.message,
        );
        assert_eq!(diagnostic.range, TextRange::new(template_start, source.len() - 2));
    }
}

mod unhandled {
    use super::*;

    struct PanickingFormatter;
    impl AnnotationFormatter for PanickingFormatter {
        fn format(&self, _: &str, _: &FormatContext) -> Result<String, FormatError> {
            panic!("formatter exploded");
        }
    }

    struct FailingFormatter;
    impl AnnotationFormatter for FailingFormatter {
        fn format(&self, _: &str, _: &FormatContext) -> Result<String, FormatError> {
            Err(FormatError::Formatter("no layout".to_string()))
        }
    }

    const PREFIX: &str = "Unhandled exception in graphql-typecheck, probably due to a bug in the \
                          engine. Note that the query type annotations may be incorrect.\n\n";

    #[test]
    fn panics_are_caught() {
        let engine = Engine::with_formatter(Arc::new(SchemaCache::new()), PanickingFormatter);

        let diagnostic = engine
            .check_call_site(&call_site(&greeting_source(""), "greeting.graphql"))
            .unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::UnhandledEngineException);
        assert!(diagnostic.message.starts_with(PREFIX), "{}", diagnostic.message);
        assert!(diagnostic.message.contains("formatter exploded"), "{}", diagnostic.message);
        // The backtrace starts where the formatter panicked.
        assert!(diagnostic.message.contains("PanickingFormatter"), "{}", diagnostic.message);
        assert_eq!(diagnostic.fix, None);
    }

    #[test]
    fn errors_after_validation_are_unhandled_exceptions() {
        let engine = Engine::with_formatter(Arc::new(SchemaCache::new()), FailingFormatter);

        let diagnostic = engine
            .check_call_site(&call_site(&greeting_source(""), "greeting.graphql"))
            .unwrap();

        assert_eq!(diagnostic.kind, DiagnosticKind::UnhandledEngineException);
        assert!(
            diagnostic.message.starts_with(&format!(
                "{PREFIX}annotation reconciliation failed: annotation formatter failed: no layout\n",
            )),
            "{}",
            diagnostic.message,
        );
    }
}

#[test]
fn schemas_are_loaded_once_per_engine() {
    let engine = engine();
    for annotation in ["", GREETING_ANNOTATION] {
        engine.check_call_site(&call_site(&greeting_source(annotation), "greeting.graphql"));
    }
    assert_eq!(engine.schema_cache().len(), 1);
}
