use crate::annotation::AnnotationFormatter;
use crate::annotation::FormatOptions;
use crate::annotation::LayoutFormatter;
use crate::engine::engine_error::EngineError;
use crate::engine::CallSite;
use crate::engine::Diagnostic;
use crate::engine::DiagnosticKind;
use crate::engine::TextEdit;
use crate::inference::infer_types;
use crate::loc::TextRange;
use crate::operation::parse_and_validate;
use crate::operation::QueryError;
use crate::panic_guard::catch_panic;
use crate::reconcile::reconcile;
use crate::reconcile::Outcome;
use crate::reconcile::ReplaceKind;
use crate::schema::SchemaCache;
use crate::schema::SchemaError;
use std::backtrace::Backtrace;
use std::sync::Arc;

const MISSING_ANNOTATION_MESSAGE: &str =
    "Operation should have a type annotation that matches the GraphQL query type";
const WRONG_ANNOTATION_MESSAGE: &str =
    "Operation type annotation does not match GraphQL query type";
const UNHANDLED_EXCEPTION_MESSAGE: &str =
    "Unhandled exception in graphql-typecheck, probably due to a bug in the engine. \
     Note that the query type annotations may be incorrect.";

/// Runs the whole pipeline (schema, validation, inference, rendering and
/// reconciliation) for one call site at a time.
///
/// An `Engine` is cheap to share between threads; schemas are cached in the
/// [`SchemaCache`] it was built with.
pub struct Engine {
    formatter: Box<dyn AnnotationFormatter>,
    schema_cache: Arc<SchemaCache>,
}
impl Engine {
    pub fn new(schema_cache: Arc<SchemaCache>, format_options: FormatOptions) -> Self {
        Self::with_formatter(schema_cache, LayoutFormatter::new(format_options))
    }

    pub fn with_formatter(
        schema_cache: Arc<SchemaCache>,
        formatter: impl AnnotationFormatter + 'static,
    ) -> Self {
        Self {
            formatter: Box::new(formatter),
            schema_cache,
        }
    }

    /// Check one call site. Returns `None` when its annotation is up to
    /// date, and otherwise the single diagnostic that describes why not.
    ///
    /// Never panics: a panic anywhere in the pipeline is reported as
    /// [`DiagnosticKind::UnhandledEngineException`].
    pub fn check_call_site(&self, call_site: &CallSite) -> Option<Diagnostic> {
        catch_panic(|| self.check(call_site)).unwrap_or_else(|panic| {
            Some(unhandled_diagnostic(call_site, &panic.message, &panic.backtrace))
        })
    }

    pub fn schema_cache(&self) -> &Arc<SchemaCache> {
        &self.schema_cache
    }

    fn check(&self, call_site: &CallSite) -> Option<Diagnostic> {
        let schema = match self.schema_cache.get_or_load(&call_site.schema_path) {
            Ok(schema) => schema,
            Err(err) => return Some(schema_diagnostic(call_site, err)),
        };

        let document = match parse_and_validate(&schema, &call_site.template.text) {
            Ok(document) => document,
            Err(err) => return Some(query_diagnostic(call_site, err)),
        };
        log::debug!(
            "validated {} operation `{}`",
            document.kind(),
            document.name().unwrap_or("<anonymous>"),
        );

        let outcome = infer_types(&schema, &document)
            .map_err(EngineError::from)
            .and_then(|inferred| {
                reconcile(
                    &call_site.target,
                    &inferred,
                    call_site.empty_arguments,
                    self.formatter.as_ref(),
                ).map_err(EngineError::from)
            });

        match outcome {
            Ok(Outcome::Unchanged) => None,
            Ok(Outcome::Replace { kind, range, text }) => {
                let (kind, message, diagnostic_range) = match kind {
                    ReplaceKind::MissingAnnotation => (
                        DiagnosticKind::MissingAnnotation,
                        MISSING_ANNOTATION_MESSAGE,
                        call_site.target.identifier_range(),
                    ),
                    ReplaceKind::WrongAnnotation => (
                        DiagnosticKind::WrongAnnotation,
                        WRONG_ANNOTATION_MESSAGE,
                        range,
                    ),
                };
                Some(Diagnostic {
                    fix: Some(TextEdit { range, text }),
                    kind,
                    message: message.to_string(),
                    range: diagnostic_range,
                })
            },
            Err(err) => Some(unhandled_diagnostic(
                call_site,
                &err.to_string(),
                &Backtrace::force_capture(),
            )),
        }
    }
}
impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("schema_cache", &self.schema_cache)
            .finish_non_exhaustive()
    }
}

fn schema_diagnostic(call_site: &CallSite, err: SchemaError) -> Diagnostic {
    let (kind, message) = match &err {
        SchemaError::Unreadable { path, cause } => (
            DiagnosticKind::SchemaUnreadable,
            format!("Cannot read GraphQL schema file at '{}':\n\n{cause}", path.display()),
        ),
        SchemaError::Invalid { path, cause } => (
            DiagnosticKind::SchemaInvalid,
            format!("Invalid GraphQL schema at '{}':\n\n{cause}", path.display()),
        ),
    };
    Diagnostic {
        fix: None,
        kind,
        message,
        range: call_site.target.identifier_range(),
    }
}

fn query_diagnostic(call_site: &CallSite, err: QueryError) -> Diagnostic {
    let template = &call_site.template;
    let (kind, message, range) = match &err {
        QueryError::InterpolationNotAllowed { offset } => {
            let end = template.text[*offset..]
                .find('}')
                .map_or(template.text.len(), |close| offset + close + 1);
            (
                DiagnosticKind::InterpolationNotAllowed,
                err.to_string(),
                TextRange::new(*offset, end).offset_by(template.range.start),
            )
        },
        QueryError::ParseError(message) => (
            DiagnosticKind::QueryParseError,
            format!("Parse error in GraphQL template literal:\n\n{message}"),
            template.range,
        ),
        QueryError::InvalidDocument(message) => (
            DiagnosticKind::QueryInvalid,
            format!("Invalid GraphQL document in template literal:\n\n{message}"),
            call_site.target.identifier_range(),
        ),
        QueryError::MultipleDefinitionsNotAllowed
            | QueryError::OnlyQueryOperationsAllowed => (
            DiagnosticKind::QueryInvalid,
            err.to_string(),
            call_site.target.identifier_range(),
        ),
    };
    Diagnostic {
        fix: None,
        kind,
        message,
        range,
    }
}

fn unhandled_diagnostic(call_site: &CallSite, message: &str, backtrace: &Backtrace) -> Diagnostic {
    log::error!("unhandled engine failure: {message}");
    Diagnostic {
        fix: None,
        kind: DiagnosticKind::UnhandledEngineException,
        message: format!("{UNHANDLED_EXCEPTION_MESSAGE}\n\n{message}\n{backtrace}"),
        range: call_site.target.identifier_range(),
    }
}
