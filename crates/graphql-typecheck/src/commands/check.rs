use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_typecheck_core::config::GqlOperationConfig;
use graphql_typecheck_core::config::TypeCheckConfig;
use graphql_typecheck_core::engine::CallSite;
use graphql_typecheck_core::engine::Engine;
use graphql_typecheck_core::engine::QueryTemplate;
use graphql_typecheck_core::file_reader;
use graphql_typecheck_core::loc::TextRange;
use graphql_typecheck_core::reconcile::AnnotationTarget;
use graphql_typecheck_core::reconcile::TargetKind;
use graphql_typecheck_core::schema::SchemaCache;
use std::path::PathBuf;
use std::sync::Arc;

const STATEMENT_PREFIX: &str = "const result = await ";

/// Checks a query file as if it were written at a call site described by
/// the configuration, and prints the corrected call when the annotation is
/// missing or stale.
#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        help="The annotation currently written at the call site, including \
             its angle brackets (e.g. `<Result, Args>`).",
        long,
        short='a',
    )]
    annotation: Option<String>,

    #[arg(
        help="Path to the JSON configuration holding `gqlOperations`.",
        long,
        short='c',
    )]
    config: PathBuf,

    #[arg(
        help="Object the method is called on (e.g. `api` in `api.query`).",
        long,
    )]
    object: Option<String>,

    #[arg(
        help="Function, method or template tag name of the call site.",
        long,
        short='t',
    )]
    target: String,

    #[arg(
        help="Path to a file holding the query text of the `gql` template.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}
impl CheckCmd {
    fn prepare(&self) -> anyhow::Result<(Engine, String, CallSite)> {
        let config = TypeCheckConfig::load(&self.config)?;
        let operation = config
            .find_call_operation(self.object.as_deref(), &self.target)
            .or_else(|| config.find_tagged_template(&self.target))
            .with_context(|| format!(
                "no `gqlOperations` entry in {} matches `{}`",
                self.config.display(),
                self.callee(),
            ))?;
        let query_text = file_reader::read_utf8_file(&self.query_file)
            .with_context(|| format!("reading {}", self.query_file.display()))?;

        let (source, call_site) = synthesize_call_site(
            operation,
            &self.callee(),
            self.annotation.as_deref().unwrap_or(""),
            &query_text,
        );
        log::debug!("checking synthesized call site: {source}");

        let engine = Engine::new(Arc::new(SchemaCache::new()), config.format_options());
        Ok((engine, source, call_site))
    }

    fn callee(&self) -> String {
        match &self.object {
            Some(object) => format!("{object}.{}", self.target),
            None => self.target.clone(),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (engine, source, call_site) = match self.prepare() {
            Ok(prepared) => prepared,
            Err(e) => return CommandResult::failure(&e),
        };

        let Some(diagnostic) = engine.check_call_site(&call_site) else {
            return CommandResult::stdout(format_args!(
                "{} The annotation for `{}` matches its query.",
                output_utils::GREEN_CHECK,
                self.callee(),
            ));
        };

        let fixed = diagnostic.fix.as_ref()
            .and_then(|fix| fix.apply(&source))
            .map(|fixed| format!(
                "\n\nSuggested fix:\n{}",
                output_utils::indented(&fixed, 2),
            ))
            .unwrap_or_default();
        CommandResult::findings(format_args!(
            "{} [{}] {}{fixed}",
            output_utils::RED_X,
            diagnostic.kind,
            diagnostic.message,
        ))
    }
}

/// Write out a statement that calls `callee` the way `operation` describes,
/// with `annotation` directly after the callee and `query_text` in the
/// `gql` template.
fn synthesize_call_site(
    operation: &GqlOperationConfig,
    callee: &str,
    annotation: &str,
    query_text: &str,
) -> (String, CallSite) {
    let kind = operation.target_kind();
    let mut source = String::from(STATEMENT_PREFIX);
    source.push_str(callee);
    let identifier_end = source.len();
    let identifier_start = identifier_end - callee.rsplit('.').next().map_or(0, str::len);
    source.push_str(annotation);

    let template_start = match kind {
        TargetKind::TaggedTemplate => {
            source.push('`');
            source.len()
        },
        TargetKind::Function | TargetKind::Method => {
            source.push('(');
            for _ in 0..operation.gql_literal_argument_index {
                source.push_str("undefined, ");
            }
            source.push_str("gql`");
            source.len()
        },
    };
    source.push_str(query_text);
    let template_end = source.len();
    source.push('`');
    if kind != TargetKind::TaggedTemplate {
        source.push(')');
    }
    source.push(';');

    let target = AnnotationTarget::from_source(
        &source,
        kind,
        TextRange::new(identifier_start, identifier_end),
    );
    let call_site = CallSite {
        empty_arguments: operation.empty_arguments,
        schema_path: operation.schema_file_path.clone(),
        target,
        template: QueryTemplate {
            range: TextRange::new(template_start, template_end),
            text: query_text.to_string(),
        },
    };
    (source, call_site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_typecheck_core::render::EmptyArgumentsPolicy;

    fn operation(method_name: Option<&str>, tag: Option<&str>, object: Option<&str>) -> GqlOperationConfig {
        GqlOperationConfig {
            empty_arguments: EmptyArgumentsPolicy::Sentinel,
            gql_literal_argument_index: 0,
            method_name: method_name.map(str::to_string),
            object_name: object.map(str::to_string),
            schema_file_path: PathBuf::from("/schema.graphql"),
            tagged_template_name: tag.map(str::to_string),
        }
    }

    #[test]
    fn method_call_site_points_at_the_method_name() {
        let op = operation(Some("query"), None, Some("api"));
        let (source, call_site) = synthesize_call_site(&op, "api.query", "", "{ a }");

        assert_eq!(source, "const result = await api.query(gql`{ a }`);");
        let identifier = call_site.target.identifier_range();
        assert_eq!(&source[identifier.start..identifier.end], "query");
        let template = call_site.template.range;
        assert_eq!(&source[template.start..template.end], "{ a }");
        assert_eq!(call_site.target.kind(), TargetKind::Method);
        assert!(call_site.target.existing_annotation().is_none());
    }

    #[test]
    fn existing_annotation_is_found_after_the_callee() {
        let op = operation(Some("query"), None, None);
        let (source, call_site) = synthesize_call_site(&op, "query", "<{ a: string }>", "{ a }");

        assert_eq!(source, "const result = await query<{ a: string }>(gql`{ a }`);");
        let existing = call_site.target.existing_annotation().unwrap();
        assert_eq!(existing.text, "<{ a: string }>");
        assert_eq!(call_site.target.trailing_width(), 1);
    }

    #[test]
    fn literal_argument_index_adds_leading_arguments() {
        let mut op = operation(Some("query"), None, None);
        op.gql_literal_argument_index = 2;
        let (source, call_site) = synthesize_call_site(&op, "query", "", "{ a }");

        assert_eq!(source, "const result = await query(undefined, undefined, gql`{ a }`);");
        let template = call_site.template.range;
        assert_eq!(&source[template.start..template.end], "{ a }");
    }

    #[test]
    fn tagged_template_has_no_call_parens() {
        let op = operation(None, Some("graphql"), None);
        let (source, call_site) = synthesize_call_site(&op, "graphql", "", "{ a }");

        assert_eq!(source, "const result = await graphql`{ a }`;");
        assert_eq!(call_site.target.kind(), TargetKind::TaggedTemplate);
        let template = call_site.template.range;
        assert_eq!(&source[template.start..template.end], "{ a }");
    }
}
