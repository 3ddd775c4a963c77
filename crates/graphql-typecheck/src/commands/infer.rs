use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_typecheck_core::annotation::AnnotationFormatter;
use graphql_typecheck_core::annotation::FormatContext;
use graphql_typecheck_core::annotation::FormatOptions;
use graphql_typecheck_core::annotation::LayoutFormatter;
use graphql_typecheck_core::file_reader;
use graphql_typecheck_core::inference::infer_types;
use graphql_typecheck_core::operation::parse_and_validate;
use graphql_typecheck_core::render::render_annotation;
use graphql_typecheck_core::render::EmptyArgumentsPolicy;
use graphql_typecheck_core::schema::load_schema;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InferCmd {
    #[arg(
        help="Write `<Result>` instead of `<Result, Record<PropertyKey, never>>` \
             for queries that declare no variables.",
        long,
    )]
    omit_empty_arguments: bool,

    #[arg(
        default_value_t=FormatOptions::default().print_width,
        help="The column the printed annotation should not run past.",
        long,
    )]
    print_width: usize,

    #[arg(
        help="Path to the GraphQL schema (SDL) file the query runs against.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Path to a file holding a single GraphQL query.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}
impl InferCmd {
    fn infer(&self) -> anyhow::Result<String> {
        let schema = load_schema(&self.schema)?;
        let query_text = file_reader::read_utf8_file(&self.query_file)
            .with_context(|| format!("reading {}", self.query_file.display()))?;
        let document = parse_and_validate(&schema, &query_text)?;
        let inferred = infer_types(&schema, &document)?;

        let policy = if self.omit_empty_arguments {
            EmptyArgumentsPolicy::Omit
        } else {
            EmptyArgumentsPolicy::Sentinel
        };
        let formatter = LayoutFormatter::new(FormatOptions {
            print_width: self.print_width,
            ..FormatOptions::default()
        });
        let annotation = render_annotation(&inferred, policy);
        Ok(formatter.format(&annotation, &FormatContext::default())?)
    }
}

#[inherent::inherent]
impl RunnableCommand for InferCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.infer() {
            Ok(annotation) => CommandResult::stdout(format_args!("{annotation}")),
            Err(e) => CommandResult::failure(&e),
        }
    }
}
