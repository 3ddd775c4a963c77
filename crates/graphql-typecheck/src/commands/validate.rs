use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_typecheck_core::file_reader;
use graphql_typecheck_core::inference::infer_types;
use graphql_typecheck_core::operation::parse_and_validate;
use graphql_typecheck_core::schema::Schema;
use graphql_typecheck_core::schema::SchemaCache;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Path to the GraphQL schema (SDL) file the queries run against.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Paths to one or more query files or directories containing \
             query files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The problems found in one query file.
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    problems: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_cache = SchemaCache::new();
        let schema = match schema_cache.get_or_load(&self.schema) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        // Find all query files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut walk_errors: Vec<String> = vec![];
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let has_graphql_ext = path.extension()
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                        if has_graphql_ext {
                            log::trace!("Found query file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        walk_errors.push(e.to_string());
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file validated as a query file -- even if
        // its file extension doesn't match one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = 0;
            file_paths.push(first_arg_path.to_owned());
        }

        if !walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while searching for query files:\n{}",
                output_utils::RED_X,
                output_utils::indented(&walk_errors.join("\n"), 2),
            ));
        }

        log::debug!(
            "Found {} query files to be validated.",
            file_paths.len(),
        );

        let tasks = file_paths.into_iter().map(|path| {
            let schema = Arc::clone(&schema);
            tokio::task::spawn_blocking(move || validate_file(&schema, path))
        }).collect::<Vec<_>>();

        let mut num_files = 0;
        let mut failures = vec![];
        for task in tasks {
            num_files += 1;
            match task.await {
                Ok(report) if report.problems.is_empty() => (),
                Ok(report) => failures.push(report),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} A validation task failed: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        if failures.is_empty() {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{} All queries validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-query files.\n",
                    "  * Validated against {} type definitions.",
                ),
                output_utils::GREEN_CHECK,
                num_files,
                num_skipped_files,
                schema.all_types().len(),
            ));
        }

        let failures = failures.iter().map(|report| {
            format!(
                "{} {}:\n{}",
                output_utils::RED_X,
                report.path.display(),
                output_utils::indented(&report.problems.join("\n"), 2),
            )
        }).collect::<Vec<_>>();
        CommandResult::findings(format_args!(
            "{}\n\n{} of {num_files} files failed validation.",
            failures.join("\n\n"),
            failures.len(),
        ))
    }
}

fn validate_file(schema: &Schema, path: PathBuf) -> FileReport {
    log::trace!("Validating {path:#?}...");
    let problems = match file_reader::read_utf8_file(path.as_path()) {
        Err(e) => vec![e.to_string()],
        Ok(query_text) => match parse_and_validate(schema, &query_text) {
            Err(e) => e.to_string().lines().map(str::to_owned).collect(),
            Ok(document) => match infer_types(schema, &document) {
                Err(e) => vec![format!("Type inference failed: {e}")],
                Ok(_) => vec![],
            },
        },
    };
    FileReport { path, problems }
}
