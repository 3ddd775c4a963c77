use crate::annotation::FormatOptions;
use crate::config::ConfigError;
use crate::config::GqlOperationConfig;
use crate::file_reader;
use std::path::Path;

/// The JSON configuration file that tells a host which calls to check.
///
/// ```json
/// {
///   "gqlOperations": [
///     { "methodName": "annotateQuery", "schemaFilePath": "schema.graphql" },
///     { "taggedTemplateName": "tgql", "schemaFilePath": "schema.graphql", "emptyArguments": "omit" }
///   ],
///   "printWidth": 100
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TypeCheckConfig {
    #[serde(default)]
    pub gql_operations: Vec<GqlOperationConfig>,
    pub print_width: Option<usize>,
    pub tab_width: Option<usize>,
}
impl TypeCheckConfig {
    /// Read and validate the configuration file at `path`. Relative
    /// `schemaFilePath`s are resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading configuration from `{}`", path.display());

        let content = file_reader::read_utf8_file(path).map_err(|cause| {
            ConfigError::Unreadable {
                path: path.to_path_buf(),
                cause,
            }
        })?;
        let base_dir = std::path::absolute(path)
            .ok()
            .and_then(|path| path.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::from_json(&content, &base_dir)
    }

    /// Parse and validate configuration text, resolving relative schema
    /// paths against `base_dir`.
    pub fn from_json(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let deserializer = &mut serde_json::Deserializer::from_str(content);
        let mut config: Self = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            ConfigError::Malformed {
                json_path: err.path().to_string(),
                message: err.inner().to_string(),
            }
        })?;

        for (index, operation) in config.gql_operations.iter_mut().enumerate() {
            operation
                .validate()
                .map_err(|reason| ConfigError::InvalidEntry { index, reason })?;
            if operation.schema_file_path.is_relative() {
                operation.schema_file_path = base_dir.join(&operation.schema_file_path);
            }
        }
        Ok(config)
    }

    /// The first entry describing a call to `object_name.method_name(...)`.
    pub fn find_call_operation(
        &self,
        object_name: Option<&str>,
        method_name: &str,
    ) -> Option<&GqlOperationConfig> {
        self.gql_operations
            .iter()
            .find(|operation| operation.matches_call(object_name, method_name))
    }

    /// The first entry for a template tagged with `tag_name`.
    pub fn find_tagged_template(&self, tag_name: &str) -> Option<&GqlOperationConfig> {
        self.gql_operations
            .iter()
            .find(|operation| operation.matches_tagged_template(tag_name))
    }

    pub fn format_options(&self) -> FormatOptions {
        let defaults = FormatOptions::default();
        FormatOptions {
            print_width: self.print_width.unwrap_or(defaults.print_width),
            tab_width: self.tab_width.unwrap_or(defaults.tab_width),
        }
    }
}
