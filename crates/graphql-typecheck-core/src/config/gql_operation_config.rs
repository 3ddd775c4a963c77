use crate::reconcile::TargetKind;
use crate::render::EmptyArgumentsPolicy;
use std::path::PathBuf;

/// One `gqlOperations` entry: which calls carry a `gql` query and which
/// schema types them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GqlOperationConfig {
    #[serde(default)]
    pub empty_arguments: EmptyArgumentsPolicy,
    /// Zero-based index of the call argument holding the `gql` template.
    #[serde(default)]
    pub gql_literal_argument_index: usize,
    pub method_name: Option<String>,
    pub object_name: Option<String>,
    /// Absolute once loaded through
    /// [`TypeCheckConfig::load()`](crate::config::TypeCheckConfig::load).
    pub schema_file_path: PathBuf,
    pub tagged_template_name: Option<String>,
}
impl GqlOperationConfig {
    /// Whether a call to `object_name.method_name(...)` (or a bare
    /// `method_name(...)` when `object_name` is `None`) is described by this
    /// entry. An entry without an object name matches calls on any object,
    /// and a bare call matches entries for any object.
    pub fn matches_call(&self, object_name: Option<&str>, method_name: &str) -> bool {
        let object_matches = match (self.object_name.as_deref(), object_name) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => true,
        };
        object_matches && self.method_name.as_deref() == Some(method_name)
    }

    pub fn matches_tagged_template(&self, tag_name: &str) -> bool {
        self.tagged_template_name.as_deref() == Some(tag_name)
    }

    pub fn target_kind(&self) -> TargetKind {
        match (&self.tagged_template_name, &self.object_name) {
            (Some(_), _) => TargetKind::TaggedTemplate,
            (None, Some(_)) => TargetKind::Method,
            (None, None) => TargetKind::Function,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        match (&self.method_name, &self.tagged_template_name) {
            (None, None) => Err("either `methodName` or `taggedTemplateName` is required"),
            (Some(_), Some(_)) => Err("`methodName` and `taggedTemplateName` are mutually exclusive"),
            (None, Some(_)) if self.object_name.is_some() => Err("`objectName` requires `methodName`"),
            (None, Some(_)) if self.gql_literal_argument_index != 0 => {
                Err("`gqlLiteralArgumentIndex` does not apply to tagged templates")
            },
            _ => Ok(()),
        }
    }
}
