use crate::loc::TextRange;
use crate::reconcile::AnnotationTarget;
use crate::render::EmptyArgumentsPolicy;
use std::path::PathBuf;

/// The literal text of a `gql` template and where it sits in the host
/// source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTemplate {
    /// Range of the template's content, excluding the backticks.
    pub range: TextRange,
    pub text: String,
}

/// Everything the [`Engine`](crate::engine::Engine) needs to check one
/// annotated query call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub empty_arguments: EmptyArgumentsPolicy,
    /// Schema file for this call site, already resolved by the host's
    /// configuration.
    pub schema_path: PathBuf,
    pub target: AnnotationTarget,
    pub template: QueryTemplate,
}
