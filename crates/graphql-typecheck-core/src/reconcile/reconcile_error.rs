use crate::annotation::AnnotationParseError;
use crate::annotation::FormatError;
use thiserror::Error;

/// A failure while producing a replacement annotation. Every variant points
/// at a bug in the renderer or in an [`AnnotationFormatter`], never at the
/// host source.
///
/// [`AnnotationFormatter`]: crate::annotation::AnnotationFormatter
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("rendered annotation `{annotation}` does not parse: {source}")]
    RenderedAnnotationInvalid {
        annotation: String,
        source: AnnotationParseError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("the formatter changed the meaning of `{expected}` (it produced `{formatted}`)")]
    FormatterChangedAnnotation {
        expected: String,
        formatted: String,
    },
}
