use crate::annotation::AnnotationParseError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The text handed to the formatter is not a type-argument list.
    #[error("cannot format annotation: {0}")]
    Parse(#[from] AnnotationParseError),

    /// A failure reported by an external [`AnnotationFormatter`]
    /// implementation.
    ///
    /// [`AnnotationFormatter`]: crate::annotation::AnnotationFormatter
    #[error("annotation formatter failed: {0}")]
    Formatter(String),
}
