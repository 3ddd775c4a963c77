use crate::annotation::FormatContext;
use crate::annotation::FormatError;

/// Pretty-prints annotation text (a complete `<...>` type-argument list)
/// for insertion at the position described by a [`FormatContext`].
///
/// The returned text must not include the context's leading indentation on
/// its first line, but every following line must carry it.
pub trait AnnotationFormatter: Send + Sync {
    fn format(
        &self,
        annotation: &str,
        context: &FormatContext,
    ) -> Result<String, FormatError>;
}
