use crate::annotation::doc::text_width;

/// Where formatted annotation text will be inserted in the host source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatContext {
    /// Leading whitespace of the line the annotation starts on. Every line
    /// after the first starts with it.
    pub indentation: String,

    /// The column (in characters) at which the annotation's `<` lands.
    pub start_column: usize,

    /// Width of the text that directly follows the annotation on its last
    /// line, such as the `(` of a call.
    pub trailing_width: usize,
}
impl FormatContext {
    /// Build a context from `line_prefix`, the text between the start of
    /// the insertion line and the insertion point.
    ///
    /// ```
    /// use graphql_typecheck_core::annotation::FormatContext;
    ///
    /// let context = FormatContext::new("    const x = await api.query", 1);
    /// assert_eq!(context.indentation, "    ");
    /// assert_eq!(context.start_column, 29);
    /// ```
    pub fn new(line_prefix: &str, trailing_width: usize) -> Self {
        let indentation_len = line_prefix.len() - line_prefix.trim_start().len();
        Self {
            indentation: line_prefix[..indentation_len].to_string(),
            start_column: text_width(line_prefix),
            trailing_width,
        }
    }
}
