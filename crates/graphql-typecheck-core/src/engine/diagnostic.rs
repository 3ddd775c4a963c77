use crate::loc::TextRange;

/// Every problem the engine reports falls into exactly one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DiagnosticKind {
    SchemaUnreadable,
    SchemaInvalid,
    InterpolationNotAllowed,
    QueryParseError,
    /// Validation errors, more than one definition, or a non-query
    /// operation.
    QueryInvalid,
    MissingAnnotation,
    WrongAnnotation,
    UnhandledEngineException,
}
impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaUnreadable => "schema-unreadable",
            Self::SchemaInvalid => "schema-invalid",
            Self::InterpolationNotAllowed => "interpolation-not-allowed",
            Self::QueryParseError => "query-parse-error",
            Self::QueryInvalid => "query-invalid",
            Self::MissingAnnotation => "missing-annotation",
            Self::WrongAnnotation => "wrong-annotation",
            Self::UnhandledEngineException => "unhandled-engine-exception",
        }
    }
}
impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single replacement in the host source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TextEdit {
    pub range: TextRange,
    pub text: String,
}
impl TextEdit {
    /// `source` with this edit applied. Returns `None` when the range does
    /// not fall on character boundaries of `source`.
    pub fn apply(&self, source: &str) -> Option<String> {
        let before = source.get(..self.range.start)?;
        let after = source.get(self.range.end..)?;
        Some(format!("{before}{}{after}", self.text))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Present for missing and wrong annotations.
    pub fix: Option<TextEdit>,
    pub kind: DiagnosticKind,
    pub message: String,
    pub range: TextRange,
}
