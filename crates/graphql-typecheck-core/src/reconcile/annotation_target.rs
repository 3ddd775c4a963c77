use crate::annotation::FormatContext;
use crate::loc::TextRange;
use crate::reconcile::TargetKind;

/// The annotation currently written at a call site, verbatim.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExistingAnnotation {
    pub range: TextRange,
    pub text: String,
}

/// Identifies where a call site's annotation is (or would be) written in
/// the host source.
///
/// Hosts that own a syntax tree build targets with [`new()`](Self::new)
/// and the `with_*` methods; [`from_source()`](Self::from_source) covers
/// hosts that only know where the callee identifier ends.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnnotationTarget {
    existing: Option<ExistingAnnotation>,
    identifier_range: TextRange,
    kind: TargetKind,
    line_prefix: String,
    trailing_width: usize,
}
impl AnnotationTarget {
    pub fn new(kind: TargetKind, identifier_range: TextRange) -> Self {
        Self {
            existing: None,
            identifier_range,
            kind,
            line_prefix: String::new(),
            trailing_width: 0,
        }
    }

    /// Locate the annotation (if any) directly following the identifier at
    /// `identifier_range` in `source`, and the layout around it.
    ///
    /// ```
    /// use graphql_typecheck_core::loc::TextRange;
    /// use graphql_typecheck_core::reconcile::AnnotationTarget;
    /// use graphql_typecheck_core::reconcile::TargetKind;
    ///
    /// let source = "  api.query<{ a: string }>(gql`{ a }`)";
    /// let target = AnnotationTarget::from_source(source, TargetKind::Method, TextRange::new(6, 11));
    ///
    /// let existing = target.existing_annotation().unwrap();
    /// assert_eq!(existing.text, "<{ a: string }>");
    /// assert_eq!(target.line_prefix(), "  api.query");
    /// assert_eq!(target.trailing_width(), 1);
    /// ```
    pub fn from_source(source: &str, kind: TargetKind, identifier_range: TextRange) -> Self {
        let insertion_point = identifier_range.end;
        if !source.is_char_boundary(insertion_point) {
            return Self::new(kind, identifier_range);
        }
        let after_identifier = &source[insertion_point..];
        let gap = after_identifier.len() - after_identifier.trim_start().len();

        let existing = find_angle_bracket_end(&after_identifier[gap..]).map(|len| {
            let start = insertion_point + gap;
            ExistingAnnotation {
                range: TextRange::new(start, start + len),
                text: source[start..start + len].to_string(),
            }
        });

        let annotation_start = existing.as_ref().map_or(insertion_point, |e| e.range.start);
        let annotation_end = existing.as_ref().map_or(insertion_point, |e| e.range.end);
        let line_start = source[..annotation_start].rfind('\n').map_or(0, |i| i + 1);
        let trailing_width = match source[annotation_end..].chars().next() {
            Some('(') | Some('`') => 1,
            _ => 0,
        };

        Self {
            existing,
            identifier_range,
            kind,
            line_prefix: source[line_start..annotation_start].to_string(),
            trailing_width,
        }
    }

    pub fn with_existing_annotation(mut self, text: impl Into<String>, range: TextRange) -> Self {
        self.existing = Some(ExistingAnnotation {
            range,
            text: text.into(),
        });
        self
    }

    /// Describe the insertion line: `line_prefix` is the text from the start
    /// of the line up to the annotation, and `trailing_width` the width of
    /// the token right after it.
    pub fn with_layout(mut self, line_prefix: impl Into<String>, trailing_width: usize) -> Self {
        self.line_prefix = line_prefix.into();
        self.trailing_width = trailing_width;
        self
    }

    pub fn existing_annotation(&self) -> Option<&ExistingAnnotation> {
        self.existing.as_ref()
    }

    pub fn format_context(&self) -> FormatContext {
        FormatContext::new(&self.line_prefix, self.trailing_width)
    }

    pub fn identifier_range(&self) -> TextRange {
        self.identifier_range
    }

    /// Where a missing annotation is inserted: right after the identifier.
    pub fn insertion_range(&self) -> TextRange {
        TextRange::empty_at(self.identifier_range.end)
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn line_prefix(&self) -> &str {
        self.line_prefix.as_str()
    }

    pub fn trailing_width(&self) -> usize {
        self.trailing_width
    }
}

/// If `text` starts with `<`, the byte length up to and including its
/// matching `>`. Quoted strings, comments and the arrows of function types
/// are skipped over.
fn find_angle_bracket_end(text: &str) -> Option<usize> {
    if !text.starts_with('<') {
        return None;
    }

    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `=>` of a function type.
            b'>' if i > 0 && bytes[i - 1] == b'=' => (),
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            },
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote && bytes[i] != b'\n' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            },
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i += text[i..].find('\n').unwrap_or(text.len() - i);
            },
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += text[i + 2..].find("*/").map_or(text.len() - i, |end| end + 3);
            },
            _ => (),
        }
        i += 1;
    }
    None
}
