use crate::loc::TextRange;

/// The kind of a token in a type-argument annotation such as
/// `<{ a: string }, Record<PropertyKey, never>>`.
///
/// Only the subset of TypeScript type syntax that can appear inside the
/// angle brackets of a call's type arguments is recognized.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AnnotationTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `>`
    AngleBracketClose,
    /// `<`
    AngleBracketOpen,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `?`
    Question,
    /// `;`
    Semicolon,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// An identifier or keyword (`string`, `readonly`, `ReadonlyArray`, ...).
    Identifier(&'src str),

    /// Raw source text of a numeric literal (e.g. `"42"`, `"1.5e3"`).
    NumberLiteral(&'src str),

    /// The cooked value of a single- or double-quoted string literal, with
    /// escapes resolved. `'a'` and `"a"` lex to the same value.
    StringLiteral(String),

    /// End of input.
    Eof,
}
impl AnnotationTokenKind<'_> {
    /// Whether a type may begin with this token.
    pub(crate) fn starts_type(&self) -> bool {
        matches!(
            self,
            Self::CurlyBraceOpen
                | Self::Identifier(_)
                | Self::Minus
                | Self::NumberLiteral(_)
                | Self::ParenOpen
                | Self::SquareBracketOpen
                | Self::StringLiteral(_)
        )
    }
}
impl std::fmt::Display for AnnotationTokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let punctuator = match self {
            Self::Ampersand => "&",
            Self::AngleBracketClose => ">",
            Self::AngleBracketOpen => "<",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::Question => "?",
            Self::Semicolon => ";",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Identifier(name) => return write!(f, "identifier `{name}`"),
            Self::NumberLiteral(raw) => return write!(f, "number `{raw}`"),
            Self::StringLiteral(value) => return write!(f, "string {value:?}"),
            Self::Eof => return write!(f, "end of input"),
        };
        write!(f, "`{punctuator}`")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AnnotationToken<'src> {
    pub kind: AnnotationTokenKind<'src>,
    pub span: TextRange,
}
