use thiserror::Error;

/// Why annotation text could not be parsed. Offsets are byte offsets into
/// the annotation text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnnotationParseError {
    #[error("invalid escape sequence in string literal at offset {offset}")]
    InvalidEscape {
        offset: usize,
    },

    #[error("expected {expected} but reached the end of the annotation")]
    UnexpectedEof {
        expected: &'static str,
    },

    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter {
        character: char,
        offset: usize,
    },

    #[error("expected {expected} but found {found} at offset {offset}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unterminated comment starting at offset {offset}")]
    UnterminatedComment {
        offset: usize,
    },

    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        offset: usize,
    },
}
