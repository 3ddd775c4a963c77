use crate::annotation::annotation_token::AnnotationToken;
use crate::annotation::annotation_token::AnnotationTokenKind;
use crate::annotation::AnnotationParseError;
use crate::loc::TextRange;

type Result<T> = std::result::Result<T, AnnotationParseError>;

/// Splits annotation text into [`AnnotationToken`]s, skipping whitespace and
/// both `//` and `/* */` comments.
///
/// The token stream always ends with exactly one
/// [`AnnotationTokenKind::Eof`] token.
pub(crate) struct AnnotationLexer<'src> {
    offset: usize,
    source: &'src str,
}
impl<'src> AnnotationLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            offset: 0,
            source,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<AnnotationToken<'src>>> {
        let mut tokens = vec![];
        loop {
            let token = self.next_token()?;
            let at_eof = token.kind == AnnotationTokenKind::Eof;
            tokens.push(token);
            if at_eof {
                return Ok(tokens);
            }
        }
    }

    fn next_token(&mut self) -> Result<AnnotationToken<'src>> {
        self.skip_trivia()?;

        let start = self.offset;
        let Some(ch) = self.peek_char() else {
            return Ok(AnnotationToken {
                kind: AnnotationTokenKind::Eof,
                span: TextRange::empty_at(start),
            });
        };

        let kind = match ch {
            '&' => self.punctuator(AnnotationTokenKind::Ampersand),
            '>' => self.punctuator(AnnotationTokenKind::AngleBracketClose),
            '<' => self.punctuator(AnnotationTokenKind::AngleBracketOpen),
            ':' => self.punctuator(AnnotationTokenKind::Colon),
            ',' => self.punctuator(AnnotationTokenKind::Comma),
            '}' => self.punctuator(AnnotationTokenKind::CurlyBraceClose),
            '{' => self.punctuator(AnnotationTokenKind::CurlyBraceOpen),
            '-' => self.punctuator(AnnotationTokenKind::Minus),
            ')' => self.punctuator(AnnotationTokenKind::ParenClose),
            '(' => self.punctuator(AnnotationTokenKind::ParenOpen),
            '|' => self.punctuator(AnnotationTokenKind::Pipe),
            '?' => self.punctuator(AnnotationTokenKind::Question),
            ';' => self.punctuator(AnnotationTokenKind::Semicolon),
            ']' => self.punctuator(AnnotationTokenKind::SquareBracketClose),
            '[' => self.punctuator(AnnotationTokenKind::SquareBracketOpen),
            '.' if self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.lex_number()
            },
            '.' => self.punctuator(AnnotationTokenKind::Dot),
            '"' | '\'' => self.lex_string(ch)?,
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_identifier_start(c) => self.lex_identifier(),
            character => {
                return Err(AnnotationParseError::UnexpectedCharacter {
                    character,
                    offset: start,
                });
            },
        };

        Ok(AnnotationToken {
            kind,
            span: TextRange::new(start, self.offset),
        })
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn lex_identifier(&mut self) -> AnnotationTokenKind<'src> {
        let start = self.offset;
        while self.peek_char().is_some_and(is_identifier_continue) {
            self.bump();
        }
        AnnotationTokenKind::Identifier(&self.source[start..self.offset])
    }

    fn lex_number(&mut self) -> AnnotationTokenKind<'src> {
        let start = self.offset;
        let is_hex = self.source[start..].starts_with("0x")
            || self.source[start..].starts_with("0X");
        let mut prev = None;
        while let Some(ch) = self.peek_char() {
            let exponent_sign = (ch == '+' || ch == '-')
                && !is_hex
                && matches!(prev, Some('e') | Some('E'));
            if !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || exponent_sign) {
                break;
            }
            prev = self.bump();
        }
        AnnotationTokenKind::NumberLiteral(&self.source[start..self.offset])
    }

    fn lex_string(&mut self, quote: char) -> Result<AnnotationTokenKind<'src>> {
        let start = self.offset;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None | Some('\n') | Some('\r') => {
                    return Err(AnnotationParseError::UnterminatedString {
                        offset: start,
                    });
                },
                Some(ch) if ch == quote => {
                    return Ok(AnnotationTokenKind::StringLiteral(value));
                },
                Some('\\') => self.lex_escape(&mut value)?,
                Some(ch) => value.push(ch),
            }
        }
    }

    fn lex_escape(&mut self, value: &mut String) -> Result<()> {
        let escape_offset = self.offset - 1;
        let invalid = || AnnotationParseError::InvalidEscape {
            offset: escape_offset,
        };

        match self.bump().ok_or_else(invalid)? {
            'b' => value.push('\u{8}'),
            'f' => value.push('\u{c}'),
            'n' => value.push('\n'),
            'r' => {
                // Line continuation over `\r\n`.
                if self.peek_char() == Some('\n') {
                    self.bump();
                } else {
                    value.push('\r');
                }
            },
            't' => value.push('\t'),
            'v' => value.push('\u{b}'),
            '0' => value.push('\0'),
            '\n' => (),
            'x' => {
                let code = self.lex_hex_digits(2).ok_or_else(invalid)?;
                value.push(char::from_u32(code).ok_or_else(invalid)?);
            },
            'u' if self.peek_char() == Some('{') => {
                self.bump();
                let digits_start = self.offset;
                while self.peek_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.bump();
                }
                let digits = &self.source[digits_start..self.offset];
                if self.bump() != Some('}') || digits.is_empty() {
                    return Err(invalid());
                }
                let code = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                value.push(char::from_u32(code).ok_or_else(invalid)?);
            },
            'u' => {
                let code = self.lex_hex_digits(4).ok_or_else(invalid)?;
                value.push(char::from_u32(code).ok_or_else(invalid)?);
            },
            other => value.push(other),
        }
        Ok(())
    }

    fn lex_hex_digits(&mut self, count: usize) -> Option<u32> {
        let digits = self.source.get(self.offset..self.offset + count)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        self.offset += count;
        u32::from_str_radix(digits, 16).ok()
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn peek_char_at(&self, n: usize) -> Option<char> {
        self.source[self.offset..].chars().nth(n)
    }

    fn punctuator(&mut self, kind: AnnotationTokenKind<'src>) -> AnnotationTokenKind<'src> {
        self.bump();
        kind
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            let rest = &self.source[self.offset..];
            if rest.starts_with("//") {
                let line_len = rest.find('\n').unwrap_or(rest.len());
                self.offset += line_len;
            } else if rest.starts_with("/*") {
                let Some(end) = rest[2..].find("*/") else {
                    return Err(AnnotationParseError::UnterminatedComment {
                        offset: self.offset,
                    });
                };
                self.offset += end + 4;
            } else if self.peek_char().is_some_and(char::is_whitespace) {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }
}

pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

pub(crate) fn is_identifier_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphanumeric()
}

/// Whether `name` can be written as a bare identifier (as an object member
/// key, for instance) without quotes.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_continue)
}
