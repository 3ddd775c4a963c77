use crate::annotation::annotation_lexer::AnnotationLexer;
use crate::annotation::annotation_token::AnnotationToken;
use crate::annotation::annotation_token::AnnotationTokenKind;
use crate::annotation::Annotation;
use crate::annotation::AnnotationParseError;
use crate::annotation::AnnotationType;
use crate::annotation::ObjectMember;
use crate::annotation::TypeOperator;

type Result<T> = std::result::Result<T, AnnotationParseError>;

/// Parse a complete type-argument list such as `<{ a: string }, {}>`.
///
/// Whitespace and comments anywhere in the text are ignored, as are trailing
/// separators, leading `|`/`&` and redundant parentheses.
pub fn parse_annotation(text: &str) -> Result<Annotation> {
    let tokens = AnnotationLexer::new(text).tokenize()?;
    AnnotationParser { index: 0, tokens }.parse_annotation()
}

/// Recursive-descent parser over the token list produced by
/// [`AnnotationLexer`]. The list always ends with an `Eof` token and the
/// cursor never moves past it.
struct AnnotationParser<'src> {
    index: usize,
    tokens: Vec<AnnotationToken<'src>>,
}
impl<'src> AnnotationParser<'src> {
    fn parse_annotation(mut self) -> Result<Annotation> {
        self.expect(AnnotationTokenKind::AngleBracketOpen, "`<`")?;
        let arguments = self.parse_type_list(
            AnnotationTokenKind::AngleBracketClose,
            "`,` or `>`",
        )?;
        if *self.peek() != AnnotationTokenKind::Eof {
            return Err(self.unexpected("end of annotation"));
        }
        Ok(Annotation { arguments })
    }

    fn bump(&mut self) -> AnnotationToken<'src> {
        let token = self.tokens[self.index].clone();
        if token.kind != AnnotationTokenKind::Eof {
            self.index += 1;
        }
        token
    }

    fn eat(&mut self, kind: &AnnotationTokenKind<'src>) -> bool {
        if self.peek() == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(
        &mut self,
        kind: AnnotationTokenKind<'src>,
        expected: &'static str,
    ) -> Result<()> {
        if self.eat(&kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn parse_intersection(&mut self) -> Result<AnnotationType> {
        self.eat(&AnnotationTokenKind::Ampersand);
        let first = self.parse_operator_type()?;
        if *self.peek() != AnnotationTokenKind::Ampersand {
            return Ok(first);
        }

        let mut members = vec![];
        push_flattened(&mut members, first, |t| match t {
            AnnotationType::Intersection(inner) => Ok(inner),
            other => Err(other),
        });
        while self.eat(&AnnotationTokenKind::Ampersand) {
            let member = self.parse_operator_type()?;
            push_flattened(&mut members, member, |t| match t {
                AnnotationType::Intersection(inner) => Ok(inner),
                other => Err(other),
            });
        }
        Ok(AnnotationType::Intersection(members))
    }

    fn parse_member(&mut self) -> Result<ObjectMember> {
        let mut readonly = false;
        if *self.peek() == AnnotationTokenKind::Identifier("readonly")
            && matches!(
                self.peek_at(1),
                AnnotationTokenKind::Identifier(_)
                    | AnnotationTokenKind::NumberLiteral(_)
                    | AnnotationTokenKind::StringLiteral(_)
            )
        {
            self.bump();
            readonly = true;
        }

        let name = match &self.peek().clone() {
            AnnotationTokenKind::Identifier(name)
                | AnnotationTokenKind::NumberLiteral(name) => name.to_string(),
            AnnotationTokenKind::StringLiteral(name) => name.clone(),
            _ => return Err(self.unexpected("a member name")),
        };
        self.bump();

        let optional = self.eat(&AnnotationTokenKind::Question);
        self.expect(AnnotationTokenKind::Colon, "`:`")?;
        let member_type = self.parse_type()?;

        Ok(ObjectMember {
            member_type,
            name,
            optional,
            readonly,
        })
    }

    fn parse_object(&mut self) -> Result<AnnotationType> {
        let mut members = vec![];
        loop {
            if self.eat(&AnnotationTokenKind::CurlyBraceClose) {
                return Ok(AnnotationType::Object(members));
            }
            members.push(self.parse_member()?);
            if !self.eat(&AnnotationTokenKind::Semicolon) {
                self.eat(&AnnotationTokenKind::Comma);
            }
        }
    }

    fn parse_operator_type(&mut self) -> Result<AnnotationType> {
        if let AnnotationTokenKind::Identifier(keyword) = self.peek() {
            if let Some(operator) = TypeOperator::from_keyword(keyword) {
                if self.peek_at(1).starts_type() {
                    self.bump();
                    let operand = self.parse_operator_type()?;
                    return Ok(AnnotationType::Operator {
                        operator,
                        operand: Box::new(operand),
                    });
                }
            }
        }
        self.parse_postfix_type()
    }

    fn parse_postfix_type(&mut self) -> Result<AnnotationType> {
        let mut parsed = self.parse_primary_type()?;
        while self.eat(&AnnotationTokenKind::SquareBracketOpen) {
            if self.eat(&AnnotationTokenKind::SquareBracketClose) {
                parsed = AnnotationType::Array(Box::new(parsed));
                continue;
            }
            let index = self.parse_type()?;
            self.expect(AnnotationTokenKind::SquareBracketClose, "`]`")?;
            parsed = AnnotationType::IndexedAccess {
                object: Box::new(parsed),
                index: Box::new(index),
            };
        }
        Ok(parsed)
    }

    fn parse_primary_type(&mut self) -> Result<AnnotationType> {
        let kind = self.peek().clone();
        match kind {
            AnnotationTokenKind::ParenOpen => {
                self.bump();
                let inner = self.parse_type()?;
                self.expect(AnnotationTokenKind::ParenClose, "`)`")?;
                Ok(inner)
            },

            AnnotationTokenKind::CurlyBraceOpen => {
                self.bump();
                self.parse_object()
            },

            AnnotationTokenKind::SquareBracketOpen => {
                self.bump();
                if self.eat(&AnnotationTokenKind::SquareBracketClose) {
                    return Ok(AnnotationType::Tuple(vec![]));
                }
                let elements = self.parse_type_list(
                    AnnotationTokenKind::SquareBracketClose,
                    "`,` or `]`",
                )?;
                Ok(AnnotationType::Tuple(elements))
            },

            AnnotationTokenKind::StringLiteral(value) => {
                self.bump();
                Ok(AnnotationType::StringLiteral(value))
            },

            AnnotationTokenKind::NumberLiteral(raw) => {
                self.bump();
                Ok(AnnotationType::NumberLiteral(raw.to_string()))
            },

            AnnotationTokenKind::Minus => {
                self.bump();
                match self.peek().clone() {
                    AnnotationTokenKind::NumberLiteral(raw) => {
                        self.bump();
                        Ok(AnnotationType::NumberLiteral(format!("-{raw}")))
                    },
                    _ => Err(self.unexpected("a number")),
                }
            },

            AnnotationTokenKind::Identifier(first) => {
                self.bump();
                let mut name = first.to_string();
                while self.eat(&AnnotationTokenKind::Dot) {
                    match self.peek().clone() {
                        AnnotationTokenKind::Identifier(segment) => {
                            self.bump();
                            name.push('.');
                            name.push_str(segment);
                        },
                        _ => return Err(self.unexpected("an identifier")),
                    }
                }

                let arguments = if self.eat(&AnnotationTokenKind::AngleBracketOpen) {
                    self.parse_type_list(
                        AnnotationTokenKind::AngleBracketClose,
                        "`,` or `>`",
                    )?
                } else {
                    vec![]
                };
                Ok(AnnotationType::Reference { name, arguments })
            },

            _ => Err(self.unexpected("a type")),
        }
    }

    fn parse_type(&mut self) -> Result<AnnotationType> {
        self.eat(&AnnotationTokenKind::Pipe);
        let first = self.parse_intersection()?;
        if *self.peek() != AnnotationTokenKind::Pipe {
            return Ok(first);
        }

        let mut members = vec![];
        push_flattened(&mut members, first, |t| match t {
            AnnotationType::Union(inner) => Ok(inner),
            other => Err(other),
        });
        while self.eat(&AnnotationTokenKind::Pipe) {
            let member = self.parse_intersection()?;
            push_flattened(&mut members, member, |t| match t {
                AnnotationType::Union(inner) => Ok(inner),
                other => Err(other),
            });
        }
        Ok(AnnotationType::Union(members))
    }

    /// One or more comma-separated types followed by `close`. A trailing
    /// comma is allowed.
    fn parse_type_list(
        &mut self,
        close: AnnotationTokenKind<'src>,
        expected: &'static str,
    ) -> Result<Vec<AnnotationType>> {
        let mut types = vec![self.parse_type()?];
        loop {
            if self.eat(&close) {
                return Ok(types);
            }
            self.expect(AnnotationTokenKind::Comma, expected)?;
            if self.eat(&close) {
                return Ok(types);
            }
            types.push(self.parse_type()?);
        }
    }

    fn peek(&self) -> &AnnotationTokenKind<'src> {
        &self.tokens[self.index].kind
    }

    fn peek_at(&self, n: usize) -> &AnnotationTokenKind<'src> {
        let index = (self.index + n).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    fn unexpected(&self, expected: &'static str) -> AnnotationParseError {
        let token = &self.tokens[self.index];
        match token.kind {
            AnnotationTokenKind::Eof => AnnotationParseError::UnexpectedEof { expected },
            _ => AnnotationParseError::UnexpectedToken {
                expected,
                found: token.kind.to_string(),
                offset: token.span.start,
            },
        }
    }
}

/// Push `member` onto `members`, splicing in its own members instead when
/// `unwrap` recognizes it as the same kind of compound type.
fn push_flattened(
    members: &mut Vec<AnnotationType>,
    member: AnnotationType,
    unwrap: impl Fn(AnnotationType) -> std::result::Result<Vec<AnnotationType>, AnnotationType>,
) {
    match unwrap(member) {
        Ok(inner) => members.extend(inner),
        Err(single) => members.push(single),
    }
}
