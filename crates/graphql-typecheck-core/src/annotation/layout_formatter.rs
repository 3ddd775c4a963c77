use crate::annotation::annotation_lexer::is_identifier;
use crate::annotation::doc::align;
use crate::annotation::doc::concat;
use crate::annotation::doc::group;
use crate::annotation::doc::if_break;
use crate::annotation::doc::indent;
use crate::annotation::doc::join;
use crate::annotation::doc::text;
use crate::annotation::doc::Doc;
use crate::annotation::doc::DocPrinter;
use crate::annotation::parse_annotation;
use crate::annotation::Annotation;
use crate::annotation::AnnotationFormatter;
use crate::annotation::AnnotationType;
use crate::annotation::FormatContext;
use crate::annotation::FormatError;
use crate::annotation::FormatOptions;
use crate::annotation::ObjectMember;

/// The built-in [`AnnotationFormatter`]. Lays annotations out the way
/// Prettier lays out TypeScript type arguments:
///
/// * type-argument lists break one argument per line, unless there is a
///   single object-like argument, which hugs the brackets
///   (`ReadonlyArray<{`);
/// * object types break one member per line, each followed by `;`;
/// * unions break one member per line with a leading `| `, except for an
///   object type unioned with `null`, which stays on the object's line.
#[derive(Clone, Debug, Default)]
pub struct LayoutFormatter {
    options: FormatOptions,
}
impl LayoutFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub(crate) fn format_annotation(
        &self,
        annotation: &Annotation,
        context: &FormatContext,
    ) -> String {
        let printer = DocPrinter {
            indentation: &context.indentation,
            print_width: self.options.print_width,
            tab_width: self.options.tab_width,
            trailing_width: context.trailing_width,
        };
        printer.print(&type_arguments_doc(&annotation.arguments), context.start_column)
    }
}
impl AnnotationFormatter for LayoutFormatter {
    fn format(
        &self,
        annotation: &str,
        context: &FormatContext,
    ) -> Result<String, FormatError> {
        let annotation = parse_annotation(annotation)?;
        Ok(self.format_annotation(&annotation, context))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Position {
    ObjectMember,
    Other,
    TypeArgument,
}

fn type_arguments_doc(arguments: &[AnnotationType]) -> Doc {
    match arguments {
        [only] if should_hug(only) => concat(vec![
            text("<"),
            type_doc(only, Position::TypeArgument),
            text(">"),
        ]),
        _ => {
            let arguments = arguments
                .iter()
                .map(|argument| type_doc(argument, Position::TypeArgument))
                .collect();
            group(concat(vec![
                text("<"),
                indent(concat(vec![
                    Doc::SoftLine,
                    join(concat(vec![text(","), Doc::Line]), arguments),
                ])),
                Doc::SoftLine,
                text(">"),
            ]))
        },
    }
}

fn type_doc(annotation_type: &AnnotationType, position: Position) -> Doc {
    match annotation_type {
        AnnotationType::Array(element) => {
            concat(vec![postfix_operand_doc(element), text("[]")])
        },

        AnnotationType::IndexedAccess { object, index } => concat(vec![
            postfix_operand_doc(object),
            text("["),
            type_doc(index, Position::Other),
            text("]"),
        ]),

        AnnotationType::Intersection(members) => {
            let members = members
                .iter()
                .map(|member| match member {
                    AnnotationType::Union(_) => parenthesized(type_doc(member, Position::Other)),
                    _ => type_doc(member, Position::Other),
                })
                .collect();
            join(text(" & "), members)
        },

        AnnotationType::NumberLiteral(raw) => text(raw.as_str()),

        AnnotationType::Object(members) if members.is_empty() => text("{}"),

        AnnotationType::Object(members) => {
            let members = members.iter().map(member_doc).collect();
            group(concat(vec![
                text("{"),
                indent(concat(vec![
                    Doc::Line,
                    join(concat(vec![text(";"), Doc::Line]), members),
                ])),
                if_break(text(";"), text("")),
                Doc::Line,
                text("}"),
            ]))
        },

        AnnotationType::Operator { operator, operand } => {
            let operand = if operand.is_compound() {
                parenthesized(type_doc(operand, Position::Other))
            } else {
                type_doc(operand, Position::Other)
            };
            concat(vec![text(operator.as_str()), text(" "), operand])
        },

        AnnotationType::Reference { name, arguments } if arguments.is_empty() => {
            text(name.as_str())
        },

        AnnotationType::Reference { name, arguments } => {
            concat(vec![text(name.as_str()), type_arguments_doc(arguments)])
        },

        AnnotationType::StringLiteral(value) => text(string_literal(value)),

        AnnotationType::Tuple(elements) if elements.is_empty() => text("[]"),

        AnnotationType::Tuple(elements) => {
            let elements = elements
                .iter()
                .map(|element| type_doc(element, Position::Other))
                .collect();
            group(concat(vec![
                text("["),
                indent(concat(vec![
                    Doc::SoftLine,
                    join(concat(vec![text(","), Doc::Line]), elements),
                ])),
                Doc::SoftLine,
                text("]"),
            ]))
        },

        AnnotationType::Union(members) => union_doc(members, position),
    }
}

fn member_doc(member: &ObjectMember) -> Doc {
    let key = if is_identifier(&member.name) {
        member.name.clone()
    } else {
        string_literal(&member.name)
    };
    concat(vec![
        text(if member.readonly { "readonly " } else { "" }),
        text(key),
        text(if member.optional { "?: " } else { ": " }),
        type_doc(&member.member_type, Position::ObjectMember),
    ])
}

fn union_doc(members: &[AnnotationType], position: Position) -> Doc {
    let printed = members
        .iter()
        .map(|member| type_doc(member, Position::Other))
        .collect::<Vec<_>>();

    if is_object_or_nullish(members) {
        return join(text(" | "), printed);
    }
    // Broken members line up after their `| `.
    let printed = printed.into_iter().map(|member| align(2, member)).collect();

    let should_indent = position != Position::TypeArgument;
    let code = concat(vec![
        if_break(
            concat(vec![
                if should_indent { Doc::Line } else { text("") },
                text("| "),
            ]),
            text(""),
        ),
        join(concat(vec![Doc::Line, text("| ")]), printed),
    ]);
    group(if should_indent { indent(code) } else { code })
}

/// An object type unioned only with `null`/`undefined`/`void` keeps the
/// object's braces on the surrounding lines.
fn is_object_or_nullish(members: &[AnnotationType]) -> bool {
    let objects = members
        .iter()
        .filter(|member| matches!(member, AnnotationType::Object(_)))
        .count();
    let nullish = members.iter().filter(|member| member.is_nullish_keyword()).count();
    objects == 1 && objects + nullish == members.len()
}

/// Whether a lone type argument is printed directly between the angle
/// brackets, without its own line breaks.
fn should_hug(annotation_type: &AnnotationType) -> bool {
    match annotation_type {
        AnnotationType::Object(_) | AnnotationType::Reference { .. } => true,
        AnnotationType::Union(members) => is_object_or_nullish(members),
        _ => false,
    }
}

fn parenthesized(doc: Doc) -> Doc {
    concat(vec![text("("), doc, text(")")])
}

fn postfix_operand_doc(operand: &AnnotationType) -> Doc {
    let doc = type_doc(operand, Position::Other);
    if operand.is_compound() || matches!(operand, AnnotationType::Operator { .. }) {
        parenthesized(doc)
    } else {
        doc
    }
}

/// Double quotes unless the value holds more double quotes than single
/// quotes.
fn string_literal(value: &str) -> String {
    let doubles = value.matches('"').count();
    let singles = value.matches('\'').count();
    if doubles <= singles {
        return serde_json::Value::String(value.to_string()).to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
