use crate::annotation::annotation_lexer::is_identifier;
use crate::annotation::parse_annotation;
use crate::annotation::Annotation;
use crate::annotation::AnnotationType;
use crate::annotation::ObjectMember;

/// Serialize `annotation` into a whitespace- and comment-free string in
/// which two annotations are equal exactly when they denote the same type
/// arguments.
///
/// Union and intersection members are sorted and deduplicated. Object
/// members keep their written order. String literals are always printed
/// with double quotes.
pub fn canonical_form(annotation: &Annotation) -> String {
    let arguments = annotation
        .arguments
        .iter()
        .map(canonical_type)
        .collect::<Vec<_>>();
    format!("<{}>", arguments.join(","))
}

/// Whether two annotation texts denote the same type arguments. Text that
/// fails to parse is never equivalent to anything.
///
/// ```
/// use graphql_typecheck_core::annotation::annotations_equivalent;
///
/// assert!(annotations_equivalent(
///     "<{ a: 'x' | null }, {}>",
///     "<{\n  a: null | \"x\",\n},\n{}>",
/// ));
/// ```
pub fn annotations_equivalent(left: &str, right: &str) -> bool {
    match (parse_annotation(left), parse_annotation(right)) {
        (Ok(left), Ok(right)) => canonical_form(&left) == canonical_form(&right),
        _ => false,
    }
}

fn canonical_type(annotation_type: &AnnotationType) -> String {
    match annotation_type {
        AnnotationType::Array(element) => format!("{}[]", canonical_postfix_operand(element)),

        AnnotationType::IndexedAccess { object, index } => {
            format!("{}[{}]", canonical_postfix_operand(object), canonical_type(index))
        },

        AnnotationType::Intersection(members) => canonical_members(members, "&"),

        AnnotationType::NumberLiteral(raw) => raw.clone(),

        AnnotationType::Object(members) => {
            let members = members.iter().map(canonical_member).collect::<String>();
            format!("{{{members}}}")
        },

        AnnotationType::Operator { operator, operand } => {
            format!("{} {}", operator.as_str(), canonical_operand(operand))
        },

        AnnotationType::Reference { name, arguments } if arguments.is_empty() => {
            name.clone()
        },

        AnnotationType::Reference { name, arguments } => {
            let arguments = arguments.iter().map(canonical_type).collect::<Vec<_>>();
            format!("{name}<{}>", arguments.join(","))
        },

        AnnotationType::StringLiteral(value) => quoted(value),

        AnnotationType::Tuple(elements) => {
            let elements = elements.iter().map(canonical_type).collect::<Vec<_>>();
            format!("[{}]", elements.join(","))
        },

        AnnotationType::Union(members) => canonical_members(members, "|"),
    }
}

fn canonical_member(member: &ObjectMember) -> String {
    let key = if is_identifier(&member.name) {
        member.name.clone()
    } else {
        quoted(&member.name)
    };
    format!(
        "{}{key}{}:{};",
        if member.readonly { "readonly " } else { "" },
        if member.optional { "?" } else { "" },
        canonical_type(&member.member_type),
    )
}

fn canonical_members(members: &[AnnotationType], separator: &str) -> String {
    let mut members = members
        .iter()
        .map(|member| match member {
            // Only a union can sit inside an intersection unflattened.
            AnnotationType::Union(_) => format!("({})", canonical_type(member)),
            _ => canonical_type(member),
        })
        .collect::<Vec<_>>();
    members.sort();
    members.dedup();
    members.join(separator)
}

fn canonical_operand(operand: &AnnotationType) -> String {
    if operand.is_compound() {
        format!("({})", canonical_type(operand))
    } else {
        canonical_type(operand)
    }
}

fn canonical_postfix_operand(operand: &AnnotationType) -> String {
    if operand.is_compound() || matches!(operand, AnnotationType::Operator { .. }) {
        format!("({})", canonical_type(operand))
    } else {
        canonical_type(operand)
    }
}

fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
