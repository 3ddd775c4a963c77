//! Prints [`TypeDescriptor`]s as TypeScript type text.

mod empty_arguments_policy;

pub use empty_arguments_policy::EmptyArgumentsPolicy;

use crate::inference::InferredTypes;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;

/// Render `descriptor` as a TypeScript type on a single line.
///
/// ```
/// use graphql_typecheck_core::inference::RecordEntry;
/// use graphql_typecheck_core::inference::TypeDescriptor;
/// use graphql_typecheck_core::render::render;
///
/// let greeting = TypeDescriptor::Record(vec![
///     RecordEntry::new("message", TypeDescriptor::Scalar("String".to_string()), false),
/// ]);
/// assert_eq!(render(&greeting), "{ message: string }");
/// ```
pub fn render(descriptor: &TypeDescriptor) -> String {
    let mut out = String::new();
    render_into(&mut out, descriptor);
    out
}

/// Render the full `<Result, Arguments>` annotation for a call site.
///
/// With [`EmptyArgumentsPolicy::Omit`] and an operation that declares no
/// variables, only the result type is written: `<Result>`.
pub fn render_annotation(inferred: &InferredTypes, policy: EmptyArgumentsPolicy) -> String {
    let result_type = render(inferred.result_type());
    match (policy, inferred.arguments_type()) {
        (EmptyArgumentsPolicy::Omit, TypeDescriptor::EmptyRecord) => format!("<{result_type}>"),
        (_, arguments_type) => format!("<{result_type}, {}>", render(arguments_type)),
    }
}

/// The TypeScript type for a GraphQL scalar. Custom scalars are expected to
/// be declared (or imported) under their schema name.
fn scalar_type_name(scalar_name: &str) -> &str {
    match scalar_name {
        "Boolean" => "boolean",
        "Float" | "Int" => "number",
        "ID" | "String" => "string",
        custom => custom,
    }
}

fn render_into(out: &mut String, descriptor: &TypeDescriptor) {
    match descriptor {
        TypeDescriptor::EmptyRecord => out.push_str("Record<PropertyKey, never>"),

        TypeDescriptor::EnumLiteral(name)
            | TypeDescriptor::Reference(name) => out.push_str(name),

        TypeDescriptor::List(element) => {
            out.push_str("ReadonlyArray<");
            render_into(out, element);
            out.push('>');
        },

        TypeDescriptor::Optional(inner) => {
            render_into(out, inner);
            out.push_str(" | null");
        },

        TypeDescriptor::Record(entries) => render_record(out, entries),

        TypeDescriptor::Scalar(name) => out.push_str(scalar_type_name(name)),

        TypeDescriptor::TypeName(name) => {
            out.push('"');
            out.push_str(name);
            out.push('"');
        },

        TypeDescriptor::Union(members) if members.is_empty() => out.push_str("never"),

        TypeDescriptor::Union(members) => {
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(" | ");
                }
                render_into(out, member);
            }
        },
    }
}

fn render_record(out: &mut String, entries: &[RecordEntry]) {
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{ ");
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        out.push_str(entry.name.as_str());
        if entry.optional {
            out.push('?');
        }
        out.push_str(": ");
        render_into(out, &entry.descriptor);
    }
    out.push_str(" }");
}

#[cfg(test)]
mod tests;
