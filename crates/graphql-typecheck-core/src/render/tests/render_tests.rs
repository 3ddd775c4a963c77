use crate::inference::InferredTypes;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;
use crate::render::render;
use crate::render::render_annotation;
use crate::render::EmptyArgumentsPolicy;

fn scalar(name: &str) -> TypeDescriptor {
    TypeDescriptor::Scalar(name.to_string())
}

fn optional(inner: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::Optional(Box::new(inner))
}

fn list(element: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::List(Box::new(element))
}

#[test]
fn builtin_scalars_map_to_primitives() {
    let rendered = ["Boolean", "Float", "ID", "Int", "String", "DateTime"]
        .map(|name| render(&scalar(name)));
    assert_eq!(rendered, ["boolean", "number", "string", "number", "string", "DateTime"]);
}

#[test]
fn list_nullability_is_not_conflated() {
    // [String!]
    assert_eq!(render(&optional(list(scalar("String")))), "ReadonlyArray<string> | null");
    // [String]!
    assert_eq!(render(&list(optional(scalar("String")))), "ReadonlyArray<string | null>");
}

#[test]
fn records_render_entries_in_order() {
    let record = TypeDescriptor::Record(vec![
        RecordEntry::new("b", scalar("Int"), false),
        RecordEntry::new("a", optional(TypeDescriptor::EnumLiteral("Genre".to_string())), true),
    ]);
    assert_eq!(render(&record), "{ b: number; a?: Genre | null }");
    assert_eq!(render(&TypeDescriptor::Record(vec![])), "{}");
}

#[test]
fn empty_record_admits_no_keys() {
    assert_eq!(render(&TypeDescriptor::EmptyRecord), "Record<PropertyKey, never>");
}

#[test]
fn unions_flatten_under_optional() {
    let union = TypeDescriptor::Union(vec![
        TypeDescriptor::TypeName("Book".to_string()),
        TypeDescriptor::TypeName("Author".to_string()),
    ]);
    assert_eq!(render(&optional(union)), "\"Book\" | \"Author\" | null");
    assert_eq!(render(&TypeDescriptor::Union(vec![])), "never");
}

#[test]
fn references_render_by_name() {
    assert_eq!(
        render(&list(TypeDescriptor::Reference("BookFilter".to_string()))),
        "ReadonlyArray<BookFilter>",
    );
}

mod annotations {
    use super::*;

    fn greeting() -> TypeDescriptor {
        TypeDescriptor::Record(vec![RecordEntry::new("greeting", scalar("String"), false)])
    }

    #[test]
    fn result_and_arguments() {
        let inferred = InferredTypes::new(
            greeting(),
            TypeDescriptor::Record(vec![RecordEntry::new("language", scalar("String"), false)]),
        );
        assert_eq!(
            render_annotation(&inferred, EmptyArgumentsPolicy::Sentinel),
            "<{ greeting: string }, { language: string }>",
        );
        // Variables are never omitted.
        assert_eq!(
            render_annotation(&inferred, EmptyArgumentsPolicy::Omit),
            "<{ greeting: string }, { language: string }>",
        );
    }

    #[test]
    fn empty_arguments_policy() {
        let inferred = InferredTypes::new(greeting(), TypeDescriptor::EmptyRecord);
        assert_eq!(
            render_annotation(&inferred, EmptyArgumentsPolicy::Sentinel),
            "<{ greeting: string }, Record<PropertyKey, never>>",
        );
        assert_eq!(
            render_annotation(&inferred, EmptyArgumentsPolicy::Omit),
            "<{ greeting: string }>",
        );
    }

    #[test]
    fn policy_deserializes_from_lowercase_names() {
        let policy: EmptyArgumentsPolicy = serde_json::from_str("\"omit\"").expect("valid policy");
        assert_eq!(policy, EmptyArgumentsPolicy::Omit);
        assert_eq!(EmptyArgumentsPolicy::default(), EmptyArgumentsPolicy::Sentinel);
    }
}
