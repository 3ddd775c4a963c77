use crate::annotation::annotations_equivalent;
use crate::annotation::AnnotationFormatter;
use crate::annotation::FormatContext;
use crate::annotation::FormatOptions;
use crate::annotation::LayoutFormatter;
use crate::inference::InferredTypes;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;
use crate::render::render_annotation;
use crate::render::EmptyArgumentsPolicy;
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        prop::sample::select(vec!["Boolean", "DateTime", "ID", "Int", "String"])
            .prop_map(|name| TypeDescriptor::Scalar(name.to_string())),
        Just(TypeDescriptor::EnumLiteral("Genre".to_string())),
        prop::sample::select(vec!["Author", "Book"])
            .prop_map(|name| TypeDescriptor::TypeName(name.to_string())),
    ]
}

fn arb_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            inner.clone().prop_map(|d| TypeDescriptor::List(Box::new(d))),
            inner.clone().prop_map(|d| TypeDescriptor::Optional(Box::new(d))),
            prop::collection::vec(("[a-z][a-zA-Z]{0,7}", inner.clone(), any::<bool>()), 0..5)
                .prop_map(|entries| {
                    TypeDescriptor::Record(
                        entries
                            .into_iter()
                            .map(|(name, descriptor, optional)| {
                                RecordEntry::new(name, descriptor, optional)
                            })
                            .collect(),
                    )
                }),
            prop::collection::vec(inner, 2..4).prop_map(TypeDescriptor::Union),
        ]
    })
}

fn arb_annotation() -> impl Strategy<Value = String> {
    (arb_descriptor(), prop_oneof![Just(TypeDescriptor::EmptyRecord), arb_descriptor()])
        .prop_map(|(result, arguments)| {
            render_annotation(&InferredTypes::new(result, arguments), EmptyArgumentsPolicy::Sentinel)
        })
}

/// Replaces every space in `text` with one of a few layout variations
/// (nothing, line breaks, comments).
fn relayout(text: &str, separators: &[&str]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut separators = separators.iter().cycle();
    for ch in text.chars() {
        match (ch, separators.next()) {
            (' ', Some(separator)) => out.push_str(separator),
            _ => out.push(ch),
        }
    }
    out
}

proptest! {
    #[test]
    fn layout_and_comments_do_not_affect_equivalence(
        annotation in arb_annotation(),
        separators in prop::collection::vec(
            prop::sample::select(vec!["", " ", "\n", "\n    ", "\t", " /* c */ ", " // c\n"]),
            1..16,
        ),
    ) {
        let relaid = relayout(&annotation, &separators);
        prop_assert!(annotations_equivalent(&annotation, &relaid), "{annotation}\n{relaid}");
    }

    #[test]
    fn formatting_preserves_meaning_and_is_idempotent(
        annotation in arb_annotation(),
        print_width in 20usize..120,
        indentation in prop::sample::select(vec!["", "  ", "    "]),
    ) {
        let formatter = LayoutFormatter::new(FormatOptions { print_width, tab_width: 2 });
        let context = FormatContext::new(&format!("{indentation}client.query"), 1);

        let once = formatter.format(&annotation, &context).unwrap();
        prop_assert!(annotations_equivalent(&annotation, &once), "{annotation}\n{once}");

        let twice = formatter.format(&once, &context).unwrap();
        prop_assert_eq!(once, twice);
    }
}
