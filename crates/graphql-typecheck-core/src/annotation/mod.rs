//! Parsing, comparison and layout of TypeScript type-argument annotations
//! (the `<Result, Arguments>` written after a query call's callee).

mod annotation_formatter;
mod annotation_lexer;
mod annotation_parse_error;
mod annotation_parser;
mod annotation_token;
mod annotation_type;
mod canonical_form;
mod doc;
mod format_context;
mod format_error;
mod format_options;
mod layout_formatter;

pub use annotation_formatter::AnnotationFormatter;
pub use annotation_parse_error::AnnotationParseError;
pub use annotation_parser::parse_annotation;
pub use annotation_type::Annotation;
pub use annotation_type::AnnotationType;
pub use annotation_type::ObjectMember;
pub use annotation_type::TypeOperator;
pub use canonical_form::annotations_equivalent;
pub use canonical_form::canonical_form;
pub use format_context::FormatContext;
pub use format_error::FormatError;
pub use format_options::FormatOptions;
pub use layout_formatter::LayoutFormatter;

#[cfg(test)]
mod tests;
