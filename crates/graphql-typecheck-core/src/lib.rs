//! Infers the TypeScript type annotation implied by a GraphQL query and keeps
//! the annotation written at a call site in sync with it.
//!
//! The pipeline runs in five stages, each exposed as its own entry point:
//!
//! 1. [`load_schema()`](schema::load_schema) builds a [`Schema`](schema::Schema)
//!    from an SDL file.
//! 2. [`parse_and_validate()`](operation::parse_and_validate) parses a query
//!    and validates it against the schema.
//! 3. [`infer_types()`](inference::infer_types) synthesizes the result and
//!    arguments [`TypeDescriptor`](inference::TypeDescriptor)s.
//! 4. [`render()`](render::render) prints a descriptor as TypeScript.
//! 5. [`reconcile()`](reconcile::reconcile) compares the rendered annotation
//!    with the one found at the call site and produces an edit if needed.
//!
//! [`Engine`](engine::Engine) strings the stages together for a single call
//! site and turns every failure into a [`Diagnostic`](engine::Diagnostic).

pub mod annotation;
pub(crate) mod ast;
pub mod config;
pub mod engine;
pub mod file_reader;
pub mod inference;
pub mod loc;
pub mod operation;
mod panic_guard;
pub mod reconcile;
pub mod render;
pub mod schema;
pub mod types;

#[cfg(test)]
mod test;
