//! Checks a single annotated query call end to end and reports at most one
//! [`Diagnostic`] for it.

mod call_site;
mod diagnostic;
#[allow(clippy::module_inception)]
mod engine;
mod engine_error;

pub use call_site::CallSite;
pub use call_site::QueryTemplate;
pub use diagnostic::Diagnostic;
pub use diagnostic::DiagnosticKind;
pub use diagnostic::TextEdit;
pub use engine::Engine;

#[cfg(test)]
mod tests;
