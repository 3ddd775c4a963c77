//! Decides whether the annotation at a call site matches the inferred types
//! and, when it does not, produces the replacement edit.

mod annotation_target;
mod outcome;
mod reconcile_error;
mod target_kind;

pub use annotation_target::AnnotationTarget;
pub use annotation_target::ExistingAnnotation;
pub use outcome::Outcome;
pub use outcome::ReplaceKind;
pub use reconcile_error::ReconcileError;
pub use target_kind::TargetKind;

use crate::annotation::canonical_form;
use crate::annotation::parse_annotation;
use crate::annotation::AnnotationFormatter;
use crate::inference::InferredTypes;
use crate::render::render_annotation;
use crate::render::EmptyArgumentsPolicy;

type Result<T> = std::result::Result<T, ReconcileError>;

/// Compare the annotation currently at `target` with the one implied by
/// `inferred`.
///
/// The comparison ignores layout, comments, separators, quote style and
/// union member order. A mismatch (or a missing annotation) yields an
/// [`Outcome::Replace`] whose text is laid out by `formatter` for the
/// target's insertion line.
pub fn reconcile(
    target: &AnnotationTarget,
    inferred: &InferredTypes,
    policy: EmptyArgumentsPolicy,
    formatter: &dyn AnnotationFormatter,
) -> Result<Outcome> {
    let rendered = render_annotation(inferred, policy);
    let expected = parse_annotation(&rendered).map_err(|source| {
        ReconcileError::RenderedAnnotationInvalid {
            annotation: rendered.clone(),
            source,
        }
    })?;
    let expected_canonical = canonical_form(&expected);

    let (kind, range) = match target.existing_annotation() {
        None => (ReplaceKind::MissingAnnotation, target.insertion_range()),
        Some(existing) => {
            let matches = parse_annotation(&existing.text)
                .is_ok_and(|parsed| canonical_form(&parsed) == expected_canonical);
            if matches {
                log::trace!("annotation at {:?} is up to date", existing.range);
                return Ok(Outcome::Unchanged);
            }
            (ReplaceKind::WrongAnnotation, existing.range)
        },
    };

    let text = formatter.format(&rendered, &target.format_context())?;
    let formatted_matches = parse_annotation(&text)
        .is_ok_and(|parsed| canonical_form(&parsed) == expected_canonical);
    if !formatted_matches {
        return Err(ReconcileError::FormatterChangedAnnotation {
            expected: rendered,
            formatted: text,
        });
    }

    log::debug!("{kind:?} at {range:?} for {} target", target.kind());
    Ok(Outcome::Replace { kind, range, text })
}

#[cfg(test)]
mod tests;
