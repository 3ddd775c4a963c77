use crate::loc::TextRange;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    /// The existing annotation already matches the inferred one.
    Unchanged,

    /// Replace `range` in the host source with `text`. For a missing
    /// annotation the range is empty and sits right after the target
    /// identifier.
    Replace {
        kind: ReplaceKind,
        range: TextRange,
        text: String,
    },
}
impl Outcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ReplaceKind {
    MissingAnnotation,
    WrongAnnotation,
}
