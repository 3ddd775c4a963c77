use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_annotation: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    /// The annotation of this list's elements. Its nullability is independent
    /// of the list's own nullability.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
