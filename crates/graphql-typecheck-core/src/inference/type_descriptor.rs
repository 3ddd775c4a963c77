use crate::types::TypeAnnotation;

/// A structural type synthesized from a query: the shape of its result or of
/// its variables.
///
/// Descriptors carry no positions and no formatting. Two descriptors are
/// equal exactly when they describe the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TypeDescriptor {
    /// The arguments type of an operation that declares no variables. Admits
    /// no keys at all, unlike an empty [`Record`](Self::Record).
    EmptyRecord,
    /// A value of the named enum type.
    EnumLiteral(String),
    List(Box<TypeDescriptor>),
    /// The inner type, or `null`.
    Optional(Box<TypeDescriptor>),
    Record(Vec<RecordEntry>),
    /// Refers to an input object type by name. Only produced when expanding
    /// an input object that (directly or indirectly) contains itself.
    Reference(String),
    /// A value of the named scalar type.
    Scalar(String),
    /// The value of `__typename` on the named object type.
    TypeName(String),
    /// Exactly one of the member types.
    Union(Vec<TypeDescriptor>),
}
impl TypeDescriptor {
    /// Wraps `named` in the [`List`](Self::List) and
    /// [`Optional`](Self::Optional) layers described by `annotation`, where
    /// `named` is the descriptor for the annotation's innermost named type.
    ///
    /// The nullability of each list layer and of the innermost type are
    /// tracked independently: `[Int!]` becomes `Optional(List(Scalar))` and
    /// `[Int]!` becomes `List(Optional(Scalar))`.
    pub(crate) fn from_type_annotation(annotation: &TypeAnnotation, named: TypeDescriptor) -> Self {
        let descriptor = match annotation {
            TypeAnnotation::List(list_annot) => Self::List(Box::new(
                Self::from_type_annotation(list_annot.inner_type_annotation(), named),
            )),
            TypeAnnotation::Named(_) => named,
        };

        if annotation.nullable() {
            Self::Optional(Box::new(descriptor))
        } else {
            descriptor
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Build a union from `members`, dropping duplicates. A single remaining
    /// member is returned as-is.
    pub(crate) fn union_of(members: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut unique: Vec<TypeDescriptor> = vec![];
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }

        if unique.len() == 1 {
            unique.remove(0)
        } else {
            Self::Union(unique)
        }
    }
}

/// One named entry of a [`TypeDescriptor::Record`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RecordEntry {
    pub descriptor: TypeDescriptor,
    pub name: String,
    /// Indicates if the key may be absent (rendered as `name?: ...`).
    pub optional: bool,
}
impl RecordEntry {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor, optional: bool) -> Self {
        Self {
            descriptor,
            name: name.into(),
            optional,
        }
    }
}
