/// A parsed type-argument list: the `<A, B>` written after a call's callee.
///
/// The tree carries no positions, comments or layout. Redundant parentheses
/// are dropped while parsing and nested unions (or intersections) are
/// flattened into their parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub arguments: Vec<AnnotationType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationType {
    /// `T[]`
    Array(Box<AnnotationType>),

    /// `T["key"]`
    IndexedAccess {
        object: Box<AnnotationType>,
        index: Box<AnnotationType>,
    },

    /// `A & B`
    Intersection(Vec<AnnotationType>),

    /// Raw text of a numeric literal type, including a leading `-`.
    NumberLiteral(String),

    /// `{ a: T; b?: U }`
    Object(Vec<ObjectMember>),

    /// `keyof T`, `readonly T[]`, `unique symbol`
    Operator {
        operator: TypeOperator,
        operand: Box<AnnotationType>,
    },

    /// A (possibly qualified, possibly generic) type name: `string`,
    /// `ReadonlyArray<T>`, `Api.Id`.
    Reference {
        name: String,
        arguments: Vec<AnnotationType>,
    },

    /// The cooked value of a string literal type.
    StringLiteral(String),

    /// `[A, B]`
    Tuple(Vec<AnnotationType>),

    /// `A | B`
    Union(Vec<AnnotationType>),
}
impl AnnotationType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            arguments: vec![],
        }
    }

    /// Union or intersection members need parentheses when they appear as
    /// the operand of a postfix or prefix type operator.
    pub(crate) fn is_compound(&self) -> bool {
        matches!(self, Self::Intersection(_) | Self::Union(_))
    }

    /// `null`, `undefined` and `void` (the members that may accompany an
    /// object type in a union without preventing it from hugging its
    /// brackets).
    pub(crate) fn is_nullish_keyword(&self) -> bool {
        match self {
            Self::Reference { name, arguments } => {
                arguments.is_empty()
                    && matches!(name.as_str(), "null" | "undefined" | "void")
            },
            _ => false,
        }
    }
}

/// One member of an object type literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectMember {
    pub member_type: AnnotationType,
    /// The key as written, without quotes.
    pub name: String,
    pub optional: bool,
    pub readonly: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    Keyof,
    Readonly,
    Unique,
}
impl TypeOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyof => "keyof",
            Self::Readonly => "readonly",
            Self::Unique => "unique",
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "keyof" => Some(Self::Keyof),
            "readonly" => Some(Self::Readonly),
            "unique" => Some(Self::Unique),
            _ => None,
        }
    }
}
