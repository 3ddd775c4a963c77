use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Variable`](crate::operation::Variable).
///
/// GraphQL types are nullable unless wrapped in `!`, so nullability is stored
/// as a flag on each layer rather than as a separate wrapper layer: `[Int!]`
/// is a nullable list of non-null `Int`s, and `[Int]!` a non-null list of
/// nullable `Int`s.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::query::Type, nullable: bool) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::query::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_string(),
                }),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    pub(crate) fn non_null_named(type_name: &str) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: false,
            type_name: type_name.to_string(),
        })
    }

    pub(crate) fn nullable_named(type_name: &str) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_name: type_name.to_string(),
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_annotation, .. }) =>
                inner_type_annotation.innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Name of the type at the bottom of any list wrappers.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The same annotation with the outermost layer made nullable.
    pub fn to_nullable(&self) -> Self {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list) => list.nullable = true,
            Self::Named(named) => named.nullable = true,
        }
        annot
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nullable = match self {
            Self::List(list) => {
                write!(f, "[{}]", list.inner_type_annotation)?;
                list.nullable
            },
            Self::Named(named) => {
                f.write_str(named.type_name.as_str())?;
                named.nullable
            },
        };
        if !nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
