use crate::loc;
use crate::operation::OperationKind;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A single schema-construction rule violation. A [`SchemaBuilder`]
/// collects every violation it finds and reports them together via
/// [`SchemaBuildError::InvalidSchema`].
///
/// [`SchemaBuilder`]: crate::schema::SchemaBuilder
/// [`SchemaBuildError::InvalidSchema`]: crate::schema::SchemaBuildError::InvalidSchema
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error("The `@{directive_name}` directive is defined more than once ({def_location})")]
    DuplicateDirectiveDefinition {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once ({def_location})")]
    DuplicateEnumValueDefinition {
        def_location: loc::SchemaDefLocation,
        enum_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once ({def_location})")]
    DuplicateFieldNameDefinition {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("`{owner}` declares the `{name}` input value more than once ({def_location})")]
    DuplicateInputValueDefinition {
        def_location: loc::SchemaDefLocation,
        name: String,
        owner: String,
    },

    #[error("The schema definition block is declared more than once ({def_location})")]
    DuplicateSchemaDefinition {
        def_location: loc::SchemaDefLocation,
    },

    #[error("Multiple types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("The `{union_name}` union lists `{member_name}` as a member more than once ({def_location})")]
    DuplicateUnionMember {
        def_location: loc::SchemaDefLocation,
        member_name: String,
        union_name: String,
    },

    #[error("The `{enum_name}` enum must define one or more values ({def_location})")]
    EnumWithNoValues {
        def_location: loc::SchemaDefLocation,
        enum_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined ({ext_location})")]
    ExtensionOfUndefinedType {
        ext_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements `{interface_name}`, \
        which is not an interface type ({def_location})"
    )]
    ImplementsNonInterfaceType {
        def_location: loc::SchemaDefLocation,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements `{interface_name}`, \
        which is not defined ({def_location})"
    )]
    ImplementsUndefinedInterface {
        def_location: loc::SchemaDefLocation,
        interface_name: String,
        type_name: String,
    },

    #[error("Names starting with `__` are reserved for introspection: `{name}` ({def_location})")]
    InvalidDunderPrefixedName {
        def_location: loc::SchemaDefLocation,
        name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` {type_kind} type with a \
        {extension_kind} extension ({ext_location})"
    )]
    InvalidExtensionType {
        ext_location: loc::SchemaDefLocation,
        extension_kind: GraphQLTypeKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Input fields and parameters can only be declared with input types: \
        `{owner}.{name}` is declared with `{invalid_type_name}`, which is not \
        an input type ({def_location})"
    )]
    InvalidInputValueWithOutputType {
        def_location: loc::SchemaDefLocation,
        invalid_type_name: String,
        name: String,
        owner: String,
    },

    #[error(
        "Output fields can not be declared with an input type: \
        `{parent_type_name}.{field_name}` is declared with `{input_type_name}`, \
        which is an input object type ({def_location})"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{union_name}` union includes `{member_name}`, but union members \
        must be object types and `{member_name}` is a {member_kind} type \
        ({def_location})"
    )]
    InvalidUnionMemberTypeKind {
        def_location: loc::SchemaDefLocation,
        member_kind: GraphQLTypeKind,
        member_name: String,
        union_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{interface_name}` but does not \
        define its `{field_name}` field ({def_location})"
    )]
    MissingInterfaceField {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("No query root type is defined: define a `Query` type or declare one in a schema block")]
    NoQueryOperationTypeDefined,

    #[error("The built-in `{type_name}` scalar can not be redefined ({def_location})")]
    RedefinitionOfBuiltinScalar {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root type must be an object type, but `{type_name}` \
        is a {type_kind} type"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Reference to undefined type `{undefined_type_name}` ({ref_location})")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
