use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::types::BUILTIN_SCALAR_NAMES;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Debug)]
struct RootTypeDef {
    def_location: loc::SchemaDefLocation,
    type_name: String,
}

/// Utility for building a [`Schema`].
///
/// Definitions are visited as each source is loaded. Type extensions are
/// queued and merged at [`SchemaBuilder::build()`] time so that an extension
/// may precede the definition it extends. Rule violations are collected
/// rather than reported first-wins.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    errors: Vec<TypeValidationError>,
    extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    mutation_type: Option<RootTypeDef>,
    query_type: Option<RootTypeDef>,
    schema_def_location: Option<loc::SchemaDefLocation>,
    subscription_type: Option<RootTypeDef>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.apply_extensions();

        let mut errors = std::mem::take(&mut self.errors);
        errors.append(&mut self.validate_types());

        let query_type = self.resolve_root_type(
            OperationKind::Query,
            self.query_type.as_ref(),
            &mut errors,
        );
        let mutation_type = self.resolve_root_type(
            OperationKind::Mutation,
            self.mutation_type.as_ref(),
            &mut errors,
        );
        let subscription_type = self.resolve_root_type(
            OperationKind::Subscription,
            self.subscription_type.as_ref(),
            &mut errors,
        );
        if self.query_type.is_none() && !self.types.contains_key("Query") {
            errors.push(TypeValidationError::NoQueryOperationTypeDefined);
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::InvalidSchema(errors));
        }
        let Some(query_type) = query_type else {
            return Err(SchemaBuildError::InvalidSchema(vec![
                TypeValidationError::NoQueryOperationTypeDefined,
            ]));
        };

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: DirectiveDefinition::builtins()
                .into_iter()
                .map(|directive| (directive.name.to_string(), directive))
                .collect(),
            errors: vec![],
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            schema_def_location: None,
            subscription_type: None,
            types: BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (name.to_string(), GraphQLType::Scalar(ScalarType::builtin(name))))
                .collect(),
        }
    }

    /// Parse `content` as SDL and visit each of its definitions. A syntax
    /// error fails immediately; rule violations are held until
    /// [`SchemaBuilder::build()`].
    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content).map_err(|err| {
            SchemaBuildError::ParseError {
                file: file_path.map(Path::to_path_buf),
                message: err.to_string(),
            }
        })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def);
        }

        Ok(self)
    }

    fn apply_extensions(&mut self) {
        let extensions = std::mem::take(&mut self.extensions);
        for (file_path, ext) in extensions {
            self.apply_extension(file_path.as_deref(), ext);
        }
    }

    fn apply_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) {
        use ast::schema::TypeExtension;
        let (type_name, position, extension_kind) = match &ext {
            TypeExtension::Enum(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Union),
        };
        let ext_location = def_location(file_path, position);

        let type_kind = match self.types.get(type_name.as_str()) {
            Some(type_) => type_.type_kind(),
            None => {
                self.errors.push(TypeValidationError::ExtensionOfUndefinedType {
                    ext_location,
                    type_name,
                });
                return;
            },
        };
        if type_kind != extension_kind {
            self.errors.push(TypeValidationError::InvalidExtensionType {
                ext_location,
                extension_kind,
                type_kind,
                type_name,
            });
            return;
        }

        let errors = &mut self.errors;
        match (ext, self.types.get_mut(type_name.as_str())) {
            (TypeExtension::Enum(ext), Some(GraphQLType::Enum(enum_type))) =>
                add_enum_values(
                    errors,
                    type_name.as_str(),
                    file_path,
                    &ext.values,
                    &mut enum_type.values,
                ),

            (TypeExtension::InputObject(ext), Some(GraphQLType::InputObject(inputobj_type))) =>
                add_input_values(
                    errors,
                    type_name.as_str(),
                    file_path,
                    &ext.fields,
                    &mut inputobj_type.fields,
                ),

            (TypeExtension::Interface(ext), Some(GraphQLType::Interface(iface_type))) =>
                add_fields(
                    errors,
                    type_name.as_str(),
                    file_path,
                    &ext.fields,
                    &mut iface_type.0.fields,
                ),

            (TypeExtension::Object(ext), Some(GraphQLType::Object(obj_type))) => {
                add_fields(
                    errors,
                    type_name.as_str(),
                    file_path,
                    &ext.fields,
                    &mut obj_type.0.fields,
                );
                add_interface_names(&ext.implements_interfaces, &mut obj_type.0.interfaces);
            },

            (TypeExtension::Union(ext), Some(GraphQLType::Union(union_type))) =>
                add_union_members(
                    errors,
                    type_name.as_str(),
                    &ext_location,
                    &ext.types,
                    &mut union_type.members,
                ),

            // Scalar extensions only add directives, which are not tracked.
            _ => (),
        }
    }

    fn check_input_value(
        &self,
        owner: &str,
        input_value: &InputField,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let type_name = input_value.type_annotation().innermost_type_name();
        match self.types.get(type_name) {
            None => errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: input_value.def_location().to_owned(),
                undefined_type_name: type_name.to_string(),
            }),

            Some(type_) if !type_.is_input_type() =>
                errors.push(TypeValidationError::InvalidInputValueWithOutputType {
                    def_location: input_value.def_location().to_owned(),
                    invalid_type_name: type_name.to_string(),
                    name: input_value.name().to_string(),
                    owner: owner.to_string(),
                }),

            Some(_) => (),
        }
    }

    fn check_object_or_interface(
        &self,
        type_data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for field in type_data.fields.values() {
            let type_name = field.type_annotation().innermost_type_name();
            match self.types.get(type_name) {
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: type_name.to_string(),
                }),

                Some(GraphQLType::InputObject(_)) =>
                    errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        input_type_name: type_name.to_string(),
                        parent_type_name: type_data.name.to_string(),
                    }),

                Some(_) => (),
            }

            let owner = format!("{}.{}", type_data.name, field.name());
            for param in field.parameters().values() {
                self.check_input_value(owner.as_str(), param, errors);
            }
        }

        for iface_name in &type_data.interfaces {
            match self.types.get(iface_name.as_str()) {
                None => errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    def_location: type_data.def_location.to_owned(),
                    interface_name: iface_name.to_string(),
                    type_name: type_data.name.to_string(),
                }),

                Some(GraphQLType::Interface(iface_type)) => {
                    for field_name in iface_type.fields().keys() {
                        if !type_data.fields.contains_key(field_name) {
                            errors.push(TypeValidationError::MissingInterfaceField {
                                def_location: type_data.def_location.to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                type_name: type_data.name.to_string(),
                            });
                        }
                    }
                },

                Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    def_location: type_data.def_location.to_owned(),
                    interface_name: iface_name.to_string(),
                    type_name: type_data.name.to_string(),
                }),
            }
        }
    }

    fn resolve_root_type(
        &self,
        kind: OperationKind,
        declared: Option<&RootTypeDef>,
        errors: &mut Vec<TypeValidationError>,
    ) -> Option<String> {
        let Some(declared) = declared else {
            // Without a schema block, the default-named type is the root only
            // if it exists. A non-object `Query` type is still an error.
            let default_name = kind.default_root_type_name();
            return match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                Some(other) if kind == OperationKind::Query => {
                    errors.push(TypeValidationError::RootOperationTypeNotObject {
                        operation: kind,
                        type_kind: other.type_kind(),
                        type_name: default_name.to_string(),
                    });
                    None
                },
                _ => None,
            };
        };

        match self.types.get(declared.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Some(declared.type_name.to_string()),

            Some(other) => {
                errors.push(TypeValidationError::RootOperationTypeNotObject {
                    operation: kind,
                    type_kind: other.type_kind(),
                    type_name: declared.type_name.to_string(),
                });
                None
            },

            None => {
                errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: declared.def_location.to_owned(),
                    undefined_type_name: declared.type_name.to_string(),
                });
                None
            },
        }
    }

    fn validate_types(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Enum(enum_type) => {
                    if enum_type.values().is_empty() {
                        errors.push(TypeValidationError::EnumWithNoValues {
                            def_location: enum_type.def_location().to_owned(),
                            enum_name: enum_type.name().to_string(),
                        });
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    for field in inputobj_type.fields().values() {
                        self.check_input_value(inputobj_type.name(), field, &mut errors);
                    }
                },

                GraphQLType::Interface(iface_type) =>
                    self.check_object_or_interface(&iface_type.0, &mut errors),

                GraphQLType::Object(obj_type) =>
                    self.check_object_or_interface(&obj_type.0, &mut errors),

                GraphQLType::Scalar(_) => (),

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        match self.types.get(member_name.as_str()) {
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                ref_location: union_type.def_location().to_owned(),
                                undefined_type_name: member_name.to_string(),
                            }),

                            Some(GraphQLType::Object(_)) => (),

                            Some(other) =>
                                errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                                    def_location: union_type.def_location().to_owned(),
                                    member_kind: other.type_kind(),
                                    member_name: member_name.to_string(),
                                    union_name: union_type.name().to_string(),
                                }),
                        }
                    }
                },
            }
        }

        for directive in self.directive_defs.values() {
            let owner = format!("@{}", directive.name());
            for param in directive.parameters().values() {
                self.check_input_value(owner.as_str(), param, &mut errors);
            }
        }

        errors
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.extensions.push((file_path.map(Path::to_path_buf), type_ext)),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) {
        let def_location = def_location(file_path, def.position);
        if def.name.starts_with("__") {
            self.errors.push(TypeValidationError::InvalidDunderPrefixedName {
                def_location,
                name: def.name,
            });
            return;
        }

        if self.directive_defs.contains_key(def.name.as_str()) {
            self.errors.push(TypeValidationError::DuplicateDirectiveDefinition {
                def_location,
                directive_name: def.name,
            });
            return;
        }

        let mut parameters = IndexMap::new();
        add_input_values(
            &mut self.errors,
            format!("@{}", def.name).as_str(),
            file_path,
            &def.arguments,
            &mut parameters,
        );
        self.directive_defs.insert(def.name.to_string(), DirectiveDefinition {
            def_location,
            locations: def.locations.iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name,
            parameters,
        });
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) {
        let def_location = def_location(file_path, schema_def.position);
        if self.schema_def_location.is_some() {
            self.errors.push(TypeValidationError::DuplicateSchemaDefinition {
                def_location,
            });
            return;
        }

        let root_type_def = |type_name: Option<String>| type_name.map(|type_name| {
            RootTypeDef {
                def_location: def_location.to_owned(),
                type_name,
            }
        });
        self.query_type = root_type_def(schema_def.query);
        self.mutation_type = root_type_def(schema_def.mutation);
        self.subscription_type = root_type_def(schema_def.subscription);
        self.schema_def_location = Some(def_location);
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) {
        use ast::schema::TypeDefinition;
        let (type_name, position) = match &type_def {
            TypeDefinition::Enum(def) => (def.name.to_string(), def.position),
            TypeDefinition::InputObject(def) => (def.name.to_string(), def.position),
            TypeDefinition::Interface(def) => (def.name.to_string(), def.position),
            TypeDefinition::Object(def) => (def.name.to_string(), def.position),
            TypeDefinition::Scalar(def) => (def.name.to_string(), def.position),
            TypeDefinition::Union(def) => (def.name.to_string(), def.position),
        };
        let def_location = def_location(file_path, position);

        if type_name.starts_with("__") {
            self.errors.push(TypeValidationError::InvalidDunderPrefixedName {
                def_location,
                name: type_name,
            });
            return;
        }

        if let Some(existing_type) = self.types.get(type_name.as_str()) {
            let is_builtin_scalar = matches!(
                existing_type,
                GraphQLType::Scalar(scalar_type) if scalar_type.is_builtin(),
            );
            self.errors.push(if is_builtin_scalar {
                TypeValidationError::RedefinitionOfBuiltinScalar {
                    def_location,
                    type_name,
                }
            } else {
                TypeValidationError::DuplicateTypeDefinition {
                    def1: existing_type.def_location().to_owned(),
                    def2: def_location,
                    type_name,
                }
            });
            return;
        }

        let errors = &mut self.errors;
        let graphql_type = match type_def {
            TypeDefinition::Enum(def) => {
                let mut values = IndexSet::new();
                add_enum_values(errors, type_name.as_str(), file_path, &def.values, &mut values);
                GraphQLType::Enum(EnumType {
                    def_location,
                    name: type_name.to_string(),
                    values,
                })
            },

            TypeDefinition::InputObject(def) => {
                let mut fields = IndexMap::new();
                add_input_values(errors, type_name.as_str(), file_path, &def.fields, &mut fields);
                GraphQLType::InputObject(InputObjectType {
                    def_location,
                    fields,
                    name: type_name.to_string(),
                })
            },

            TypeDefinition::Interface(def) => {
                let mut fields = IndexMap::from([
                    ("__typename".to_string(), Field::typename_field()),
                ]);
                add_fields(errors, type_name.as_str(), file_path, &def.fields, &mut fields);
                let mut interfaces = vec![];
                add_interface_names(&def.implements_interfaces, &mut interfaces);
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    def_location,
                    fields,
                    interfaces,
                    name: type_name.to_string(),
                }))
            },

            TypeDefinition::Object(def) => {
                let mut fields = IndexMap::from([
                    ("__typename".to_string(), Field::typename_field()),
                ]);
                add_fields(errors, type_name.as_str(), file_path, &def.fields, &mut fields);
                let mut interfaces = vec![];
                add_interface_names(&def.implements_interfaces, &mut interfaces);
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    def_location,
                    fields,
                    interfaces,
                    name: type_name.to_string(),
                }))
            },

            TypeDefinition::Scalar(_) => GraphQLType::Scalar(ScalarType {
                def_location,
                name: type_name.to_string(),
            }),

            TypeDefinition::Union(def) => {
                let mut members = IndexSet::new();
                add_union_members(errors, type_name.as_str(), &def_location, &def.types, &mut members);
                GraphQLType::Union(UnionType {
                    def_location,
                    members,
                    name: type_name.to_string(),
                })
            },
        };

        self.types.insert(type_name, graphql_type);
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn def_location(
    file_path: Option<&Path>,
    position: graphql_parser::Pos,
) -> loc::SchemaDefLocation {
    loc::FilePosition::from_pos(file_path, position).into()
}

fn add_enum_values(
    errors: &mut Vec<TypeValidationError>,
    enum_name: &str,
    file_path: Option<&Path>,
    ast_values: &[ast::schema::EnumValue],
    values: &mut IndexSet<String>,
) {
    for ast_value in ast_values {
        if !values.insert(ast_value.name.to_string()) {
            errors.push(TypeValidationError::DuplicateEnumValueDefinition {
                def_location: def_location(file_path, ast_value.position),
                enum_name: enum_name.to_string(),
                value_name: ast_value.name.to_string(),
            });
        }
    }
}

fn add_fields(
    errors: &mut Vec<TypeValidationError>,
    type_name: &str,
    file_path: Option<&Path>,
    ast_fields: &[ast::schema::Field],
    fields: &mut IndexMap<String, Field>,
) {
    for ast_field in ast_fields {
        let field_location = def_location(file_path, ast_field.position);
        if ast_field.name.starts_with("__") {
            errors.push(TypeValidationError::InvalidDunderPrefixedName {
                def_location: field_location,
                name: format!("{type_name}.{}", ast_field.name),
            });
            continue;
        }

        if fields.contains_key(ast_field.name.as_str()) {
            errors.push(TypeValidationError::DuplicateFieldNameDefinition {
                def_location: field_location,
                field_name: ast_field.name.to_string(),
                type_name: type_name.to_string(),
            });
            continue;
        }

        let mut parameters = IndexMap::new();
        add_input_values(
            errors,
            format!("{type_name}.{}", ast_field.name).as_str(),
            file_path,
            &ast_field.arguments,
            &mut parameters,
        );
        fields.insert(ast_field.name.to_string(), Field {
            def_location: field_location,
            name: ast_field.name.to_string(),
            parameters,
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        });
    }
}

fn add_input_values(
    errors: &mut Vec<TypeValidationError>,
    owner: &str,
    file_path: Option<&Path>,
    ast_input_values: &[ast::schema::InputValue],
    input_values: &mut IndexMap<String, InputField>,
) {
    for ast_input_value in ast_input_values {
        let value_location = def_location(file_path, ast_input_value.position);
        if ast_input_value.name.starts_with("__") {
            errors.push(TypeValidationError::InvalidDunderPrefixedName {
                def_location: value_location,
                name: format!("{owner}.{}", ast_input_value.name),
            });
            continue;
        }

        if input_values.contains_key(ast_input_value.name.as_str()) {
            errors.push(TypeValidationError::DuplicateInputValueDefinition {
                def_location: value_location,
                name: ast_input_value.name.to_string(),
                owner: owner.to_string(),
            });
            continue;
        }

        input_values.insert(ast_input_value.name.to_string(), InputField {
            def_location: value_location,
            default_value: ast_input_value.default_value.as_ref().map(|value| value.to_string()),
            name: ast_input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_input_value.value_type),
        });
    }
}

fn add_interface_names(ast_names: &[String], interfaces: &mut Vec<String>) {
    for name in ast_names {
        if !interfaces.contains(name) {
            interfaces.push(name.to_string());
        }
    }
}

fn add_union_members(
    errors: &mut Vec<TypeValidationError>,
    union_name: &str,
    union_location: &loc::SchemaDefLocation,
    ast_member_names: &[String],
    members: &mut IndexSet<String>,
) {
    for member_name in ast_member_names {
        if !members.insert(member_name.to_string()) {
            errors.push(TypeValidationError::DuplicateUnionMember {
                def_location: union_location.to_owned(),
                member_name: member_name.to_string(),
                union_name: union_name.to_string(),
            });
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    /// The schema text could not be parsed. `message` is the parser's own
    /// message, verbatim.
    #[error("{message}")]
    ParseError {
        file: Option<PathBuf>,
        message: String,
    },

    /// One or more construction rules were violated. Displays as one bullet
    /// per violation.
    #[error("{}", bullet_list(.0))]
    InvalidSchema(Vec<TypeValidationError>),
}

fn bullet_list(errors: &[TypeValidationError]) -> String {
    errors.iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
