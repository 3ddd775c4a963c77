use crate::ast;
use crate::operation::validation::ArgumentOwner;
use crate::operation::validation::DocumentValidator;
use crate::operation::validation::UsageCollector;
use crate::operation::validation::VariableUsage;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

impl<'a> DocumentValidator<'a> {
    /// Check an argument list against the parameters its field or directive
    /// declares: names are known and unique, required parameters are given,
    /// and each literal fits its parameter's type.
    pub(super) fn check_arguments(
        &mut self,
        arguments: &'a [(String, ast::query::Value)],
        parameters: &IndexMap<String, InputField>,
        owner: &ArgumentOwner<'_>,
        pos: graphql_parser::Pos,
        collector: &mut UsageCollector<'a>,
    ) {
        let mut seen = HashSet::new();
        for (arg_name, value) in arguments {
            if !seen.insert(arg_name.as_str()) {
                self.error(format!("There can be only one argument named \"{arg_name}\"."), pos);
                continue;
            }

            let Some(param) = parameters.get(arg_name.as_str()) else {
                let message = match owner {
                    ArgumentOwner::Directive(directive_name) => format!(
                        "Unknown argument \"{arg_name}\" on directive \"@{directive_name}\".",
                    ),
                    ArgumentOwner::Field { field_name, type_name } => format!(
                        "Unknown argument \"{arg_name}\" on field \"{type_name}.{field_name}\".",
                    ),
                };
                self.error(message, pos);
                continue;
            };

            self.check_value(
                value,
                param.type_annotation(),
                param.default_value().is_some(),
                pos,
                collector,
            );
        }

        for (param_name, param) in parameters {
            if param.is_required() && !seen.contains(param_name.as_str()) {
                let param_type = param.type_annotation();
                let message = match owner {
                    ArgumentOwner::Directive(directive_name) => format!(
                        "Directive \"@{directive_name}\" argument \"{param_name}\" of type \
                        \"{param_type}\" is required, but it was not provided.",
                    ),
                    ArgumentOwner::Field { field_name, .. } => format!(
                        "Field \"{field_name}\" argument \"{param_name}\" of type \
                        \"{param_type}\" is required, but it was not provided.",
                    ),
                };
                self.error(message, pos);
            }
        }
    }

    /// Check that a literal value can be coerced to `expected`. Variables are
    /// recorded as usages and checked once the whole operation is known.
    pub(super) fn check_value(
        &mut self,
        value: &'a ast::query::Value,
        expected: &TypeAnnotation,
        location_has_default: bool,
        pos: graphql_parser::Pos,
        collector: &mut UsageCollector<'a>,
    ) {
        let schema = self.schema;
        use ast::query::Value;

        if let Value::Variable(var_name) = value {
            collector.variables.push(VariableUsage {
                location_has_default,
                location_type: expected.to_owned(),
                name: var_name.as_str(),
                position: pos,
            });
            return;
        }

        if let Value::Null = value {
            if !expected.nullable() {
                self.error(format!("Expected value of type \"{expected}\", found null."), pos);
            }
            return;
        }

        if let TypeAnnotation::List(list_annot) = expected {
            let item_type = list_annot.inner_type_annotation();
            match value {
                Value::List(items) => {
                    for item in items {
                        self.check_value(item, item_type, false, pos, collector);
                    }
                },
                // A single value is coerced to a list of one.
                _ => self.check_value(value, item_type, false, pos, collector),
            }
            return;
        }

        let type_name = expected.innermost_type_name();
        match schema.lookup_type(type_name) {
            Some(GraphQLType::Scalar(_)) => {
                let fits = match type_name {
                    "Boolean" => matches!(value, Value::Boolean(_)),
                    "Float" => matches!(value, Value::Float(_) | Value::Int(_)),
                    "ID" => matches!(value, Value::String(_) | Value::Int(_)),
                    "Int" => matches!(value, Value::Int(_)),
                    "String" => matches!(value, Value::String(_)),
                    // Custom scalars accept any literal.
                    _ => true,
                };
                if !fits {
                    self.error(
                        format!("Expected value of type \"{expected}\", found {value}."),
                        pos,
                    );
                }
            },

            Some(GraphQLType::Enum(enum_type)) => match value {
                Value::Enum(enum_value) if enum_type.has_value(enum_value.as_str()) => (),
                Value::Enum(enum_value) => self.error(
                    format!("Value \"{enum_value}\" does not exist in \"{type_name}\" enum."),
                    pos,
                ),
                _ => self.error(
                    format!("Enum \"{type_name}\" cannot represent non-enum value: {value}."),
                    pos,
                ),
            },

            Some(GraphQLType::InputObject(inputobj_type)) => {
                let Value::Object(fields) = value else {
                    self.error(
                        format!("Expected value of type \"{expected}\", found {value}."),
                        pos,
                    );
                    return;
                };

                for (field_name, field_value) in fields {
                    match inputobj_type.fields().get(field_name.as_str()) {
                        Some(field) => self.check_value(
                            field_value,
                            field.type_annotation(),
                            field.default_value().is_some(),
                            pos,
                            collector,
                        ),
                        None => self.error(
                            format!("Field \"{field_name}\" is not defined by type \"{type_name}\"."),
                            pos,
                        ),
                    }
                }

                for (field_name, field) in inputobj_type.fields() {
                    if field.is_required() && !fields.contains_key(field_name.as_str()) {
                        self.error(
                            format!(
                                "Field \"{type_name}.{field_name}\" of required type \"{}\" was \
                                not provided.",
                                field.type_annotation(),
                            ),
                            pos,
                        );
                    }
                }
            },

            // Unknown or output types are reported where they are declared.
            _ => (),
        }
    }
}
