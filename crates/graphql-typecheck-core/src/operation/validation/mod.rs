//! Executable-document validation: a practical subset of the rules in
//! <https://spec.graphql.org/October2021/#sec-Validation>.

mod input_values;
mod validation_error;
mod variable_usage;

pub use validation_error::ValidationError;

use crate::ast;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;
use variable_usage::VariableUsage;

/// Validate every definition in `document` against `schema`. Returns the
/// problems found in document order, without duplicates.
pub fn validate_document(
    schema: &Schema,
    document: &ast::query::Document,
) -> Vec<ValidationError> {
    let mut validator = DocumentValidator {
        errors: vec![],
        fragments: IndexMap::new(),
        schema,
    };
    validator.validate(document);

    let mut seen = HashSet::new();
    validator.errors
        .into_iter()
        .filter(|err| seen.insert(err.clone()))
        .collect()
}

/// Variables and fragment spreads found while walking one operation or
/// fragment definition.
#[derive(Default)]
struct UsageCollector<'a> {
    spreads: Vec<&'a str>,
    variables: Vec<VariableUsage<'a>>,
}

struct DocumentValidator<'a> {
    errors: Vec<ValidationError>,
    fragments: IndexMap<&'a str, &'a ast::query::FragmentDefinition>,
    schema: &'a Schema,
}
impl<'a> DocumentValidator<'a> {
    fn error(&mut self, message: String, pos: graphql_parser::Pos) {
        self.errors.push(ValidationError::new(message, pos));
    }

    fn validate(&mut self, document: &'a ast::query::Document) {
        use ast::query::Definition;

        let mut operations = vec![];
        for def in &document.definitions {
            match def {
                Definition::Operation(op) => operations.push(op),
                Definition::Fragment(frag) => {
                    if self.fragments.contains_key(frag.name.as_str()) {
                        self.error(
                            format!("There can be only one fragment named \"{}\".", frag.name),
                            frag.position,
                        );
                    } else {
                        self.fragments.insert(frag.name.as_str(), frag);
                    }
                },
            }
        }

        let mut operation_names = HashSet::new();
        for &op in &operations {
            let parts = OperationParts::from_ast(op);
            match parts.name {
                Some(name) if !operation_names.insert(name) => self.error(
                    format!("There can be only one operation named \"{name}\"."),
                    parts.position,
                ),
                None if operations.len() > 1 => self.error(
                    "This anonymous operation must be the only defined operation.".to_string(),
                    parts.position,
                ),
                _ => (),
            }
        }

        let fragments = self.fragments.values().copied().collect::<Vec<_>>();
        let mut fragment_usages = IndexMap::new();
        for frag in fragments {
            let usages = self.visit_fragment_definition(frag);
            fragment_usages.insert(frag.name.as_str(), usages);
        }

        let mut used_fragments = HashSet::new();
        for op in operations {
            self.visit_operation(op, &fragment_usages, &mut used_fragments);
        }

        let unused = self.fragments.iter()
            .filter(|(name, _)| !used_fragments.contains(*name))
            .map(|(name, frag)| (name.to_string(), frag.position))
            .collect::<Vec<_>>();
        for (name, pos) in unused {
            self.error(format!("Fragment \"{name}\" is never used."), pos);
        }

        self.check_fragment_cycles(&fragment_usages);
    }

    fn check_directives(
        &mut self,
        directives: &'a [ast::query::Directive],
        location: &str,
        collector: &mut UsageCollector<'a>,
    ) {
        let schema = self.schema;
        for directive in directives {
            let Some(directive_def) = schema.directive(directive.name.as_str()) else {
                self.error(
                    format!("Unknown directive \"@{}\".", directive.name),
                    directive.position,
                );
                continue;
            };

            if !directive_def.is_allowed_at(location) {
                self.error(
                    format!("Directive \"@{}\" may not be used on {location}.", directive.name),
                    directive.position,
                );
            }

            self.check_arguments(
                &directive.arguments,
                directive_def.parameters(),
                &ArgumentOwner::Directive(directive.name.as_str()),
                directive.position,
                collector,
            );
        }
    }

    fn check_field_merging(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
    ) {
        let mut fields_by_key = IndexMap::new();
        self.collect_fields(parent_type, selection_set, &mut fields_by_key, &mut HashSet::new());

        for (response_key, fields) in fields_by_key {
            let Some(((first_parent, first), rest)) = fields.split_first() else {
                continue;
            };
            for (parent, field) in rest {
                // Fields on two distinct object types can never both apply.
                let mutually_exclusive = first_parent.name() != parent.name()
                    && first_parent.as_object().is_some()
                    && parent.as_object().is_some();
                if mutually_exclusive {
                    continue;
                }

                if first.name != field.name {
                    self.error(
                        format!(
                            "Fields \"{response_key}\" conflict because \"{}\" and \"{}\" are \
                            different fields. Use different aliases on the fields to fetch both \
                            if this was intentional.",
                            first.name,
                            field.name,
                        ),
                        field.position,
                    );
                    break;
                }

                if printed_arguments(&first.arguments) != printed_arguments(&field.arguments) {
                    self.error(
                        format!(
                            "Fields \"{response_key}\" conflict because they have differing \
                            arguments. Use different aliases on the fields to fetch both if this \
                            was intentional.",
                        ),
                        field.position,
                    );
                    break;
                }
            }
        }
    }

    fn check_fragment_cycles(
        &mut self,
        fragment_usages: &IndexMap<&'a str, UsageCollector<'a>>,
    ) {
        let mut reported = HashSet::new();
        for (name, frag) in self.fragments.clone() {
            if reported.contains(name) {
                continue;
            }

            let mut path = vec![];
            let mut visited = HashSet::from([name]);
            if !spread_path_to(name, name, fragment_usages, &mut visited, &mut path) {
                continue;
            }

            reported.insert(name);
            reported.extend(path.iter().copied());
            let message = if path.is_empty() {
                format!("Cannot spread fragment \"{name}\" within itself.")
            } else {
                format!(
                    "Cannot spread fragment \"{name}\" within itself via {}.",
                    path.iter().map(|p| format!("\"{p}\"")).collect::<Vec<_>>().join(", "),
                )
            };
            self.error(message, frag.position);
        }
    }

    fn collect_fields(
        &self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        fields_by_key: &mut IndexMap<&'a str, Vec<(&'a GraphQLType, &'a ast::query::Field)>>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        let schema = self.schema;
        use ast::query::Selection;
        use ast::query::TypeCondition;

        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let response_key = field.alias.as_deref().unwrap_or(field.name.as_str());
                    fields_by_key.entry(response_key)
                        .or_default()
                        .push((parent_type, field));
                },

                Selection::InlineFragment(inline) => {
                    let fragment_type = match &inline.type_condition {
                        Some(TypeCondition::On(type_name)) =>
                            schema.lookup_type(type_name.as_str()),
                        None => Some(parent_type),
                    };
                    if let Some(fragment_type) = fragment_type {
                        self.collect_fields(
                            fragment_type,
                            &inline.selection_set,
                            fields_by_key,
                            visited_fragments,
                        );
                    }
                },

                Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    let Some(frag) = self.fragments.get(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    let TypeCondition::On(type_name) = &frag.type_condition;
                    if let Some(fragment_type) = schema.lookup_type(type_name.as_str()) {
                        self.collect_fields(
                            fragment_type,
                            &frag.selection_set,
                            fields_by_key,
                            visited_fragments,
                        );
                    }
                },
            }
        }
    }

    fn visit_field(
        &mut self,
        parent_type: &'a GraphQLType,
        field: &'a ast::query::Field,
        collector: &mut UsageCollector<'a>,
    ) {
        let schema = self.schema;
        self.check_directives(&field.directives, "FIELD", collector);

        let Some(field_def) = lookup_field(parent_type, field.name.as_str()) else {
            self.error(
                format!(
                    "Cannot query field \"{}\" on type \"{}\".",
                    field.name,
                    parent_type.name(),
                ),
                field.position,
            );
            return;
        };

        self.check_arguments(
            &field.arguments,
            field_def.parameters(),
            &ArgumentOwner::Field {
                field_name: field.name.as_str(),
                type_name: parent_type.name(),
            },
            field.position,
            collector,
        );

        let field_type = field_def.type_annotation();
        let Some(inner_type) = schema.lookup_type(field_type.innermost_type_name()) else {
            return;
        };
        let has_selection = !field.selection_set.items.is_empty();
        if inner_type.is_leaf_type() {
            if has_selection {
                self.error(
                    format!(
                        "Field \"{}\" must not have a selection since type \"{field_type}\" has \
                        no subfields.",
                        field.name,
                    ),
                    field.position,
                );
            }
        } else if !has_selection {
            self.error(
                format!(
                    "Field \"{0}\" of type \"{field_type}\" must have a selection of subfields. \
                    Did you mean \"{0} {{ ... }}\"?",
                    field.name,
                ),
                field.position,
            );
        } else {
            self.visit_selection_set(inner_type, &field.selection_set, collector);
        }
    }

    fn visit_fragment_definition(
        &mut self,
        frag: &'a ast::query::FragmentDefinition,
    ) -> UsageCollector<'a> {
        let schema = self.schema;
        let mut collector = UsageCollector::default();
        self.check_directives(&frag.directives, "FRAGMENT_DEFINITION", &mut collector);

        let ast::query::TypeCondition::On(type_name) = &frag.type_condition;
        match schema.lookup_type(type_name.as_str()) {
            None => self.error(format!("Unknown type \"{type_name}\"."), frag.position),

            Some(frag_type) if !frag_type.is_composite_type() => self.error(
                format!(
                    "Fragment \"{}\" cannot condition on non composite type \"{type_name}\".",
                    frag.name,
                ),
                frag.position,
            ),

            Some(frag_type) =>
                self.visit_selection_set(frag_type, &frag.selection_set, &mut collector),
        }

        collector
    }

    fn visit_fragment_spread(
        &mut self,
        parent_type: &'a GraphQLType,
        spread: &'a ast::query::FragmentSpread,
        collector: &mut UsageCollector<'a>,
    ) {
        let schema = self.schema;
        self.check_directives(&spread.directives, "FRAGMENT_SPREAD", collector);
        collector.spreads.push(spread.fragment_name.as_str());

        let Some(frag) = self.fragments.get(spread.fragment_name.as_str()) else {
            self.error(
                format!("Unknown fragment \"{}\".", spread.fragment_name),
                spread.position,
            );
            return;
        };

        let ast::query::TypeCondition::On(type_name) = &frag.type_condition;
        let is_composite = schema.lookup_type(type_name.as_str())
            .is_some_and(GraphQLType::is_composite_type);
        if is_composite && !schema.do_types_overlap(type_name.as_str(), parent_type.name()) {
            self.error(
                format!(
                    "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never \
                    be of type \"{type_name}\".",
                    spread.fragment_name,
                    parent_type.name(),
                ),
                spread.position,
            );
        }
    }

    fn visit_inline_fragment(
        &mut self,
        parent_type: &'a GraphQLType,
        inline: &'a ast::query::InlineFragment,
        collector: &mut UsageCollector<'a>,
    ) {
        let schema = self.schema;
        self.check_directives(&inline.directives, "INLINE_FRAGMENT", collector);

        let fragment_type = match &inline.type_condition {
            None => parent_type,
            Some(ast::query::TypeCondition::On(type_name)) => {
                match schema.lookup_type(type_name.as_str()) {
                    None => {
                        self.error(format!("Unknown type \"{type_name}\"."), inline.position);
                        return;
                    },

                    Some(frag_type) if !frag_type.is_composite_type() => {
                        self.error(
                            format!(
                                "Fragment cannot condition on non composite type \"{type_name}\".",
                            ),
                            inline.position,
                        );
                        return;
                    },

                    Some(frag_type) => {
                        if !schema.do_types_overlap(type_name.as_str(), parent_type.name()) {
                            self.error(
                                format!(
                                    "Fragment cannot be spread here as objects of type \"{}\" \
                                    can never be of type \"{type_name}\".",
                                    parent_type.name(),
                                ),
                                inline.position,
                            );
                        }
                        frag_type
                    },
                }
            },
        };

        self.visit_selection_set(fragment_type, &inline.selection_set, collector);
    }

    fn visit_operation(
        &mut self,
        op: &'a ast::query::OperationDefinition,
        fragment_usages: &IndexMap<&'a str, UsageCollector<'a>>,
        used_fragments: &mut HashSet<&'a str>,
    ) {
        let schema = self.schema;
        let parts = OperationParts::from_ast(op);
        let mut collector = UsageCollector::default();

        // Declared variables: name -> (type, has a non-null default, position)
        let mut declared = IndexMap::new();
        for var_def in parts.variable_definitions {
            let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
            if declared.contains_key(var_def.name.as_str()) {
                self.error(
                    format!("There can be only one variable named \"${}\".", var_def.name),
                    var_def.position,
                );
                continue;
            }

            let type_name = var_type.innermost_type_name();
            match schema.lookup_type(type_name) {
                None => self.error(format!("Unknown type \"{type_name}\"."), var_def.position),

                Some(t) if !t.is_input_type() => self.error(
                    format!(
                        "Variable \"${}\" cannot be non-input type \"{var_type}\".",
                        var_def.name,
                    ),
                    var_def.position,
                ),

                Some(_) => {
                    if let Some(default_value) = &var_def.default_value {
                        // Variables are not allowed inside default values;
                        // any usages found there are dropped.
                        let mut default_collector = UsageCollector::default();
                        self.check_value(
                            default_value,
                            &var_type,
                            false,
                            var_def.position,
                            &mut default_collector,
                        );
                    }
                },
            }

            let has_default = var_def.default_value.as_ref()
                .is_some_and(|value| !matches!(value, ast::query::Value::Null));
            declared.insert(var_def.name.as_str(), (var_type, has_default, var_def.position));
        }

        self.check_directives(parts.directives, parts.kind.directive_location(), &mut collector);

        let root_type = schema
            .root_operation_type(parts.kind)
            .and_then(|root| schema.lookup_type(root.name()));
        match root_type {
            Some(root_type) =>
                self.visit_selection_set(root_type, parts.selection_set, &mut collector),
            None => self.error(
                format!("Schema is not configured to execute {} operation.", parts.kind),
                parts.position,
            ),
        }

        let mut usages = collector.variables;
        let mut to_visit = collector.spreads;
        let mut visited = HashSet::new();
        while let Some(frag_name) = to_visit.pop() {
            if !visited.insert(frag_name) {
                continue;
            }
            used_fragments.insert(frag_name);
            if let Some(frag_usages) = fragment_usages.get(frag_name) {
                usages.extend(frag_usages.variables.iter().cloned());
                to_visit.extend(frag_usages.spreads.iter().copied());
            }
        }

        let in_operation = match parts.name {
            Some(op_name) => format!(" by operation \"{op_name}\""),
            None => String::new(),
        };
        for usage in &usages {
            match declared.get(usage.name) {
                None => self.error(
                    format!("Variable \"${}\" is not defined{in_operation}.", usage.name),
                    usage.position,
                ),

                Some((var_type, has_default, _)) => {
                    let allowed = variable_usage::is_variable_usage_allowed(
                        var_type,
                        *has_default,
                        &usage.location_type,
                        usage.location_has_default,
                    );
                    if !allowed {
                        self.error(
                            format!(
                                "Variable \"${}\" of type \"{var_type}\" used in position \
                                expecting type \"{}\".",
                                usage.name,
                                usage.location_type,
                            ),
                            usage.position,
                        );
                    }
                },
            }
        }

        let in_operation = match parts.name {
            Some(op_name) => format!(" in operation \"{op_name}\""),
            None => String::new(),
        };
        for (var_name, (_, _, pos)) in &declared {
            if !usages.iter().any(|usage| usage.name == *var_name) {
                self.error(
                    format!("Variable \"${var_name}\" is never used{in_operation}."),
                    *pos,
                );
            }
        }
    }

    fn visit_selection_set(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        collector: &mut UsageCollector<'a>,
    ) {
        use ast::query::Selection;

        self.check_field_merging(parent_type, selection_set);
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) =>
                    self.visit_field(parent_type, field, collector),
                Selection::FragmentSpread(spread) =>
                    self.visit_fragment_spread(parent_type, spread, collector),
                Selection::InlineFragment(inline) =>
                    self.visit_inline_fragment(parent_type, inline, collector),
            }
        }
    }
}

/// Who declares the parameters an argument list is checked against.
enum ArgumentOwner<'a> {
    Directive(&'a str),
    Field {
        field_name: &'a str,
        type_name: &'a str,
    },
}

/// The pieces of an operation definition shared by every
/// [`OperationDefinition`](ast::query::OperationDefinition) variant.
pub(crate) struct OperationParts<'a> {
    pub directives: &'a [ast::query::Directive],
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub position: graphql_parser::Pos,
    pub selection_set: &'a ast::query::SelectionSet,
    pub variable_definitions: &'a [ast::query::VariableDefinition],
}
impl<'a> OperationParts<'a> {
    pub fn from_ast(op: &'a ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        let kind = OperationKind::from_ast(op);
        match op {
            OperationDefinition::SelectionSet(selection_set) => Self {
                directives: &[],
                kind,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },
            OperationDefinition::Query(query) => Self {
                directives: &query.directives,
                kind,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },
            OperationDefinition::Mutation(mutation) => Self {
                directives: &mutation.directives,
                kind,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },
            OperationDefinition::Subscription(subscription) => Self {
                directives: &subscription.directives,
                kind,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }
}

/// Look up a selectable field on an object, interface, or union type. Unions
/// only expose `__typename`.
pub(crate) fn lookup_field<'a>(parent_type: &'a GraphQLType, field_name: &str) -> Option<&'a Field> {
    match parent_type {
        GraphQLType::Interface(iface_type) => iface_type.field(field_name),
        GraphQLType::Object(obj_type) => obj_type.field(field_name),
        GraphQLType::Union(_) if field_name == "__typename" => Some(Field::typename_field_ref()),
        _ => None,
    }
}

fn printed_arguments(arguments: &[(String, ast::query::Value)]) -> Vec<(String, String)> {
    let mut printed = arguments.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<Vec<_>>();
    printed.sort();
    printed
}

/// Depth-first search for a chain of spreads from `current` back to
/// `target`. On success `path` holds the fragments in between.
fn spread_path_to<'a>(
    target: &'a str,
    current: &'a str,
    fragment_usages: &IndexMap<&'a str, UsageCollector<'a>>,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> bool {
    let Some(usages) = fragment_usages.get(current) else {
        return false;
    };
    for spread in &usages.spreads {
        if *spread == target {
            return true;
        }
        if visited.insert(spread) {
            path.push(spread);
            if spread_path_to(target, spread, fragment_usages, visited, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}
