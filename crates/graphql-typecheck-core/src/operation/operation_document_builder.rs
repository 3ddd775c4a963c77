use crate::ast;
use crate::loc;
use crate::operation::validation::lookup_field;
use crate::operation::validation::OperationParts;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::OperationDocument;
use crate::operation::QueryError;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::ValidationError;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, QueryError>;

/// Converts a validated operation definition into an [`OperationDocument`].
///
/// The builder relies on validation having succeeded; anything validation
/// should have caught is still reported as [`QueryError::InvalidDocument`]
/// rather than a panic.
pub(crate) struct OperationDocumentBuilder<'schema> {
    schema: &'schema Schema,
}
impl<'schema> OperationDocumentBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn build(&self, op: &ast::query::OperationDefinition) -> Result<OperationDocument> {
        let parts = OperationParts::from_ast(op);
        let root_type = self.schema
            .root_operation_type(parts.kind)
            .and_then(|root| self.schema.lookup_type(root.name()))
            .ok_or_else(|| invalid(
                format!("Schema is not configured to execute {} operation.", parts.kind),
                parts.position,
            ))?;

        let variables = parts.variable_definitions.iter()
            .map(|var_def| (var_def.name.to_string(), Variable {
                def_location: loc::FilePosition::from_pos(None, var_def.position),
                default_value: var_def.default_value.as_ref().map(|value| value.to_string()),
                name: var_def.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(&var_def.var_type),
            }))
            .collect();

        Ok(OperationDocument {
            name: parts.name.map(str::to_string),
            selection_set: self.build_selection_set(root_type, parts.selection_set)?,
            variables,
        })
    }

    fn build_field(
        &self,
        parent_type: &GraphQLType,
        field: &ast::query::Field,
    ) -> Result<FieldSelection> {
        let field_def = lookup_field(parent_type, field.name.as_str()).ok_or_else(|| invalid(
            format!("Cannot query field \"{}\" on type \"{}\".", field.name, parent_type.name()),
            field.position,
        ))?;
        let type_annotation = field_def.type_annotation().to_owned();

        let selection_set = if field.selection_set.items.is_empty() {
            None
        } else {
            let inner_type_name = type_annotation.innermost_type_name();
            let inner_type = self.schema.lookup_type(inner_type_name).ok_or_else(|| invalid(
                format!("Unknown type \"{inner_type_name}\"."),
                field.position,
            ))?;
            Some(self.build_selection_set(inner_type, &field.selection_set)?)
        };

        Ok(FieldSelection {
            alias: field.alias.to_owned(),
            arguments: field.arguments.iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            conditional: is_conditional(&field.directives),
            def_location: loc::FilePosition::from_pos(None, field.position),
            name: field.name.to_string(),
            parent_type_name: parent_type.name().to_string(),
            selection_set,
            type_annotation,
        })
    }

    fn build_inline_fragment(
        &self,
        parent_type: &GraphQLType,
        inline: &ast::query::InlineFragment,
    ) -> Result<InlineFragment> {
        let (fragment_type, type_condition) = match &inline.type_condition {
            None => (parent_type, None),
            Some(ast::query::TypeCondition::On(type_name)) => {
                let fragment_type = self.schema.lookup_type(type_name.as_str()).ok_or_else(|| {
                    invalid(format!("Unknown type \"{type_name}\"."), inline.position)
                })?;
                (fragment_type, Some(type_name.to_string()))
            },
        };

        Ok(InlineFragment {
            conditional: is_conditional(&inline.directives),
            def_location: loc::FilePosition::from_pos(None, inline.position),
            selection_set: self.build_selection_set(fragment_type, &inline.selection_set)?,
            type_condition,
        })
    }

    fn build_selection_set(
        &self,
        parent_type: &GraphQLType,
        ast_selection_set: &ast::query::SelectionSet,
    ) -> Result<SelectionSet> {
        use ast::query::Selection as AstSelection;

        let mut selections = Vec::with_capacity(ast_selection_set.items.len());
        for ast_selection in &ast_selection_set.items {
            selections.push(match ast_selection {
                AstSelection::Field(field) =>
                    Selection::Field(self.build_field(parent_type, field)?),
                AstSelection::InlineFragment(inline) =>
                    Selection::InlineFragment(self.build_inline_fragment(parent_type, inline)?),
                AstSelection::FragmentSpread(spread) => return Err(invalid(
                    format!("Unknown fragment \"{}\".", spread.fragment_name),
                    spread.position,
                )),
            });
        }

        Ok(SelectionSet {
            selections,
            type_name: parent_type.name().to_string(),
        })
    }
}

fn invalid(message: String, pos: graphql_parser::Pos) -> QueryError {
    QueryError::InvalidDocument(ValidationError::new(message, pos).to_string())
}

/// A selection is conditional when `@skip` or `@include` may drop it. A
/// literal `@skip(if: false)` or `@include(if: true)` never does.
fn is_conditional(directives: &[ast::query::Directive]) -> bool {
    use ast::query::Value;

    directives.iter().any(|directive| {
        let always_included = match directive.name.as_str() {
            "include" => Value::Boolean(true),
            "skip" => Value::Boolean(false),
            _ => return false,
        };
        let condition = directive.arguments.iter()
            .find(|(name, _)| name == "if")
            .map(|(_, value)| value);
        condition != Some(&always_included)
    })
}
