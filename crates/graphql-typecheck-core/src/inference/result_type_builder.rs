use crate::inference::InferenceError;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, InferenceError>;

/// Every selection of one response key within a selection set, in document
/// order. Selecting the same key twice yields one entry.
struct CollectedField<'doc> {
    /// True only if every selection of this key may be skipped.
    conditional: bool,
    selections: Vec<&'doc FieldSelection>,
}

/// Synthesizes the result type of an operation from its selection set.
pub(super) struct ResultTypeBuilder<'schema> {
    schema: &'schema Schema,
}
impl<'schema> ResultTypeBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn build(&self, selection_set: &SelectionSet) -> Result<TypeDescriptor> {
        let root_type = self.lookup_type(selection_set.type_name())?;
        self.selection_set_descriptor(root_type, &[selection_set])
    }

    /// Collect every field in `selection_set` that applies to values of
    /// `parent_type`, descending into inline fragments.
    ///
    /// With `concrete_type` set, inline fragments whose type condition does
    /// not include that object type are skipped.
    fn collect_fields<'doc>(
        &self,
        concrete_type: Option<&ObjectType>,
        selection_set: &'doc SelectionSet,
        within_conditional: bool,
        fields: &mut IndexMap<&'doc str, CollectedField<'doc>>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    let conditional = within_conditional || field.is_conditional();
                    let collected = fields.entry(field.response_key())
                        .or_insert_with(|| CollectedField {
                            conditional,
                            selections: vec![],
                        });
                    collected.conditional &= conditional;
                    collected.selections.push(field);
                },

                Selection::InlineFragment(inline) => {
                    let applies = match (concrete_type, inline.type_condition()) {
                        (Some(object_type), Some(type_condition)) =>
                            self.schema.possible_types(type_condition)
                                .iter()
                                .any(|t| t.name() == object_type.name()),
                        _ => true,
                    };
                    if applies {
                        self.collect_fields(
                            concrete_type,
                            inline.selection_set(),
                            within_conditional || inline.is_conditional(),
                            fields,
                        );
                    }
                },
            }
        }
    }

    fn field_descriptor(
        &self,
        parent_type: &GraphQLType,
        concrete_type: Option<&ObjectType>,
        selections: &[&FieldSelection],
    ) -> Result<TypeDescriptor> {
        let Some(first) = selections.first() else {
            return Ok(TypeDescriptor::Record(vec![]));
        };

        if first.name() == "__typename" {
            return Ok(match concrete_type {
                Some(object_type) => TypeDescriptor::TypeName(object_type.name().to_string()),
                None => self.typename_descriptor(parent_type),
            });
        }

        let type_annotation = first.type_annotation();
        let inner_type = self.lookup_type(type_annotation.innermost_type_name())?;
        let sub_selections = selections.iter()
            .filter_map(|field| field.selection_set())
            .collect::<Vec<_>>();

        let named = match inner_type {
            GraphQLType::Enum(enum_type) => {
                if !sub_selections.is_empty() {
                    return Err(unexpected_selection_set(first));
                }
                TypeDescriptor::EnumLiteral(enum_type.name().to_string())
            },

            GraphQLType::Scalar(scalar_type) => {
                if !sub_selections.is_empty() {
                    return Err(unexpected_selection_set(first));
                }
                TypeDescriptor::Scalar(scalar_type.name().to_string())
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                if sub_selections.is_empty() {
                    return Err(InferenceError::MissingSelectionSet {
                        field_name: first.name().to_string(),
                        type_name: first.parent_type_name().to_string(),
                    });
                }
                self.selection_set_descriptor(inner_type, &sub_selections)?
            },

            GraphQLType::InputObject(_) => return Err(InferenceError::NonOutputFieldType {
                field_name: first.name().to_string(),
                type_kind: inner_type.type_kind(),
                type_name: inner_type.name().to_string(),
            }),
        };

        Ok(TypeDescriptor::from_type_annotation(type_annotation, named))
    }

    fn lookup_type(&self, type_name: &str) -> Result<&'schema GraphQLType> {
        self.schema.lookup_type(type_name).ok_or_else(|| InferenceError::UndefinedType {
            type_name: type_name.to_string(),
        })
    }

    fn record_descriptor(
        &self,
        parent_type: &GraphQLType,
        concrete_type: Option<&ObjectType>,
        selection_sets: &[&SelectionSet],
    ) -> Result<TypeDescriptor> {
        let mut fields = IndexMap::new();
        for selection_set in selection_sets {
            self.collect_fields(concrete_type, selection_set, false, &mut fields);
        }

        let mut entries = Vec::with_capacity(fields.len());
        for (response_key, collected) in fields {
            let descriptor = self.field_descriptor(
                parent_type,
                concrete_type,
                &collected.selections,
            )?;
            let optional = collected.conditional || descriptor.is_optional();
            entries.push(RecordEntry::new(response_key, descriptor, optional));
        }

        Ok(TypeDescriptor::Record(entries))
    }

    /// The descriptor for one or more selection sets made on `parent_type`
    /// (several when a field is selected more than once).
    ///
    /// Selections on an abstract type that narrow to specific object types
    /// produce one record per possible object type.
    fn selection_set_descriptor(
        &self,
        parent_type: &GraphQLType,
        selection_sets: &[&SelectionSet],
    ) -> Result<TypeDescriptor> {
        let narrows = parent_type.is_abstract_type()
            && selection_sets.iter().any(|s| has_narrowing_fragment(parent_type.name(), s));
        if !narrows {
            return self.record_descriptor(parent_type, None, selection_sets);
        }

        let mut variants = vec![];
        for object_type in self.schema.possible_types(parent_type.name()) {
            variants.push(self.record_descriptor(parent_type, Some(object_type), selection_sets)?);
        }
        log::trace!(
            "`{}` narrows to {} possible type(s)",
            parent_type.name(),
            variants.len(),
        );
        Ok(TypeDescriptor::union_of(variants))
    }

    /// `__typename` selected on `parent_type` without narrowing: the name of
    /// any possible object type.
    fn typename_descriptor(&self, parent_type: &GraphQLType) -> TypeDescriptor {
        if let GraphQLType::Object(object_type) = parent_type {
            return TypeDescriptor::TypeName(object_type.name().to_string());
        }

        TypeDescriptor::union_of(
            self.schema.possible_types(parent_type.name())
                .iter()
                .map(|object_type| TypeDescriptor::TypeName(object_type.name().to_string())),
        )
    }
}

/// Indicates if `selection_set` contains an inline fragment whose type
/// condition is narrower than `parent_type_name`.
fn has_narrowing_fragment(parent_type_name: &str, selection_set: &SelectionSet) -> bool {
    selection_set.selections().iter().any(|selection| match selection {
        Selection::Field(_) => false,
        Selection::InlineFragment(inline) => match inline.type_condition() {
            Some(type_condition) if type_condition != parent_type_name => true,
            _ => has_narrowing_fragment(parent_type_name, inline.selection_set()),
        },
    })
}

fn unexpected_selection_set(field: &FieldSelection) -> InferenceError {
    InferenceError::UnexpectedSelectionSet {
        field_name: field.name().to_string(),
        type_name: field.parent_type_name().to_string(),
    }
}
