use crate::inference::InferenceError;
use crate::inference::RecordEntry;
use crate::inference::TypeDescriptor;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, InferenceError>;

/// Synthesizes the arguments type of an operation from its variable
/// definitions.
pub(super) struct ArgumentsTypeBuilder<'schema> {
    /// Input objects currently being expanded, innermost last.
    expanding: Vec<&'schema str>,
    schema: &'schema Schema,
}
impl<'schema> ArgumentsTypeBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            expanding: vec![],
            schema,
        }
    }

    pub fn build(mut self, variables: &IndexMap<String, Variable>) -> Result<TypeDescriptor> {
        if variables.is_empty() {
            return Ok(TypeDescriptor::EmptyRecord);
        }

        let mut entries = Vec::with_capacity(variables.len());
        for (name, variable) in variables {
            let descriptor = self.input_descriptor(name, variable.type_annotation())?;
            entries.push(RecordEntry::new(name, descriptor, variable.is_optional()));
        }

        Ok(TypeDescriptor::Record(entries))
    }

    fn input_descriptor(
        &mut self,
        variable_name: &str,
        type_annotation: &TypeAnnotation,
    ) -> Result<TypeDescriptor> {
        let schema = self.schema;
        let type_name = type_annotation.innermost_type_name();
        let named_type = schema.lookup_type(type_name).ok_or_else(|| {
            InferenceError::UndefinedType {
                type_name: type_name.to_string(),
            }
        })?;

        let named = match named_type {
            GraphQLType::Enum(enum_type) =>
                TypeDescriptor::EnumLiteral(enum_type.name().to_string()),
            GraphQLType::InputObject(inputobj_type) =>
                self.input_object_descriptor(variable_name, inputobj_type)?,
            GraphQLType::Scalar(scalar_type) =>
                TypeDescriptor::Scalar(scalar_type.name().to_string()),
            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) =>
                return Err(InferenceError::NonInputVariableType {
                    type_kind: named_type.type_kind(),
                    type_name: type_name.to_string(),
                    variable_name: variable_name.to_string(),
                }),
        };

        Ok(TypeDescriptor::from_type_annotation(type_annotation, named))
    }

    /// Expand an input object into a record of its fields. An input object
    /// that refers back to one already being expanded becomes a
    /// [`Reference`](TypeDescriptor::Reference) instead.
    fn input_object_descriptor(
        &mut self,
        variable_name: &str,
        inputobj_type: &'schema InputObjectType,
    ) -> Result<TypeDescriptor> {
        let name = inputobj_type.name();
        if self.expanding.contains(&name) {
            return Ok(TypeDescriptor::Reference(name.to_string()));
        }

        self.expanding.push(name);
        let mut entries = Vec::with_capacity(inputobj_type.fields().len());
        for (field_name, field) in inputobj_type.fields() {
            let descriptor = self.input_descriptor(variable_name, field.type_annotation())?;
            let optional = field.type_annotation().nullable() || field.default_value().is_some();
            entries.push(RecordEntry::new(field_name, descriptor, optional));
        }
        self.expanding.pop();

        Ok(TypeDescriptor::Record(entries))
    }
}
