use crate::inference::TypeDescriptor;

/// The pair of types inferred for one query: what it returns and what
/// variables it accepts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct InferredTypes {
    pub(crate) arguments_type: TypeDescriptor,
    pub(crate) result_type: TypeDescriptor,
}
impl InferredTypes {
    pub fn new(result_type: TypeDescriptor, arguments_type: TypeDescriptor) -> Self {
        Self {
            arguments_type,
            result_type,
        }
    }

    /// A [`Record`](TypeDescriptor::Record) of the operation's variables, or
    /// [`EmptyRecord`](TypeDescriptor::EmptyRecord) when it declares none.
    pub fn arguments_type(&self) -> &TypeDescriptor {
        &self.arguments_type
    }

    pub fn result_type(&self) -> &TypeDescriptor {
        &self.result_type
    }
}
