use crate::loc;
use indexmap::IndexSet;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) values: IndexSet<String>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in the order they were declared (values
    /// added by `extend enum` follow the base definition's values).
    pub fn values(&self) -> &IndexSet<String> {
        &self.values
    }
}
