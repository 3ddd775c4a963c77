use crate::loc;
use crate::schema::Schema;
use crate::types::ObjectType;
use indexmap::IndexSet;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) members: IndexSet<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// An ordered set of the names of each member type of this union.
    ///
    /// The order matches the order members were listed in the schema. Members
    /// added from type extensions follow the base definition's members.
    pub fn member_type_names(&self) -> &IndexSet<String> {
        &self.members
    }

    /// The member [`ObjectType`]s of this union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema ObjectType> {
        self.members.iter()
            .filter_map(|name| schema.object_type(name))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
