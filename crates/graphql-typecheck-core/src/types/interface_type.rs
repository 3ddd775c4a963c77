use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        self.0.def_location()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> &Vec<String> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
