use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;
use inherent::inherent;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SchemaDefLocation;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> &Vec<String>;
    fn name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The fields of this type in declaration order. Every object and
    /// interface type carries an implicit `__typename: String!` field in
    /// first position.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> &Vec<String> {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
