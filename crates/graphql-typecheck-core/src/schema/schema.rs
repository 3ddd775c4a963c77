use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// All directives usable against this [`Schema`], including the built-in
    /// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// All types defined within this [`Schema`] in declaration order,
    /// preceded by the built-in scalars.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    /// Indicates if some object type is a possible runtime type of both
    /// `type_name1` and `type_name2`. Used to decide whether a fragment
    /// with one type condition can ever apply inside a selection on the
    /// other.
    pub fn do_types_overlap(&self, type_name1: &str, type_name2: &str) -> bool {
        if type_name1 == type_name2 {
            return true;
        }
        let possible2 = self.possible_types(type_name2);
        self.possible_types(type_name1)
            .iter()
            .any(|t1| possible2.iter().any(|t2| t1.name() == t2.name()))
    }

    pub fn input_object_type(&self, name: &str) -> Option<&InputObjectType> {
        self.types.get(name).and_then(GraphQLType::as_input_object)
    }

    pub fn interface_type(&self, name: &str) -> Option<&InterfaceType> {
        self.types.get(name).and_then(GraphQLType::as_interface)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.types.get(name).and_then(GraphQLType::as_object)
    }

    /// The object types a value of type `type_name` may have at runtime, in
    /// schema declaration order.
    ///
    /// An object type's only possible type is itself. An interface's possible
    /// types are the object types that declare they implement it, and a
    /// union's are its members. Any other kind of type has none.
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj_type)) => vec![obj_type],
            Some(GraphQLType::Interface(_)) =>
                self.types.values()
                    .filter_map(GraphQLType::as_object)
                    .filter(|obj_type| obj_type.interface_names().iter().any(|i| i == type_name))
                    .collect(),
            Some(GraphQLType::Union(union_type)) => union_type.member_types(self),
            _ => vec![],
        }
    }

    /// Returns the root operation type for operations of `kind`, honoring any
    /// `schema { ... }` override of the default `Query`/`Mutation`/
    /// `Subscription` names. Only the query root is guaranteed to exist.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        let type_name = match kind {
            OperationKind::Mutation => self.mutation_type.as_deref()?,
            OperationKind::Query => self.query_type.as_str(),
            OperationKind::Subscription => self.subscription_type.as_deref()?,
        };
        self.object_type(type_name)
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }
}
