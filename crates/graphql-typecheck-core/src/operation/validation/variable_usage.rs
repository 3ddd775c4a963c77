use crate::types::TypeAnnotation;

/// A place in a document where a variable is passed as (part of) an
/// argument value.
#[derive(Clone, Debug)]
pub(super) struct VariableUsage<'a> {
    pub location_has_default: bool,
    pub location_type: TypeAnnotation,
    pub name: &'a str,
    pub position: graphql_parser::Pos,
}

/// A nullable variable may flow into a non-null position only when either
/// side supplies a non-null default.
pub(super) fn is_variable_usage_allowed(
    variable_type: &TypeAnnotation,
    variable_has_default: bool,
    location_type: &TypeAnnotation,
    location_has_default: bool,
) -> bool {
    if !location_type.nullable() && variable_type.nullable() {
        if !variable_has_default && !location_has_default {
            return false;
        }
        return is_type_subtype_of(variable_type, &location_type.to_nullable());
    }
    is_type_subtype_of(variable_type, location_type)
}

fn is_type_subtype_of(maybe_subtype: &TypeAnnotation, super_type: &TypeAnnotation) -> bool {
    if !super_type.nullable() {
        return !maybe_subtype.nullable() && is_type_subtype_of(
            &maybe_subtype.to_nullable(),
            &super_type.to_nullable(),
        );
    }
    if !maybe_subtype.nullable() {
        return is_type_subtype_of(&maybe_subtype.to_nullable(), super_type);
    }

    match (maybe_subtype, super_type) {
        (TypeAnnotation::List(sub), TypeAnnotation::List(sup)) =>
            is_type_subtype_of(sub.inner_type_annotation(), sup.inner_type_annotation()),
        (TypeAnnotation::Named(sub), TypeAnnotation::Named(sup)) =>
            sub.graphql_type_name() == sup.graphql_type_name(),
        _ => false,
    }
}
