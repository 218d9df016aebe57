//! Generic traversal over the descriptor algebra.
//!
//! Walkers drive a [`Visitor`] through every node of a table descriptor,
//! building dotted/indexed routes as they go (`category.tempis[].korte`).
//! The `match` in [`walk_type`] is exhaustive over [`FieldType`], so adding
//! a variant breaks every walker at compile time rather than at runtime.

use crate::node::{FieldMeta, FieldType, Literal, TableMeta};

///
/// Visitor
///

pub trait Visitor {
    fn visit_table(&mut self, _table: &TableMeta) {}

    fn visit_field(&mut self, _route: &str, _meta: &FieldMeta) {}

    fn visit_type(&mut self, _route: &str, _ty: &FieldType) {}
}

/// Drive a visitor through a table and all of its nested descriptors.
pub fn walk_table<V: Visitor>(visitor: &mut V, table: &TableMeta) {
    visitor.visit_table(table);

    for (name, meta) in table.fields.iter() {
        let route = format!("{}.{name}", table.name);
        walk_field(visitor, &route, meta);
    }
}

pub fn walk_field<V: Visitor>(visitor: &mut V, route: &str, meta: &FieldMeta) {
    visitor.visit_field(route, meta);
    walk_type(visitor, route, &meta.ty);
}

pub fn walk_type<V: Visitor>(visitor: &mut V, route: &str, ty: &FieldType) {
    visitor.visit_type(route, ty);

    match ty {
        FieldType::Array { item } => walk_type(visitor, &format!("{route}[]"), item),
        FieldType::Literal(Literal::Array { items }) => {
            for (i, item) in items.iter().enumerate() {
                walk_type(visitor, &format!("{route}[{i}]"), item);
            }
        }
        FieldType::Literal(Literal::Number { .. } | Literal::String { .. })
        | FieldType::NumberEnum { .. }
        | FieldType::Record { .. }
        | FieldType::Simple(_)
        | FieldType::StringEnum { .. } => {}
        FieldType::Object { fields: None } => {}
        FieldType::Object {
            fields: Some(fields),
        } => {
            for (name, meta) in fields.iter() {
                walk_field(visitor, &format!("{route}.{name}"), meta);
            }
        }
        FieldType::Option { inner } => walk_type(visitor, route, inner),
        FieldType::Union { variants } => {
            for variant in variants {
                walk_type(visitor, route, variant);
            }
        }
    }
}
