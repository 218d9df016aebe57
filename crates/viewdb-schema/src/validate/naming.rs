use crate::{
    MAX_FIELD_NAME_LEN, MAX_TABLE_NAME_LEN,
    error::ErrorTree,
    node::{FieldMeta, TableMeta},
    registry::Registry,
    visit::{Visitor, walk_table},
};

/// Ensure table names are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_table_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("table name is empty".to_string());
    }
    if name.len() > MAX_TABLE_NAME_LEN {
        return Err(format!(
            "table name '{name}' exceeds max length {MAX_TABLE_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("table name '{name}' must be ASCII"));
    }

    Ok(())
}

/// Ensure field names are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_field_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("field name is empty".to_string());
    }
    if name.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field name '{name}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("field name '{name}' must be ASCII"));
    }

    Ok(())
}

pub(crate) fn validate_naming(registry: &Registry, errs: &mut ErrorTree) {
    for (name, table) in registry.tables() {
        if let Err(msg) = validate_table_name(name) {
            errs.add_at(name, msg);
        }

        let mut visitor = NamingVisitor { errs };
        walk_table(&mut visitor, table);
    }
}

struct NamingVisitor<'a> {
    errs: &'a mut ErrorTree,
}

impl Visitor for NamingVisitor<'_> {
    fn visit_field(&mut self, route: &str, _meta: &FieldMeta) {
        // the route's last dotted segment is the field's own name
        let name = route.rsplit('.').next().unwrap_or(route);

        if let Err(msg) = validate_field_name(name) {
            self.errs.add_at(route, msg);
        }
    }

    fn visit_table(&mut self, _table: &TableMeta) {}
}
