//! Schema inference: the narrowest descriptor matching a sample value.
//!
//! Used for introspection and codegen tooling. Inference is approximate by
//! contract: heterogeneous lists widen to a union of observed shapes, and
//! constants are never narrowed to literals (a sample is evidence of a
//! type, not of a value).

use crate::{store::RecordStore, value::Value};
use viewdb_schema::{
    node::{FieldMeta, FieldMetas, FieldType},
    registry::Registry,
    types::Primitive,
};

/// Infer the narrowest descriptor for a sample value against a catalog.
/// Key-shaped values that resolve in catalog tables infer `record`
/// references; everything else infers structurally.
#[must_use]
pub fn describe_value<S: RecordStore>(
    registry: &Registry,
    store: &S,
    value: &Value,
) -> FieldType {
    match value {
        Value::Bool(_) => FieldType::simple(Primitive::Boolean),
        Value::Bytes(_) => FieldType::simple(Primitive::Bytes),
        Value::Date(_) => FieldType::simple(Primitive::Date),
        Value::Decimal(_) => FieldType::simple(Primitive::Decimal),
        Value::Duration(_) => FieldType::simple(Primitive::Duration),
        Value::Float64(_) | Value::Int(_) | Value::Uint(_) => {
            FieldType::simple(Primitive::Number)
        }
        Value::List(elements) => {
            let mut variants: Vec<FieldType> = Vec::new();
            for element in elements {
                let described = describe_value(registry, store, element);
                if !variants.contains(&described) {
                    variants.push(described);
                }
            }

            match variants.len() {
                0 => FieldType::array(FieldType::simple(Primitive::Any)),
                1 => FieldType::array(variants.remove(0)),
                _ => FieldType::array(FieldType::Union { variants }),
            }
        }
        Value::Null => FieldType::simple(Primitive::Null),
        Value::Object(map) => {
            if map.is_empty() {
                return FieldType::untyped_object();
            }

            let fields: FieldMetas = map
                .iter()
                .map(|(name, v)| {
                    (name, FieldMeta::new(describe_value(registry, store, v)))
                })
                .collect();

            FieldType::object(fields)
        }
        Value::Text(_) | Value::Uuid(_) => {
            let tables = probe_tables(registry, store, value);
            if !tables.is_empty() {
                return FieldType::Record { tables };
            }

            match value {
                Value::Uuid(_) => FieldType::simple(Primitive::Uuid),
                Value::Text(s) if crate::types::Date::parse(s).is_some() => {
                    FieldType::simple(Primitive::Date)
                }
                _ => FieldType::simple(Primitive::Text),
            }
        }
    }
}

/// All catalog tables whose key space contains this value, in name order.
fn probe_tables<S: RecordStore>(registry: &Registry, store: &S, value: &Value) -> Vec<String> {
    let Some(key) = value.as_key() else {
        return Vec::new();
    };

    registry
        .tables()
        .filter(|(name, _)| store.contains(name, &key))
        .map(|(name, _)| name.to_string())
        .collect()
}
