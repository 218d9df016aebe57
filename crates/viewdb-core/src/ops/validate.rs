//! Input validation and default filling.

use crate::{
    error::{FieldError, FieldErrorKind, ValidateError},
    ops::matches::{Direction, MatchCtx, check_record_fields},
    value::{Value, ValueMap},
};
use viewdb_schema::registry::Registry;

///
/// NormalizedRecord
///
/// The write payload after validation: dates canonicalized, defaults left
/// absent for the producer, unknown fields rejected. Re-validating a
/// normalized record is a fixpoint.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedRecord {
    pub table: String,
    pub fields: ValueMap,
}

impl NormalizedRecord {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        Value::Object(self.fields.clone()).to_json()
    }
}

/// Validate a candidate write payload for `table`.
///
/// Per field: absent + defaulted stays absent (the producer fills it),
/// absent + optional stays absent, absent otherwise is `MissingField`;
/// present values are matched under input rules (id optional, native or
/// ISO-string dates, references as bare keys only). All field failures are
/// accumulated into one response.
pub fn validate_input(
    registry: &Registry,
    table: &str,
    payload: &Value,
) -> Result<NormalizedRecord, ValidateError> {
    let meta = registry.resolve(table)?;

    let Value::Object(map) = payload else {
        return Err(ValidateError::Fields(vec![FieldError::new(
            "",
            FieldErrorKind::TypeMismatch {
                expected: format!("{table} record"),
                found: payload.kind(),
            },
        )]));
    };

    let ctx = MatchCtx {
        registry,
        direction: Direction::Input,
    };

    let normalized = check_record_fields(&ctx, meta, map, "", false)
        .map_err(ValidateError::Fields)?;

    let Value::Object(fields) = normalized else {
        unreachable!("record check always yields an object");
    };

    Ok(NormalizedRecord {
        table: table.to_string(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewdb_schema::{
        node::{FieldMeta, FieldType, TableMeta},
        types::Primitive,
    };

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(TableMeta::new("category").field("name", FieldType::simple(Primitive::Text)))
            .expect("registration should succeed");
        registry
            .register(
                TableMeta::new("product")
                    .field("name", FieldType::simple(Primitive::Text))
                    .field(
                        "category",
                        FieldType::option(FieldType::record("category")),
                    )
                    .field("unit_in_package", FieldType::simple(Primitive::Number))
                    .field_meta(
                        "created",
                        FieldMeta::new(FieldType::simple(Primitive::Date)).with_default(),
                    ),
            )
            .expect("registration should succeed");

        registry
    }

    #[test]
    fn minimal_payload_validates_with_absent_optionals() {
        let payload = Value::from_json(serde_json::json!({
            "name": "Apple",
            "unit_in_package": 6,
        }));

        let record = validate_input(&registry(), "product", &payload)
            .expect("payload with absent id/category/default should validate");

        assert_eq!(record.table, "product");
        assert_eq!(record.get("name"), Some(&Value::from("Apple")));
        assert!(record.get("id").is_none(), "id stays unset on input");
        assert!(record.get("category").is_none());
        assert!(
            record.get("created").is_none(),
            "defaulted field is left for the producer"
        );
    }

    #[test]
    fn failures_accumulate_in_one_pass() {
        let payload = Value::from_json(serde_json::json!({
            "unit_in_package": "six",
            "color": "red",
        }));

        let err = validate_input(&registry(), "product", &payload)
            .expect_err("three independent problems should fail");
        let errs = err.field_errors();

        assert_eq!(errs.len(), 3, "missing name, bad number, unknown field");
        assert!(errs.iter().any(|e| e.path == "name"
            && e.kind == FieldErrorKind::MissingField));
        assert!(errs.iter().any(|e| e.path == "unit_in_package"
            && matches!(e.kind, FieldErrorKind::TypeMismatch { .. })));
        assert!(errs.iter().any(|e| e.path == "color"
            && e.kind == FieldErrorKind::UnknownField));
    }

    #[test]
    fn normalization_is_idempotent() {
        let payload = Value::from_json(serde_json::json!({
            "name": "Apple",
            "category": "c1",
            "unit_in_package": 6,
            "created": "2024-02-29",
        }));

        let registry = registry();
        let once = validate_input(&registry, "product", &payload)
            .expect("payload should validate");
        let twice = validate_input(&registry, "product", &once.clone().into_value())
            .expect("normalized output should re-validate");

        assert_eq!(once, twice, "normalization must be a fixpoint");
    }

    #[test]
    fn unknown_table_is_a_registry_error() {
        let err = validate_input(&registry(), "ghost", &Value::Object(ValueMap::new()))
            .expect_err("unknown table must fail");
        assert!(matches!(err, ValidateError::Registry(_)));
    }
}
