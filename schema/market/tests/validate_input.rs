//! Input validation against the market schema.

mod common;

use common::json;
use viewdb::prelude::{
    FieldErrorKind, Registry, RegistryError, ValidateError, Value, validate_input,
};
use viewdb_market_fixtures::{market_registry, tables};

#[test]
fn minimal_product_payload_validates_without_id_or_category() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "name": "Apple",
        "package": "g1",
        "unit": "u1",
        "unit_in_package": 6,
    }));

    let record = validate_input(&registry, "product", &payload)
        .expect("absent id and absent optional category should validate");

    assert_eq!(record.table, "product");
    assert!(record.get("id").is_none(), "id stays unset until assigned");
    assert!(record.get("category").is_none());
    assert_eq!(record.get("name"), Some(&Value::from("Apple")));
}

#[test]
fn offer_accepts_iso_text_and_normalizes_it() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "date": "2024-03-09",
        "price_per_package": 12.5,
        "price_per_unit": 2.5,
        "product": "p1",
        "shop": "s1",
    }));

    let record = validate_input(&registry, "offer", &payload)
        .expect("a complete offer payload should validate");
    assert_eq!(
        record.get("date"),
        Some(&Value::from("2024-03-09")),
        "the stored form is the canonical ISO string"
    );
}

#[test]
fn expanded_reference_is_rejected_on_write() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "date": "2024-03-09",
        "price_per_package": 12.5,
        "price_per_unit": 2.5,
        "product": {"id": "p1", "name": "Apple"},
        "shop": "s1",
    }));

    let err = validate_input(&registry, "offer", &payload)
        .expect_err("inline product record must not validate on input");
    let errs = err.field_errors();

    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].path, "product");
    assert_eq!(errs[0].kind, FieldErrorKind::UnexpectedExpansion);
}

#[test]
fn category_normalizes_dates_through_nested_shapes() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "name": "Fruit",
        "temp": {"alma": "golden"},
        "tempis": [{"korte": {"mag": ["2024-01-02"]}}, {"korte": {}}],
        "temps": ["2024-01-01", "2024-06-30"],
    }));

    let record = validate_input(&registry, "category", &payload)
        .expect("nested category payload should validate");

    assert_eq!(
        record.get("temps"),
        Some(&Value::List(vec![
            Value::from("2024-01-01"),
            Value::from("2024-06-30"),
        ]))
    );

    // second tempis entry left `mag` absent; the option permits that
    let tempis = record.get("tempis").expect("tempis survives normalization");
    let Value::List(entries) = tempis else {
        panic!("tempis should stay a list");
    };
    assert_eq!(entries.len(), 2);
}

#[test]
fn every_problem_is_reported_in_one_pass() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "date": "tomorrow",
        "price_per_package": "high",
        "product": "p1",
        "shop": "s1",
        "discounted": true,
    }));

    let err = validate_input(&registry, "offer", &payload)
        .expect_err("four independent problems should fail");
    let errs = err.field_errors();

    assert_eq!(errs.len(), 4, "bad date, bad number, missing field, unknown field");
    assert!(errs.iter().any(|e| e.path == "date"));
    assert!(errs.iter().any(|e| e.path == "price_per_package"));
    assert!(errs.iter().any(|e| e.path == "price_per_unit"
        && e.kind == FieldErrorKind::MissingField));
    assert!(errs.iter().any(|e| e.path == "discounted"
        && e.kind == FieldErrorKind::UnknownField));
}

#[test]
fn work_payload_keeps_duration_and_link_fields() {
    let registry = market_registry();
    let payload = json(serde_json::json!({
        "activity": "mowing",
        "date": "2024-04-01",
        "duration": 5_400_000u64,
        "in": "w1",
        "out": "j1",
    }));

    let record = validate_input(&registry, "work", &payload)
        .expect("a complete work payload should validate");
    assert_eq!(record.get("in"), Some(&Value::from("w1")));
    assert_eq!(record.get("out"), Some(&Value::from("j1")));
}

#[test]
fn duplicate_offer_table_fails_second_registration() {
    let mut registry = market_registry();

    let err = registry
        .register(tables::offer())
        .expect_err("second 'offer' registration must fail");
    assert_eq!(err, RegistryError::DuplicateTable("offer".to_string()));
}

#[test]
fn unknown_table_surfaces_as_a_registry_error() {
    let registry = market_registry();
    let err = validate_input(&registry, "basket", &json(serde_json::json!({})))
        .expect_err("unregistered table must fail");
    assert!(matches!(
        err,
        ValidateError::Registry(RegistryError::UnknownTable(_))
    ));
}

#[test]
fn client_supplied_id_is_kept_when_key_shaped() {
    let registry = market_registry();
    let payload = json(serde_json::json!({"id": "u7", "name": "kg"}));

    let record = validate_input(&registry, "unit", &payload)
        .expect("client-chosen ids are legal on input");
    assert_eq!(record.get("id"), Some(&Value::from("u7")));

    let bad = json(serde_json::json!({"id": 7, "name": "kg"}));
    let err = validate_input(&registry, "unit", &bad)
        .expect_err("non-key ids must fail");
    assert!(matches!(
        err.field_errors()[0].kind,
        FieldErrorKind::InvalidKey { .. }
    ));
}

#[test]
fn validating_against_an_empty_registry_never_panics() {
    let registry = Registry::new();
    assert!(validate_input(&registry, "product", &json(serde_json::json!({}))).is_err());
}
