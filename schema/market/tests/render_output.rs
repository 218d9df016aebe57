//! Output rendering against the market schema and a seeded store.

mod common;

use common::{json, seeded_store};
use viewdb::prelude::{
    ExpansionPolicy, FieldType, RecordKey, RecordStore, RenderError, TableMeta, Value,
    render_output,
};
use viewdb_market_fixtures::market_registry;

fn stored(table: &str, key: &str) -> Value {
    seeded_store()
        .fetch(table, &RecordKey::from(key))
        .expect("seeded record should exist")
}

#[test]
fn product_renders_with_category_expanded() {
    let registry = market_registry();
    let store = seeded_store();

    let out = render_output(
        &registry,
        &store,
        "product",
        &stored("product", "p1"),
        &ExpansionPolicy::fields(["category"], 1),
    )
    .expect("product render should succeed");

    let map = out.as_object().expect("output is an object");
    assert_eq!(map.get("id"), Some(&Value::from("p1")));
    assert_eq!(map.get("name"), Some(&Value::from("Apple")));

    let category = map
        .get("category")
        .and_then(Value::as_object)
        .expect("category should be inlined");
    assert_eq!(category.get("id"), Some(&Value::from("c1")));
    assert_eq!(category.get("name"), Some(&Value::from("Fruit")));

    // fields outside the expansion set keep their bare keys
    assert_eq!(map.get("package"), Some(&Value::from("g1")));
    assert_eq!(map.get("unit"), Some(&Value::from("u1")));
}

#[test]
fn disabled_expansion_never_returns_nested_objects() {
    let registry = market_registry();
    let store = seeded_store();

    let out = render_output(
        &registry,
        &store,
        "offer",
        &stored("offer", "o1"),
        &ExpansionPolicy::none(),
    )
    .expect("offer render should succeed");

    let map = out.as_object().expect("output is an object");
    assert_eq!(map.get("product"), Some(&Value::from("p1")));
    assert_eq!(map.get("shop"), Some(&Value::from("s1")));
    assert_eq!(
        map.get("date"),
        Some(&Value::from("2024-03-09")),
        "dates always render canonically"
    );
}

#[test]
fn expansion_chains_until_depth_is_exhausted_then_falls_back_to_keys() {
    let registry = market_registry();
    let store = seeded_store();

    // depth 2: offer → product expands, product → category expands
    let deep = render_output(
        &registry,
        &store,
        "offer",
        &stored("offer", "o1"),
        &ExpansionPolicy::all(2),
    )
    .expect("deep render should succeed");
    let product = deep
        .as_object()
        .and_then(|m| m.get("product"))
        .and_then(Value::as_object)
        .expect("product should be inlined at depth 2");
    assert!(
        product.get("category").and_then(Value::as_object).is_some(),
        "second level should also be expanded"
    );

    // depth 1: offer → product expands, product → category stays a key
    let shallow = render_output(
        &registry,
        &store,
        "offer",
        &stored("offer", "o1"),
        &ExpansionPolicy::all(1),
    )
    .expect("depth exhaustion must never error");
    let product = shallow
        .as_object()
        .and_then(|m| m.get("product"))
        .and_then(Value::as_object)
        .expect("product should be inlined at depth 1");
    assert_eq!(
        product.get("category"),
        Some(&Value::from("c1")),
        "past the depth limit the bare key is rendered"
    );
}

#[test]
fn nested_category_dates_render_as_strings() {
    let registry = market_registry();
    let store = seeded_store();

    let out = render_output(
        &registry,
        &store,
        "category",
        &stored("category", "c1"),
        &ExpansionPolicy::none(),
    )
    .expect("category render should succeed");

    let map = out.as_object().expect("output is an object");
    assert_eq!(
        map.get("temps"),
        Some(&Value::List(vec![Value::from("2024-01-01")]))
    );
}

#[test]
fn missing_identifier_aborts_the_render() {
    let registry = market_registry();
    let store = seeded_store();

    let corrupt = json(serde_json::json!({"name": "kg"}));
    let err = render_output(
        &registry,
        &store,
        "unit",
        &corrupt,
        &ExpansionPolicy::none(),
    )
    .expect_err("an output record without an id is corrupt");
    assert!(matches!(err, RenderError::MissingIdentifier { .. }));
}

#[test]
fn multi_table_reference_resolution_follows_the_hit_count() {
    let mut registry = market_registry();
    registry
        .register(
            TableMeta::new("assignment")
                .field("who", FieldType::record_of(["worker", "project"])),
        )
        .expect("registration should succeed");

    let mut store = seeded_store();
    let policy = ExpansionPolicy::all(1);

    // exactly one hit: w1 lives only in worker
    let assignment = json(serde_json::json!({"id": "a1", "who": "w1"}));
    let out = render_output(&registry, &store, "assignment", &assignment, &policy)
        .expect("unambiguous key should expand");
    let who = out
        .as_object()
        .and_then(|m| m.get("who"))
        .and_then(Value::as_object)
        .expect("worker should be inlined");
    assert_eq!(who.get("name"), Some(&Value::from("Ann")));

    // zero hits: key in neither candidate table
    let assignment = json(serde_json::json!({"id": "a2", "who": "ghost"}));
    let err = render_output(&registry, &store, "assignment", &assignment, &policy)
        .expect_err("unresolvable key must fail expansion");
    assert!(matches!(err, RenderError::UnresolvedReference { .. }));

    // two hits: the same key seeded into both candidate tables
    store.insert("worker", "dup", json(serde_json::json!({"id": "dup", "name": "Twin"})));
    store.insert("project", "dup", json(serde_json::json!({"id": "dup", "name": "Twin"})));
    let assignment = json(serde_json::json!({"id": "a3", "who": "dup"}));
    let err = render_output(&registry, &store, "assignment", &assignment, &policy)
        .expect_err("ambiguous key must not be silently resolved");
    let RenderError::AmbiguousReference { tables, .. } = err else {
        panic!("expected AmbiguousReference, got {err:?}");
    };
    assert_eq!(tables, vec!["worker".to_string(), "project".to_string()]);
}

#[test]
fn absent_optional_fields_stay_absent_in_output() {
    let registry = market_registry();
    let mut store = seeded_store();
    store.insert(
        "product",
        "p2",
        json(serde_json::json!({
            "id": "p2",
            "name": "Salt",
            "package": "g1",
            "unit": "u1",
            "unit_in_package": 1,
        })),
    );

    let salt = store
        .fetch("product", &RecordKey::from("p2"))
        .expect("seeded record should exist");
    let out = render_output(&registry, &store, "product", &salt, &ExpansionPolicy::all(3))
        .expect("category-less product should render");

    let map = out.as_object().expect("output is an object");
    assert!(
        map.get("category").is_none(),
        "absence propagates; it never becomes null"
    );
}
