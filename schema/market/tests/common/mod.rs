//! Shared seed data for the market integration tests.
#![allow(dead_code)] // each test binary uses a different slice of this module

use viewdb::prelude::{MemoryStore, Value};

pub fn json(value: serde_json::Value) -> Value {
    Value::from_json(value)
}

/// One consistent record per table, referencing each other by key.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert(
        "category",
        "c1",
        json(serde_json::json!({
            "id": "c1",
            "name": "Fruit",
            "temp": {"alma": "golden"},
            "tempis": [{"korte": {"mag": ["2024-01-02"]}}],
            "temps": ["2024-01-01"],
        })),
    );
    store.insert(
        "unit",
        "u1",
        json(serde_json::json!({"id": "u1", "name": "kg"})),
    );
    store.insert(
        "package",
        "g1",
        json(serde_json::json!({"id": "g1", "name": "crate"})),
    );
    store.insert(
        "shop",
        "s1",
        json(serde_json::json!({"id": "s1", "name": "Corner Shop"})),
    );
    store.insert(
        "product",
        "p1",
        json(serde_json::json!({
            "id": "p1",
            "name": "Apple",
            "category": "c1",
            "package": "g1",
            "unit": "u1",
            "unit_in_package": 6,
        })),
    );
    store.insert(
        "offer",
        "o1",
        json(serde_json::json!({
            "id": "o1",
            "date": "2024-03-09",
            "price_per_package": 12.0,
            "price_per_unit": 2.0,
            "product": "p1",
            "shop": "s1",
        })),
    );
    store.insert(
        "worker",
        "w1",
        json(serde_json::json!({"id": "w1", "name": "Ann"})),
    );
    store.insert(
        "project",
        "j1",
        json(serde_json::json!({"id": "j1", "name": "Garden"})),
    );
    store.insert(
        "work",
        "k1",
        json(serde_json::json!({
            "id": "k1",
            "activity": "mowing",
            "date": "2024-04-01",
            "duration": 5_400_000u64,
            "in": "w1",
            "out": "j1",
        })),
    );

    store
}
