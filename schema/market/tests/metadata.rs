//! The descriptor shapes double as the schema-metadata interchange format.

mod common;

use common::seeded_store;
use viewdb::prelude::{
    FieldType, TableMetaFromDb, Value, describe_value, export_registry_pretty, import_registry,
};
use viewdb_market_fixtures::{market_registry, tables};

#[test]
fn market_registry_survives_an_export_import_round_trip() {
    let registry = market_registry();
    let document = export_registry_pretty(&registry).expect("export should succeed");

    let rebuilt = import_registry(&document).expect("exported document should import");
    assert_eq!(rebuilt.len(), registry.len());

    for (name, table) in registry.tables() {
        assert_eq!(
            rebuilt.resolve(name).expect("table should survive"),
            table,
            "descriptor for '{name}' must round-trip untouched"
        );
    }
}

#[test]
fn exported_document_uses_the_tagged_wire_vocabulary() {
    let registry = market_registry();
    let document = viewdb::prelude::export_registry(&registry).expect("export should succeed");

    let product_fields = &document["product"]["fields"];
    let category = product_fields
        .as_array()
        .and_then(|fields| {
            fields
                .iter()
                .find(|f| f["name"] == "category")
        })
        .expect("product.category should be exported");

    assert_eq!(category["type"]["name"], "option");
    assert_eq!(category["type"]["inner"]["name"], "record");
    assert_eq!(category["type"]["inner"]["tables"][0], "category");
}

#[test]
fn a_table_descriptor_can_be_stored_like_any_record() {
    let stored = TableMetaFromDb::new("table_meta:offer", tables::offer());
    let wire = serde_json::to_value(&stored).expect("descriptor should serialize");

    let back: TableMetaFromDb =
        serde_json::from_value(wire).expect("stored descriptor should deserialize");
    assert_eq!(back.id, "table_meta:offer");
    assert_eq!(back.into_meta(), tables::offer());
}

#[test]
fn describing_a_stored_product_recovers_its_reference_structure() {
    let registry = market_registry();
    let store = seeded_store();

    let sample = Value::from_json(serde_json::json!({
        "name": "Apple",
        "category": "c1",
        "package": "g1",
        "unit": "u1",
        "unit_in_package": 6,
    }));

    let described = describe_value(&registry, &store, &sample);
    let FieldType::Object {
        fields: Some(fields),
    } = described
    else {
        panic!("a record sample should describe as a typed object");
    };

    assert_eq!(
        fields.get("category").map(|m| &m.ty),
        Some(&FieldType::record("category")),
        "a key resolving in exactly one table infers that reference"
    );
    assert_eq!(
        fields.get("unit_in_package").map(|m| &m.ty),
        Some(&FieldType::simple(viewdb::prelude::Primitive::Number))
    );
}
