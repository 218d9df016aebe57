//! Table descriptors for the market schema.

use viewdb::prelude::{FieldMetas, FieldType, Primitive, Registry, TableMeta};

/// Build the full market registry. The result passes the closed-world
/// check; every reference target below is registered here.
#[must_use]
pub fn market_registry() -> Registry {
    [
        category(),
        offer(),
        package(),
        product(),
        project(),
        shop(),
        unit(),
        user(),
        work(),
        worker(),
    ]
    .into_iter()
    .collect()
}

fn named_table(name: &str) -> TableMeta {
    TableMeta::new(name).field("name", FieldType::simple(Primitive::Text))
}

#[must_use]
pub fn category() -> TableMeta {
    let korte: FieldMetas = [(
        "mag",
        FieldType::option(FieldType::array(FieldType::simple(Primitive::Date))),
    )]
    .into_iter()
    .collect();

    let tempis_item: FieldMetas = [("korte", FieldType::object(korte))].into_iter().collect();

    let temp: FieldMetas = [("alma", FieldType::simple(Primitive::Text))]
        .into_iter()
        .collect();

    named_table("category")
        .field("temp", FieldType::object(temp))
        .field("tempis", FieldType::array(FieldType::object(tempis_item)))
        .field("temps", FieldType::array(FieldType::simple(Primitive::Date)))
}

#[must_use]
pub fn offer() -> TableMeta {
    TableMeta::new("offer")
        .field("date", FieldType::simple(Primitive::Date))
        .field("price_per_package", FieldType::simple(Primitive::Number))
        .field("price_per_unit", FieldType::simple(Primitive::Number))
        .field("product", FieldType::record("product"))
        .field("shop", FieldType::record("shop"))
        .comment("one observed price of a product in a shop")
}

#[must_use]
pub fn package() -> TableMeta {
    named_table("package")
}

#[must_use]
pub fn product() -> TableMeta {
    named_table("product")
        .field(
            "category",
            FieldType::option(FieldType::record("category")),
        )
        .field("package", FieldType::record("package"))
        .field("unit", FieldType::record("unit"))
        .field("unit_in_package", FieldType::simple(Primitive::Number))
}

#[must_use]
pub fn project() -> TableMeta {
    named_table("project")
}

#[must_use]
pub fn shop() -> TableMeta {
    named_table("shop")
}

#[must_use]
pub fn unit() -> TableMeta {
    named_table("unit").comment("unit of measure")
}

#[must_use]
pub fn user() -> TableMeta {
    TableMeta::new("user")
        .field("email", FieldType::simple(Primitive::Text))
        .field("password", FieldType::simple(Primitive::Text))
}

#[must_use]
pub fn work() -> TableMeta {
    TableMeta::new("work")
        .field("activity", FieldType::simple(Primitive::Text))
        .field("date", FieldType::simple(Primitive::Date))
        .field("duration", FieldType::simple(Primitive::Duration))
        .field("in", FieldType::record("worker"))
        .field("out", FieldType::record("project"))
        .comment("one logged stretch of work on a project")
}

#[must_use]
pub fn worker() -> TableMeta {
    named_table("worker")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_all_ten_tables_and_validates() {
        let registry = market_registry();
        assert_eq!(registry.len(), 10);

        registry
            .validate()
            .expect("market schema should pass the closed-world check");
    }

    #[test]
    fn category_carries_the_nested_shapes() {
        let category = category();
        let tempis = category.get_field("tempis").expect("tempis is declared");
        assert!(matches!(tempis.ty, FieldType::Array { .. }));

        let temps = category.get_field("temps").expect("temps is declared");
        assert_eq!(
            temps.ty,
            FieldType::array(FieldType::simple(Primitive::Date))
        );
    }
}
