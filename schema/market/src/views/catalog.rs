use crate::views::link::{DateInput, RecordLink};
use serde::{Deserialize, Serialize};
use viewdb::prelude::RecordKey;

///
/// Category
///
/// Carries the nested `temp`/`tempis`/`temps` shapes; the inner date
/// fields follow the same input/output asymmetry as top-level ones.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
    pub temp: CategoryTemp,
    pub tempis: Vec<CategoryTempisInput>,
    pub temps: Vec<DateInput>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryOutput {
    pub id: RecordKey,
    pub name: String,
    pub temp: CategoryTemp,
    pub tempis: Vec<CategoryTempisOutput>,
    pub temps: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryTemp {
    pub alma: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryTempisInput {
    pub korte: CategoryKorteInput,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryTempisOutput {
    pub korte: CategoryKorteOutput,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryKorteInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<Vec<DateInput>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CategoryKorteOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<Vec<String>>,
}

///
/// Offer
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OfferInput {
    pub date: DateInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub price_per_package: f64,
    pub price_per_unit: f64,
    pub product: RecordKey,
    pub shop: RecordKey,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OfferOutput {
    pub date: String,
    pub id: RecordKey,
    pub price_per_package: f64,
    pub price_per_unit: f64,
    pub product: RecordLink<ProductOutput>,
    pub shop: RecordLink<ShopOutput>,
}

///
/// Package
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PackageInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PackageOutput {
    pub id: RecordKey,
    pub name: String,
}

///
/// Product
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProductInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RecordKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
    pub package: RecordKey,
    pub unit: RecordKey,
    pub unit_in_package: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProductOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RecordLink<CategoryOutput>>,
    pub id: RecordKey,
    pub name: String,
    pub package: RecordLink<PackageOutput>,
    pub unit: RecordLink<UnitOutput>,
    pub unit_in_package: f64,
}

///
/// Shop
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShopInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShopOutput {
    pub id: RecordKey,
    pub name: String,
}

///
/// Unit
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnitInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnitOutput {
    pub id: RecordKey,
    pub name: String,
}
