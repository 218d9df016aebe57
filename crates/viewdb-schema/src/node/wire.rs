//! Wire mapping for the descriptor algebra.
//!
//! The serialized format is the metadata interchange shape: every node is a
//! map tagged by `name`, enum unions ride on `name:"union"` plus an `enum`
//! tag, and literals on `name:"literal"` plus a `kind` tag. Field lists
//! serialize as ordered arrays of `{name, type, comment?, hasDefault?}`.

use crate::node::{FieldMeta, FieldMetas, FieldType, Literal};
use crate::types::Primitive;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de,
    ser::SerializeMap,
};
use std::ops::Not;

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        match self {
            Self::Simple(primitive) => {
                map.serialize_entry("name", primitive)?;
            }
            Self::Option { inner } => {
                map.serialize_entry("name", "option")?;
                map.serialize_entry("inner", inner)?;
            }
            Self::Object { fields } => {
                map.serialize_entry("name", "object")?;
                map.serialize_entry("fields", fields)?;
            }
            Self::Record { tables } => {
                map.serialize_entry("name", "record")?;
                map.serialize_entry("tables", tables)?;
            }
            Self::Array { item } => {
                map.serialize_entry("name", "array")?;
                map.serialize_entry("item", item)?;
            }
            Self::Union { variants } => {
                map.serialize_entry("name", "union")?;
                map.serialize_entry("variants", variants)?;
            }
            Self::StringEnum { variants } => {
                map.serialize_entry("name", "union")?;
                map.serialize_entry("enum", "string")?;
                map.serialize_entry("variants", variants)?;
            }
            Self::NumberEnum { variants } => {
                map.serialize_entry("name", "union")?;
                map.serialize_entry("enum", "number")?;
                map.serialize_entry("variants", variants)?;
            }
            Self::Literal(Literal::Number { value }) => {
                map.serialize_entry("name", "literal")?;
                map.serialize_entry("kind", "number")?;
                map.serialize_entry("value", value)?;
            }
            Self::Literal(Literal::String { value }) => {
                map.serialize_entry("name", "literal")?;
                map.serialize_entry("kind", "string")?;
                map.serialize_entry("value", value)?;
            }
            Self::Literal(Literal::Array { items }) => {
                map.serialize_entry("name", "literal")?;
                map.serialize_entry("kind", "array")?;
                map.serialize_entry("items", items)?;
            }
        }

        map.end()
    }
}

///
/// FieldTypeRaw
///
/// Permissive intermediate shape; `try_into_field_type` enforces the
/// per-tag requirements and produces the proper variant.
///

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldTypeRaw {
    name: String,

    #[serde(default)]
    inner: Option<Box<FieldType>>,

    #[serde(default)]
    fields: Option<FieldMetas>,

    #[serde(default)]
    tables: Option<Vec<String>>,

    #[serde(default)]
    item: Option<Box<FieldType>>,

    #[serde(default, rename = "enum")]
    enum_tag: Option<String>,

    #[serde(default)]
    kind: Option<String>,

    #[serde(default)]
    variants: Option<serde_json::Value>,

    #[serde(default)]
    value: Option<serde_json::Value>,

    #[serde(default)]
    items: Option<Vec<FieldType>>,
}

impl FieldTypeRaw {
    fn try_into_field_type(self) -> Result<FieldType, String> {
        match self.name.as_str() {
            "option" => {
                let inner = self.inner.ok_or("option requires 'inner'")?;
                Ok(FieldType::Option { inner })
            }
            "object" => Ok(FieldType::Object {
                fields: self.fields,
            }),
            "record" => {
                let tables = self.tables.ok_or("record requires 'tables'")?;
                Ok(FieldType::Record { tables })
            }
            "array" => {
                let item = self.item.ok_or("array requires 'item'")?;
                Ok(FieldType::Array { item })
            }
            "union" => {
                let variants = self.variants.ok_or("union requires 'variants'")?;

                match self.enum_tag.as_deref() {
                    None => {
                        let variants: Vec<FieldType> = serde_json::from_value(variants)
                            .map_err(|e| format!("union variants: {e}"))?;
                        Ok(FieldType::Union { variants })
                    }
                    Some("string") => {
                        let variants: Vec<String> = serde_json::from_value(variants)
                            .map_err(|e| format!("string enum variants: {e}"))?;
                        Ok(FieldType::StringEnum { variants })
                    }
                    Some("number") => {
                        let variants: Vec<f64> = serde_json::from_value(variants)
                            .map_err(|e| format!("number enum variants: {e}"))?;
                        Ok(FieldType::NumberEnum { variants })
                    }
                    Some(other) => Err(format!("unknown enum tag '{other}'")),
                }
            }
            "literal" => match self.kind.as_deref() {
                Some("number") => {
                    let value = self.value.ok_or("number literal requires 'value'")?;
                    let value: f64 = serde_json::from_value(value)
                        .map_err(|e| format!("number literal value: {e}"))?;
                    Ok(FieldType::Literal(Literal::Number { value }))
                }
                Some("string") => {
                    let value = self.value.ok_or("string literal requires 'value'")?;
                    let value: String = serde_json::from_value(value)
                        .map_err(|e| format!("string literal value: {e}"))?;
                    Ok(FieldType::Literal(Literal::String { value }))
                }
                Some("array") => {
                    let items = self.items.ok_or("array literal requires 'items'")?;
                    Ok(FieldType::Literal(Literal::Array { items }))
                }
                Some(other) => Err(format!("unknown literal kind '{other}'")),
                None => Err("literal requires 'kind'".to_string()),
            },
            primitive => primitive
                .parse::<Primitive>()
                .map(FieldType::Simple)
                .map_err(|e| e.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = FieldTypeRaw::deserialize(deserializer)?;
        raw.try_into_field_type().map_err(de::Error::custom)
    }
}

///
/// FieldMetaRef / FieldMetaRepr
///

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldMetaRef<'a> {
    name: &'a str,

    #[serde(rename = "type")]
    ty: &'a FieldType,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,

    #[serde(skip_serializing_if = "Not::not")]
    has_default: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldMetaRepr {
    name: String,

    #[serde(rename = "type")]
    ty: FieldType,

    #[serde(default)]
    comment: Option<String>,

    #[serde(default)]
    has_default: bool,
}

impl Serialize for FieldMetas {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|(name, meta)| FieldMetaRef {
            name,
            ty: &meta.ty,
            comment: meta.comment.as_deref(),
            has_default: meta.has_default,
        }))
    }
}

impl<'de> Deserialize<'de> for FieldMetas {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let reprs = Vec::<FieldMetaRepr>::deserialize(deserializer)?;

        let mut metas = Self::new();
        for repr in reprs {
            if metas.contains(&repr.name) {
                return Err(de::Error::custom(format!(
                    "duplicate field '{}'",
                    repr.name
                )));
            }

            metas.insert(
                repr.name,
                FieldMeta {
                    ty: repr.ty,
                    comment: repr.comment,
                    has_default: repr.has_default,
                },
            );
        }

        Ok(metas)
    }
}
