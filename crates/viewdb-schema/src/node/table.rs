use crate::node::{FieldMeta, FieldMetas, FieldType};
use serde::{Deserialize, Serialize};

///
/// TableMeta
///
/// A named schema unit: the descriptor of one table. Built once at schema
/// definition time and immutable once registered.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMeta {
    pub name: String,
    pub fields: FieldMetas,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TableMeta {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldMetas::new(),
            comment: None,
        }
    }

    /// Declare a field with a bare type descriptor.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name, FieldMeta::new(ty));
        self
    }

    /// Declare a field with a full meta (comment, default marker).
    #[must_use]
    pub fn field_meta(mut self, name: impl Into<String>, meta: FieldMeta) -> Self {
        self.fields.insert(name, meta);
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }
}

///
/// TableMetaFromDb
///
/// The persisted form of a table descriptor: a table's own schema stored
/// and fetched with an id like any other record.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetaFromDb {
    pub id: String,

    #[serde(flatten)]
    pub meta: TableMeta,
}

impl TableMetaFromDb {
    #[must_use]
    pub fn new(id: impl Into<String>, meta: TableMeta) -> Self {
        Self {
            id: id.into(),
            meta,
        }
    }

    /// Strip the persistence id and return the plain descriptor.
    #[must_use]
    pub fn into_meta(self) -> TableMeta {
        self.meta
    }
}
