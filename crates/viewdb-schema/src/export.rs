//! Registry ⇄ canonical JSON metadata document.
//!
//! The exported document maps table name to descriptor; it is the same
//! shape a metadata-aware client consumes, so a registry can be shipped,
//! stored, and rebuilt without a side channel.

use crate::{
    error::ErrorTree,
    node::TableMeta,
    registry::{Registry, RegistryError},
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// ExportError
///

#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("document key '{key}' does not match table name '{name}'")]
    KeyMismatch { key: String, name: String },

    #[error("imported schema failed validation: {0}")]
    Validation(ErrorTree),
}

/// Render the registry as the canonical name→descriptor document.
pub fn export_registry(registry: &Registry) -> Result<serde_json::Value, ExportError> {
    let document: BTreeMap<&str, &TableMeta> = registry.tables().collect();

    Ok(serde_json::to_value(document)?)
}

/// Render the registry as pretty-printed JSON, for files and humans.
pub fn export_registry_pretty(registry: &Registry) -> Result<String, ExportError> {
    let document: BTreeMap<&str, &TableMeta> = registry.tables().collect();

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Rebuild a registry from an exported document. The result is fully
/// validated; a document with dangling references does not import.
pub fn import_registry(document: &str) -> Result<Registry, ExportError> {
    let tables: BTreeMap<String, TableMeta> = serde_json::from_str(document)?;

    let mut registry = Registry::new();
    for (key, meta) in tables {
        if key != meta.name {
            return Err(ExportError::KeyMismatch {
                key,
                name: meta.name,
            });
        }

        registry.register(meta)?;
    }

    registry.validate().map_err(ExportError::Validation)?;

    Ok(registry)
}
