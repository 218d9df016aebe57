//! Schema metadata for a small relational data layer: the recursive
//! field-descriptor algebra, table/field metadata nodes, the table registry,
//! and the closed-world validation passes that run over a finished registry.

pub mod error;
pub mod export;
pub mod node;
pub mod registry;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for table identifiers.
pub const MAX_TABLE_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::{error::ErrorTree, registry::RegistryError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::{FieldMeta, FieldMetas, FieldType, Literal, TableMeta, TableMetaFromDb},
        registry::{Registry, RegistryError, SharedRegistry},
        types::Primitive,
        visit::Visitor,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("schema validation failed: {0}")]
    Validation(ErrorTree),
}
