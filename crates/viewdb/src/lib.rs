//! viewdb: schema metadata and view transformation for a small relational
//! data layer.
//!
//! ## Crate layout
//! - `schema`: the descriptor algebra (`TableMeta`/`FieldMeta`/`FieldType`),
//!   the table registry, closed-world validation, and the metadata
//!   interchange format.
//! - `core`: the runtime value model, primitive types, and the two coupled
//!   operations over one schema, input validation/normalization and output
//!   rendering with foreign-key expansion.
//!
//! One schema, two projections: a table is declared once, then `validate`
//! holds write payloads to the permissive input shape (optional id,
//! bare-key references, native-or-string dates) while `render` produces the
//! canonical output shape (mandatory id, key-or-expanded references, ISO
//! date strings).

pub use viewdb_core as core;
pub use viewdb_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use viewdb_core::{
        error::{FieldError, FieldErrorKind, RenderError, ValidateError},
        key::RecordKey,
        ops::{
            Direction, ExpansionPolicy, NormalizedRecord, describe_value, matches, render_output,
            validate_input,
        },
        store::{MemoryStore, RecordStore},
        types::{Date, Decimal, Duration, Float64},
        value::{Value, ValueMap},
    };
    pub use viewdb_schema::{
        error::ErrorTree,
        export::{export_registry, export_registry_pretty, import_registry},
        node::{FieldMeta, FieldMetas, FieldType, Literal, TableMeta, TableMetaFromDb},
        registry::{Registry, RegistryError, SharedRegistry},
        types::Primitive,
        visit::Visitor,
    };
}
