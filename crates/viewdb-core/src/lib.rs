//! Runtime layer for viewdb: the dynamic value model, the primitive value
//! types, and the two operations that project one schema into its two
//! views: permissive input validation/normalization and canonical output
//! rendering with foreign-key expansion.

pub mod error;
pub mod key;
pub mod ops;
pub mod store;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
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
}
