mod field;
mod field_type;
mod table;
mod wire;

pub use field::{FieldMeta, FieldMetas};
pub use field_type::{FieldType, Literal};
pub use table::{TableMeta, TableMetaFromDb};
