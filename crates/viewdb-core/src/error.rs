use crate::key::RecordKey;
use std::fmt;
use thiserror::Error as ThisError;
use viewdb_schema::registry::RegistryError;

///
/// FieldErrorKind
///
/// Per-field validation failure classes. Accumulated, not
/// raised: one validation pass reports every failing field at once.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldErrorKind {
    #[error("expected a record key, found {found}")]
    InvalidKey { found: &'static str },

    #[error("required field is missing")]
    MissingField,

    #[error("value matched no variant of {expected}")]
    NoVariantMatched {
        expected: String,
        /// Failures recorded while trying each variant, for diagnostics.
        attempts: Vec<FieldError>,
    },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },

    #[error("reference must be a bare key on input, found an expanded record")]
    UnexpectedExpansion,

    #[error("field is not declared by the table")]
    UnknownField,
}

///
/// FieldError
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    /// Dotted/indexed route of the failing value (`category.temps[2]`).
    pub path: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            self.kind.fmt(f)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("input failed validation with {} field error(s)", .0.len())]
    Fields(Vec<FieldError>),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ValidateError {
    /// Field-level failures, if this is a field-level error.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Fields(errs) => errs,
            Self::Registry(_) => &[],
        }
    }
}

///
/// RenderError
///
/// Failures while projecting a stored record into its output view. Any of
/// these aborts the single render call; nothing is mutated.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RenderError {
    #[error("key '{key}' resolves in multiple candidate tables: {}", .tables.join(", "))]
    AmbiguousReference { key: RecordKey, tables: Vec<String> },

    /// Fatal: an output record without an identifier means the stored data
    /// or the schema is corrupt.
    #[error("stored record for table '{table}' lacks an identifier")]
    MissingIdentifier { table: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The stored value does not satisfy its own schema.
    #[error("stored value at '{path}': {kind}")]
    Shape { path: String, kind: FieldErrorKind },

    #[error("key '{key}' does not resolve in any candidate table ({})", .tables.join(", "))]
    UnresolvedReference { key: RecordKey, tables: Vec<String> },
}
