use crate::{node::FieldMetas, types::Primitive};
use std::fmt;

///
/// FieldType
///
/// Closed recursive sum over every shape a field can hold. Consumers must
/// handle each variant exhaustively; there is no open extension point, so a
/// new variant surfaces as a compile error in every walker.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldType {
    /// Homogeneous sequence of `item` values.
    Array { item: Box<FieldType> },

    /// Constrained to one exact constant (or catalog of array constants).
    Literal(Literal),

    /// Enumeration over a closed set of number literals.
    NumberEnum { variants: Vec<f64> },

    /// Keyed aggregate; `None` means an untyped object.
    Object { fields: Option<FieldMetas> },

    /// Value-or-absent; absence is not null.
    Option { inner: Box<FieldType> },

    /// Foreign-key reference into one or more candidate tables.
    Record { tables: Vec<String> },

    /// Primitive leaf.
    Simple(Primitive),

    /// Enumeration over a closed set of string literals.
    StringEnum { variants: Vec<String> },

    /// Ordered structural union; first matching variant wins.
    Union { variants: Vec<FieldType> },
}

impl FieldType {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub const fn simple(primitive: Primitive) -> Self {
        Self::Simple(primitive)
    }

    #[must_use]
    pub fn option(inner: Self) -> Self {
        Self::Option {
            inner: Box::new(inner),
        }
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array {
            item: Box::new(item),
        }
    }

    /// Reference targeting a single table.
    #[must_use]
    pub fn record(table: impl Into<String>) -> Self {
        Self::Record {
            tables: vec![table.into()],
        }
    }

    /// Polymorphic reference targeting several candidate tables.
    #[must_use]
    pub fn record_of<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Record {
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn object(fields: FieldMetas) -> Self {
        Self::Object {
            fields: Some(fields),
        }
    }

    #[must_use]
    pub const fn untyped_object() -> Self {
        Self::Object { fields: None }
    }

    #[must_use]
    pub fn union<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Union {
            variants: variants.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn string_enum<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StringEnum {
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn number_enum<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::NumberEnum {
            variants: variants.into_iter().collect(),
        }
    }

    ///
    /// PREDICATES
    ///

    /// Returns the inner type if this is an option.
    #[must_use]
    pub fn option_inner(&self) -> Option<&Self> {
        match self {
            Self::Option { inner } => Some(inner),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Option { .. })
    }

    /// Returns the candidate tables if this is a record reference.
    #[must_use]
    pub fn record_tables(&self) -> Option<&[String]> {
        match self {
            Self::Record { tables } => Some(tables),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }
}

impl From<Primitive> for FieldType {
    fn from(primitive: Primitive) -> Self {
        Self::Simple(primitive)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array { item } => write!(f, "array<{item}>"),
            Self::Literal(literal) => literal.fmt(f),
            Self::NumberEnum { variants } => {
                write!(f, "enum(")?;
                for (i, v) in variants.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
            Self::Object { fields: None } => write!(f, "object"),
            Self::Object {
                fields: Some(fields),
            } => {
                write!(f, "object{{")?;
                for (i, (name, _)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}")?;
                }
                write!(f, "}}")
            }
            Self::Option { inner } => write!(f, "option<{inner}>"),
            Self::Record { tables } => write!(f, "record({})", tables.join(" | ")),
            Self::Simple(primitive) => primitive.fmt(f),
            Self::StringEnum { variants } => {
                write!(f, "enum(")?;
                for (i, v) in variants.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "'{v}'")?;
                }
                write!(f, ")")
            }
            Self::Union { variants } => {
                write!(f, "union(")?;
                for (i, v) in variants.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    v.fmt(f)?;
                }
                write!(f, ")")
            }
        }
    }
}

///
/// Literal
///

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Positional catalog of item descriptors (a tuple shape).
    Array { items: Vec<FieldType> },
    Number { value: f64 },
    String { value: String },
}

impl Literal {
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = FieldType>,
    {
        Self::Array {
            items: items.into_iter().collect(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array { items } => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt(f)?;
                }
                write!(f, "]")
            }
            Self::Number { value } => write!(f, "{value}"),
            Self::String { value } => write!(f, "'{value}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_exposes_wrapped_type() {
        let ty = FieldType::option(FieldType::record("category"));
        assert!(ty.is_optional());
        assert_eq!(
            ty.option_inner(),
            Some(&FieldType::record("category")),
            "option should expose its inner descriptor"
        );
        assert!(FieldType::simple(Primitive::Text).option_inner().is_none());
    }

    #[test]
    fn display_renders_compact_type_expressions() {
        let ty = FieldType::option(FieldType::array(FieldType::simple(Primitive::Date)));
        assert_eq!(ty.to_string(), "option<array<date>>");

        let record = FieldType::record_of(["worker", "project"]);
        assert_eq!(record.to_string(), "record(worker | project)");

        let string_enum = FieldType::string_enum(["kg", "pcs"]);
        assert_eq!(string_enum.to_string(), "enum('kg' | 'pcs')");
    }
}
