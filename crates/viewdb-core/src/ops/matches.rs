//! Structural matching and normalization of values against descriptors.
//!
//! One recursion serves both views: the [`Direction`] decides the
//! asymmetric rules (references must be bare keys on input but may be
//! expanded records on output), while date canonicalization is shared:
//! whatever direction touches a date field, the normalized form is the ISO
//! string. The `match` over [`FieldType`] is exhaustive by construction.

use crate::{
    error::{FieldError, FieldErrorKind},
    types::Date,
    value::{Value, ValueMap},
};
use viewdb_schema::{
    node::{FieldMetas, FieldType, Literal, TableMeta},
    registry::Registry,
    types::Primitive,
};

///
/// Direction
///
/// Which projection of the schema a value is being held against.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Write-time shape: optional id, bare-key references, flexible dates.
    Input,
    /// Read-time shape: mandatory id, key-or-expanded references.
    Output,
}

///
/// MatchCtx
///

pub(crate) struct MatchCtx<'a> {
    pub registry: &'a Registry,
    pub direction: Direction,
}

/// Structural check: does `value` satisfy `ty` under `direction`?
#[must_use]
pub fn matches(registry: &Registry, ty: &FieldType, value: &Value, direction: Direction) -> bool {
    let ctx = MatchCtx {
        registry,
        direction,
    };

    check_value(&ctx, ty, value, "").is_ok()
}

pub(crate) fn child_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn mismatch(path: &str, expected: impl Into<String>, value: &Value) -> Vec<FieldError> {
    vec![FieldError::new(
        path,
        FieldErrorKind::TypeMismatch {
            expected: expected.into(),
            found: value.kind(),
        },
    )]
}

/// Validate `value` against `ty`, producing the normalized value on
/// success or every discovered failure on error.
pub(crate) fn check_value(
    ctx: &MatchCtx<'_>,
    ty: &FieldType,
    value: &Value,
    path: &str,
) -> Result<Value, Vec<FieldError>> {
    match ty {
        FieldType::Array { item } => {
            let Value::List(elements) = value else {
                return Err(mismatch(path, ty.to_string(), value));
            };

            let mut errs = Vec::new();
            let mut out = Vec::with_capacity(elements.len());
            for (i, element) in elements.iter().enumerate() {
                match check_value(ctx, item, element, &index_path(path, i)) {
                    Ok(normalized) => out.push(normalized),
                    Err(mut e) => errs.append(&mut e),
                }
            }

            if errs.is_empty() {
                Ok(Value::List(out))
            } else {
                Err(errs)
            }
        }
        FieldType::Literal(literal) => check_literal(ctx, literal, value, path),
        FieldType::NumberEnum { variants } => match value.as_number() {
            Some(n) if variants.iter().any(|v| *v == n) => Ok(value.clone()),
            _ => Err(no_variant(path, ty, Vec::new())),
        },
        FieldType::Object { fields: None } => match value {
            Value::Object(_) => Ok(value.clone()),
            other => Err(mismatch(path, "object", other)),
        },
        FieldType::Object {
            fields: Some(fields),
        } => check_object(ctx, fields, value, path),
        FieldType::Option { inner } => check_value(ctx, inner, value, path),
        FieldType::Record { tables } => check_record(ctx, tables, value, path),
        FieldType::Simple(primitive) => {
            check_simple(*primitive, value, path).map_err(|e| vec![e])
        }
        FieldType::StringEnum { variants } => match value {
            Value::Text(s) if variants.iter().any(|v| v == s) => Ok(value.clone()),
            _ => Err(no_variant(path, ty, Vec::new())),
        },
        FieldType::Union { variants } => {
            let mut attempts = Vec::new();
            for variant in variants {
                match check_value(ctx, variant, value, path) {
                    Ok(normalized) => return Ok(normalized),
                    Err(errs) => attempts.extend(errs),
                }
            }

            Err(no_variant(path, ty, attempts))
        }
    }
}

fn no_variant(path: &str, ty: &FieldType, attempts: Vec<FieldError>) -> Vec<FieldError> {
    vec![FieldError::new(
        path,
        FieldErrorKind::NoVariantMatched {
            expected: ty.to_string(),
            attempts,
        },
    )]
}

/// Leaf check. Date values normalize to the canonical ISO string here;
/// every other primitive passes through unchanged.
pub(crate) fn check_simple(
    primitive: Primitive,
    value: &Value,
    path: &str,
) -> Result<Value, FieldError> {
    let fail = || {
        FieldError::new(
            path,
            FieldErrorKind::TypeMismatch {
                expected: primitive.to_string(),
                found: value.kind(),
            },
        )
    };

    match primitive {
        Primitive::Any => Ok(value.clone()),
        Primitive::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            _ => Err(fail()),
        },
        Primitive::Bytes => match value {
            Value::Bytes(_) => Ok(value.clone()),
            _ => Err(fail()),
        },
        Primitive::Date => match value {
            Value::Date(d) => Ok(Value::Text(d.to_string())),
            Value::Text(s) => Date::parse(s)
                .map(|d| Value::Text(d.to_string()))
                .ok_or_else(fail),
            _ => Err(fail()),
        },
        Primitive::Decimal => match value {
            Value::Decimal(_) | Value::Int(_) | Value::Uint(_) => Ok(value.clone()),
            _ => Err(fail()),
        },
        Primitive::Duration => match value {
            Value::Duration(_) | Value::Uint(_) => Ok(value.clone()),
            Value::Int(ms) if *ms >= 0 => Ok(value.clone()),
            _ => Err(fail()),
        },
        Primitive::Null => match value {
            Value::Null => Ok(Value::Null),
            _ => Err(fail()),
        },
        Primitive::Number => match value.as_number() {
            Some(_) => Ok(value.clone()),
            None => Err(fail()),
        },
        Primitive::Text => match value {
            Value::Text(_) => Ok(value.clone()),
            _ => Err(fail()),
        },
        Primitive::Uuid => match value {
            Value::Uuid(_) => Ok(value.clone()),
            Value::Text(s) => uuid::Uuid::parse_str(s)
                .map(|_| value.clone())
                .map_err(|_| fail()),
            _ => Err(fail()),
        },
    }
}

fn check_object(
    ctx: &MatchCtx<'_>,
    fields: &FieldMetas,
    value: &Value,
    path: &str,
) -> Result<Value, Vec<FieldError>> {
    let Value::Object(map) = value else {
        return Err(mismatch(path, "object", value));
    };

    let mut errs = Vec::new();
    let mut out = ValueMap::new();

    for (name, meta) in fields.iter() {
        let field_path = child_path(path, name);
        match map.get(name) {
            Some(v) => match check_value(ctx, &meta.ty, v, &field_path) {
                Ok(normalized) => {
                    out.insert(name, normalized);
                }
                Err(mut e) => errs.append(&mut e),
            },
            None if meta.allows_absence() => {}
            None => errs.push(FieldError::new(field_path, FieldErrorKind::MissingField)),
        }
    }

    for (key, _) in map.iter() {
        if !fields.contains(key) {
            errs.push(FieldError::new(
                child_path(path, key),
                FieldErrorKind::UnknownField,
            ));
        }
    }

    if errs.is_empty() {
        Ok(Value::Object(out))
    } else {
        Err(errs)
    }
}

fn check_record(
    ctx: &MatchCtx<'_>,
    tables: &[String],
    value: &Value,
    path: &str,
) -> Result<Value, Vec<FieldError>> {
    match value {
        v if v.is_key_shaped() => Ok(v.clone()),
        Value::Object(map) => match ctx.direction {
            Direction::Input => Err(vec![FieldError::new(
                path,
                FieldErrorKind::UnexpectedExpansion,
            )]),
            Direction::Output => check_expanded_record(ctx, tables, map, path),
        },
        other => Err(vec![FieldError::new(
            path,
            FieldErrorKind::InvalidKey {
                found: other.kind(),
            },
        )]),
    }
}

/// Output-only: a reference may carry the full referenced record inline.
/// The aggregate must satisfy one candidate table's output shape, id
/// included.
fn check_expanded_record(
    ctx: &MatchCtx<'_>,
    tables: &[String],
    map: &ValueMap,
    path: &str,
) -> Result<Value, Vec<FieldError>> {
    if let [single] = tables {
        let table = resolve_for_match(ctx, single, path)?;
        return check_record_fields(ctx, table, map, path, true);
    }

    let mut attempts = Vec::new();
    for name in tables {
        match ctx.registry.resolve(name) {
            Ok(table) => match check_record_fields(ctx, table, map, path, true) {
                Ok(normalized) => return Ok(normalized),
                Err(errs) => attempts.extend(errs),
            },
            Err(_) => attempts.push(unresolvable(path, name)),
        }
    }

    Err(vec![FieldError::new(
        path,
        FieldErrorKind::NoVariantMatched {
            expected: format!("record({})", tables.join(" | ")),
            attempts,
        },
    )])
}

fn resolve_for_match<'a>(
    ctx: &MatchCtx<'a>,
    table: &str,
    path: &str,
) -> Result<&'a TableMeta, Vec<FieldError>> {
    ctx.registry
        .resolve(table)
        .map_err(|_| vec![unresolvable(path, table)])
}

fn unresolvable(path: &str, table: &str) -> FieldError {
    FieldError::new(
        path,
        FieldErrorKind::TypeMismatch {
            expected: format!("record({table})"),
            found: "object",
        },
    )
}

/// Check a record aggregate against a table's fields. The identifier is
/// handled here, outside the declared field list: it must be key-shaped
/// whenever present and is mandatory only when `require_id` says so.
pub(crate) fn check_record_fields(
    ctx: &MatchCtx<'_>,
    table: &TableMeta,
    map: &ValueMap,
    path: &str,
    require_id: bool,
) -> Result<Value, Vec<FieldError>> {
    let mut errs = Vec::new();
    let mut out = ValueMap::new();

    let id_path = child_path(path, "id");
    match map.get("id") {
        Some(v) if v.is_key_shaped() => {
            out.insert("id", v.clone());
        }
        Some(v) => errs.push(FieldError::new(
            id_path,
            FieldErrorKind::InvalidKey { found: v.kind() },
        )),
        None if require_id => errs.push(FieldError::new(id_path, FieldErrorKind::MissingField)),
        None => {}
    }

    for (name, meta) in table.fields.iter() {
        let field_path = child_path(path, name);
        match map.get(name) {
            Some(v) => match check_value(ctx, &meta.ty, v, &field_path) {
                Ok(normalized) => {
                    out.insert(name, normalized);
                }
                Err(mut e) => errs.append(&mut e),
            },
            None if meta.allows_absence() => {}
            None => errs.push(FieldError::new(field_path, FieldErrorKind::MissingField)),
        }
    }

    for (key, _) in map.iter() {
        if key != "id" && !table.fields.contains(key) {
            errs.push(FieldError::new(
                child_path(path, key),
                FieldErrorKind::UnknownField,
            ));
        }
    }

    if errs.is_empty() {
        Ok(Value::Object(out))
    } else {
        Err(errs)
    }
}

fn check_literal(
    ctx: &MatchCtx<'_>,
    literal: &Literal,
    value: &Value,
    path: &str,
) -> Result<Value, Vec<FieldError>> {
    match literal {
        Literal::Array { items } => {
            let Value::List(elements) = value else {
                return Err(mismatch(path, literal.to_string(), value));
            };
            if elements.len() != items.len() {
                return Err(mismatch(path, literal.to_string(), value));
            }

            let mut errs = Vec::new();
            let mut out = Vec::with_capacity(items.len());
            for (i, (item_ty, element)) in items.iter().zip(elements).enumerate() {
                match check_value(ctx, item_ty, element, &index_path(path, i)) {
                    Ok(normalized) => out.push(normalized),
                    Err(mut e) => errs.append(&mut e),
                }
            }

            if errs.is_empty() {
                Ok(Value::List(out))
            } else {
                Err(errs)
            }
        }
        Literal::Number { value: expected } => match value.as_number() {
            Some(n) if n == *expected => Ok(value.clone()),
            _ => Err(mismatch(path, literal.to_string(), value)),
        },
        Literal::String { value: expected } => match value {
            Value::Text(s) if s == expected => Ok(value.clone()),
            _ => Err(mismatch(path, literal.to_string(), value)),
        },
    }
}
