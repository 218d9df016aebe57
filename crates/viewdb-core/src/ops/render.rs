//! Output rendering: canonical dates, mandatory identifiers, and
//! policy-driven foreign-key expansion.

use crate::{
    error::{FieldError, FieldErrorKind, RenderError},
    key::RecordKey,
    ops::matches::{Direction, MatchCtx, check_simple, check_value, child_path, index_path},
    store::RecordStore,
    value::{Value, ValueMap},
};
use std::collections::BTreeSet;
use viewdb_schema::{
    node::{FieldMetas, FieldType, TableMeta},
    registry::Registry,
};

///
/// ExpansionPolicy
///
/// Which reference fields to inline, and how deep. Depth exhaustion is
/// never an error: a reference past the limit renders as its bare key.
///

#[derive(Clone, Debug)]
pub struct ExpansionPolicy {
    mode: ExpandMode,
    max_depth: usize,
}

#[derive(Clone, Debug)]
enum ExpandMode {
    All,
    /// Expand only these top-level fields; anything nested below an
    /// expanded record then expands freely within the remaining depth.
    Fields(BTreeSet<String>),
    None,
}

impl ExpansionPolicy {
    /// Render every reference as its bare key.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            mode: ExpandMode::None,
            max_depth: 0,
        }
    }

    /// Expand every reference, up to `max_depth` nested records.
    #[must_use]
    pub const fn all(max_depth: usize) -> Self {
        Self {
            mode: ExpandMode::All,
            max_depth,
        }
    }

    /// Expand only the named top-level fields, up to `max_depth`.
    #[must_use]
    pub fn fields<I, S>(fields: I, max_depth: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: ExpandMode::Fields(fields.into_iter().map(Into::into).collect()),
            max_depth,
        }
    }

    fn wants_top_level(&self, field: &str) -> bool {
        match &self.mode {
            ExpandMode::All => true,
            ExpandMode::Fields(fields) => fields.contains(field),
            ExpandMode::None => false,
        }
    }

    const fn wants_nested(&self) -> bool {
        !matches!(self.mode, ExpandMode::None)
    }
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        Self::none()
    }
}

struct RenderCtx<'a, S: RecordStore> {
    registry: &'a Registry,
    store: &'a S,
    policy: &'a ExpansionPolicy,
}

/// Project a stored record into its output view.
///
/// The identifier must be present and key-shaped; its absence is storage
/// corruption and fails fatally. Dates render as canonical ISO strings
/// regardless of stored representation. Reference fields render as bare
/// keys unless the policy asks for expansion.
pub fn render_output<S: RecordStore>(
    registry: &Registry,
    store: &S,
    table: &str,
    stored: &Value,
    policy: &ExpansionPolicy,
) -> Result<Value, RenderError> {
    let meta = registry.resolve(table)?;

    let Value::Object(map) = stored else {
        return Err(shape(
            "",
            FieldErrorKind::TypeMismatch {
                expected: format!("{table} record"),
                found: stored.kind(),
            },
        ));
    };

    let ctx = RenderCtx {
        registry,
        store,
        policy,
    };

    render_record(&ctx, meta, map, "", policy.max_depth, true)
}

fn shape(path: &str, kind: FieldErrorKind) -> RenderError {
    RenderError::Shape {
        path: path.to_string(),
        kind,
    }
}

fn first_shape(errs: Vec<FieldError>) -> RenderError {
    let err = errs
        .into_iter()
        .next()
        .unwrap_or_else(|| FieldError::new("", FieldErrorKind::MissingField));

    RenderError::Shape {
        path: err.path,
        kind: err.kind,
    }
}

fn render_record<S: RecordStore>(
    ctx: &RenderCtx<'_, S>,
    table: &TableMeta,
    map: &ValueMap,
    path: &str,
    depth: usize,
    top_level: bool,
) -> Result<Value, RenderError> {
    let mut out = ValueMap::new();

    match map.get("id") {
        Some(v) if v.is_key_shaped() => {
            out.insert("id", v.clone());
        }
        _ => {
            return Err(RenderError::MissingIdentifier {
                table: table.name.clone(),
            });
        }
    }

    for (name, meta) in table.fields.iter() {
        let field_path = child_path(path, name);
        match map.get(name) {
            Some(v) => {
                let expand = if top_level {
                    ctx.policy.wants_top_level(name)
                } else {
                    ctx.policy.wants_nested()
                };

                out.insert(
                    name,
                    render_value(ctx, &meta.ty, v, &field_path, depth, expand)?,
                );
            }
            None if meta.allows_absence() => {}
            None => {
                return Err(shape(
                    &field_path,
                    FieldErrorKind::MissingField,
                ));
            }
        }
    }

    for (key, _) in map.iter() {
        if key != "id" && !table.fields.contains(key) {
            return Err(shape(
                &child_path(path, key),
                FieldErrorKind::UnknownField,
            ));
        }
    }

    Ok(Value::Object(out))
}

fn render_object_fields<S: RecordStore>(
    ctx: &RenderCtx<'_, S>,
    fields: &FieldMetas,
    map: &ValueMap,
    path: &str,
    depth: usize,
    expand: bool,
) -> Result<Value, RenderError> {
    let mut out = ValueMap::new();

    for (name, meta) in fields.iter() {
        let field_path = child_path(path, name);
        match map.get(name) {
            Some(v) => {
                out.insert(
                    name,
                    render_value(ctx, &meta.ty, v, &field_path, depth, expand)?,
                );
            }
            None if meta.allows_absence() => {}
            None => {
                return Err(shape(
                    &field_path,
                    FieldErrorKind::MissingField,
                ));
            }
        }
    }

    for (key, _) in map.iter() {
        if !fields.contains(key) {
            return Err(shape(
                &child_path(path, key),
                FieldErrorKind::UnknownField,
            ));
        }
    }

    Ok(Value::Object(out))
}

fn render_value<S: RecordStore>(
    ctx: &RenderCtx<'_, S>,
    ty: &FieldType,
    value: &Value,
    path: &str,
    depth: usize,
    expand: bool,
) -> Result<Value, RenderError> {
    match ty {
        FieldType::Array { item } => {
            let Value::List(elements) = value else {
                return Err(shape(
                    path,
                    FieldErrorKind::TypeMismatch {
                        expected: ty.to_string(),
                        found: value.kind(),
                    },
                ));
            };

            let mut out = Vec::with_capacity(elements.len());
            for (i, element) in elements.iter().enumerate() {
                out.push(render_value(
                    ctx,
                    item,
                    element,
                    &index_path(path, i),
                    depth,
                    expand,
                )?);
            }

            Ok(Value::List(out))
        }
        FieldType::Object { fields: None } => match value {
            Value::Object(_) => Ok(value.clone()),
            other => Err(shape(
                path,
                FieldErrorKind::TypeMismatch {
                    expected: "object".to_string(),
                    found: other.kind(),
                },
            )),
        },
        FieldType::Object {
            fields: Some(fields),
        } => match value {
            Value::Object(map) => render_object_fields(ctx, fields, map, path, depth, expand),
            other => Err(shape(
                path,
                FieldErrorKind::TypeMismatch {
                    expected: "object".to_string(),
                    found: other.kind(),
                },
            )),
        },
        FieldType::Option { inner } => render_value(ctx, inner, value, path, depth, expand),
        FieldType::Record { tables } => render_record_field(ctx, tables, value, path, depth, expand),
        FieldType::Union { variants } => {
            // pick the variant structurally, then render through it
            let match_ctx = MatchCtx {
                registry: ctx.registry,
                direction: Direction::Output,
            };
            for variant in variants {
                if check_value(&match_ctx, variant, value, path).is_ok() {
                    return render_value(ctx, variant, value, path, depth, expand);
                }
            }

            Err(shape(
                path,
                FieldErrorKind::NoVariantMatched {
                    expected: ty.to_string(),
                    attempts: Vec::new(),
                },
            ))
        }
        FieldType::Literal(_) | FieldType::NumberEnum { .. } | FieldType::StringEnum { .. } => {
            let match_ctx = MatchCtx {
                registry: ctx.registry,
                direction: Direction::Output,
            };

            check_value(&match_ctx, ty, value, path).map_err(first_shape)
        }
        FieldType::Simple(primitive) => check_simple(*primitive, value, path)
            .map_err(|e| first_shape(vec![e])),
    }
}

fn render_record_field<S: RecordStore>(
    ctx: &RenderCtx<'_, S>,
    tables: &[String],
    value: &Value,
    path: &str,
    depth: usize,
    expand: bool,
) -> Result<Value, RenderError> {
    let Some(key) = value.as_key() else {
        return match value {
            // stored aggregates hold bare keys; an inline record is corrupt
            Value::Object(_) => Err(shape(
                path,
                FieldErrorKind::UnexpectedExpansion,
            )),
            other => Err(shape(
                path,
                FieldErrorKind::InvalidKey {
                    found: other.kind(),
                },
            )),
        };
    };

    if !expand || depth == 0 {
        return Ok(value.clone());
    }

    let target = resolve_candidate(ctx, tables, &key)?;

    let record = ctx
        .store
        .fetch(target, &key)
        .ok_or_else(|| RenderError::UnresolvedReference {
            key: key.clone(),
            tables: tables.to_vec(),
        })?;

    let table = ctx.registry.resolve(target)?;
    let Value::Object(map) = &record else {
        return Err(shape(
            path,
            FieldErrorKind::TypeMismatch {
                expected: format!("{target} record"),
                found: record.kind(),
            },
        ));
    };

    render_record(ctx, table, map, path, depth - 1, false)
}

/// Determine which candidate table a key belongs to by probing the store.
/// Exactly one hit expands; zero or several are reportable errors, never
/// silently resolved.
fn resolve_candidate<'a, S: RecordStore>(
    ctx: &RenderCtx<'_, S>,
    tables: &'a [String],
    key: &RecordKey,
) -> Result<&'a str, RenderError> {
    let hits: Vec<&str> = tables
        .iter()
        .map(String::as_str)
        .filter(|table| ctx.store.contains(table, key))
        .collect();

    match hits.as_slice() {
        [] => Err(RenderError::UnresolvedReference {
            key: key.clone(),
            tables: tables.to_vec(),
        }),
        [single] => Ok(single),
        several => Err(RenderError::AmbiguousReference {
            key: key.clone(),
            tables: several.iter().map(ToString::to_string).collect(),
        }),
    }
}
