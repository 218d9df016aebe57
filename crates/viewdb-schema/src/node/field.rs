use crate::node::FieldType;

///
/// FieldMeta
///
/// One field of a table: its type descriptor, an optional human comment,
/// and the has-default marker. A defaulted field may be omitted on input;
/// the producing system fills it, never the caller.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldMeta {
    pub ty: FieldType,
    pub comment: Option<String>,
    pub has_default: bool,
}

impl FieldMeta {
    #[must_use]
    pub const fn new(ty: FieldType) -> Self {
        Self {
            ty,
            comment: None,
            has_default: false,
        }
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// A field may be absent on input when it is optional or defaulted.
    #[must_use]
    pub const fn allows_absence(&self) -> bool {
        self.has_default || self.ty.is_optional()
    }
}

impl From<FieldType> for FieldMeta {
    fn from(ty: FieldType) -> Self {
        Self::new(ty)
    }
}

///
/// FieldMetas
///
/// Insertion-ordered field map with unique names. Order is meaningful for
/// display and codegen only; validation never depends on it.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMetas {
    entries: Vec<(String, FieldMeta)>,
}

impl FieldMetas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous entry with the same name.
    /// Replacement (rather than duplication) keeps the unique-name
    /// invariant structural.
    pub fn insert(&mut self, name: impl Into<String>, meta: impl Into<FieldMeta>) -> Option<FieldMeta> {
        let name = name.into();
        let meta = meta.into();

        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(&mut slot.1, meta));
        }

        self.entries.push((name, meta));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldMeta> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, meta)| meta)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMeta)> {
        self.entries.iter().map(|(n, meta)| (n.as_str(), meta))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, M> FromIterator<(N, M)> for FieldMetas
where
    N: Into<String>,
    M: Into<FieldMeta>,
{
    fn from_iter<I: IntoIterator<Item = (N, M)>>(iter: I) -> Self {
        let mut metas = Self::new();
        for (name, meta) in iter {
            metas.insert(name, meta);
        }

        metas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    #[test]
    fn insert_preserves_declaration_order() {
        let mut fields = FieldMetas::new();
        fields.insert("name", FieldType::simple(Primitive::Text));
        fields.insert("date", FieldType::simple(Primitive::Date));
        fields.insert("price", FieldType::simple(Primitive::Number));

        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["name", "date", "price"]);
    }

    #[test]
    fn reinsert_replaces_and_returns_previous_entry() {
        let mut fields = FieldMetas::new();
        fields.insert("name", FieldType::simple(Primitive::Text));

        let previous = fields.insert("name", FieldType::simple(Primitive::Number));
        assert_eq!(
            previous.map(|m| m.ty),
            Some(FieldType::simple(Primitive::Text)),
            "replacement should hand back the displaced meta"
        );
        assert_eq!(fields.len(), 1, "names must stay unique");
    }

    #[test]
    fn allows_absence_for_optional_and_defaulted_fields() {
        let optional = FieldMeta::new(FieldType::option(FieldType::simple(Primitive::Text)));
        let defaulted = FieldMeta::new(FieldType::simple(Primitive::Text)).with_default();
        let required = FieldMeta::new(FieldType::simple(Primitive::Text));

        assert!(optional.allows_absence());
        assert!(defaulted.allows_absence());
        assert!(!required.allows_absence());
    }
}
