use crate::{key::RecordKey, value::Value};
use std::collections::BTreeMap;

///
/// RecordStore
///
/// External collaborator: fetch a stored record by table name and key.
/// The renderer probes and fetches through this seam; the core itself
/// never touches disk or network.
///

pub trait RecordStore {
    fn fetch(&self, table: &str, key: &RecordKey) -> Option<Value>;

    fn contains(&self, table: &str, key: &RecordKey) -> bool {
        self.fetch(table, key).is_some()
    }
}

///
/// MemoryStore
///
/// BTreeMap-backed store for tests and fixtures.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<String, BTreeMap<RecordKey, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous one under the same key.
    pub fn insert(
        &mut self,
        table: impl Into<String>,
        key: impl Into<RecordKey>,
        record: Value,
    ) -> Option<Value> {
        self.tables
            .entry(table.into())
            .or_default()
            .insert(key.into(), record)
    }

    pub fn remove(&mut self, table: &str, key: &RecordKey) -> Option<Value> {
        self.tables.get_mut(table)?.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn fetch(&self, table: &str, key: &RecordKey) -> Option<Value> {
        self.tables.get(table)?.get(key).cloned()
    }

    fn contains(&self, table: &str, key: &RecordKey) -> bool {
        self.tables
            .get(table)
            .is_some_and(|records| records.contains_key(key))
    }
}
