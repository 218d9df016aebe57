use crate::{
    Error,
    error::ErrorTree,
    node::{FieldMetas, TableMeta},
    validate::validate_registry,
};
use std::{
    collections::BTreeMap,
    sync::{
        RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicBool, Ordering},
    },
};
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("table '{0}' is already registered")]
    DuplicateTable(String),

    #[error("unknown table '{0}'")]
    UnknownTable(String),
}

///
/// Registry
///
/// Flat mapping from table name to descriptor. Record references hold
/// names, never ownership links, so cyclic schemas stay plain data and are
/// resolved through lookups at traversal time.
///

#[derive(Clone, Debug, Default)]
pub struct Registry {
    tables: BTreeMap<String, TableMeta>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table descriptor. Names are unique; a second table with
    /// the same name fails rather than replacing the first.
    pub fn register(&mut self, table: TableMeta) -> Result<(), RegistryError> {
        if self.tables.contains_key(&table.name) {
            return Err(RegistryError::DuplicateTable(table.name));
        }

        self.tables.insert(table.name.clone(), table);

        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&TableMeta, RegistryError> {
        self.tables
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTable(name.to_string()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableMeta> {
        self.tables.get(name)
    }

    /// Convenience accessor used by the validator and the expander.
    pub fn fields_of(&self, name: &str) -> Result<&FieldMetas, RegistryError> {
        self.resolve(name).map(|table| &table.fields)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableMeta)> {
        self.tables.iter().map(|(name, meta)| (name.as_str(), meta))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Closed-world check: every record target resolves, every name is
    /// legal. Must pass before validation/expansion traffic begins.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        validate_registry(self)
    }
}

impl FromIterator<TableMeta> for Registry {
    /// Build a registry from distinct tables; later duplicates are dropped
    /// (use [`Registry::register`] when duplicate detection matters).
    fn from_iter<I: IntoIterator<Item = TableMeta>>(iter: I) -> Self {
        let mut registry = Self::new();
        for table in iter {
            let _ = registry.register(table);
        }

        registry
    }
}

///
/// SharedRegistry
///
/// Exclusive-write/shared-read wrapper for the dynamic-registration case.
/// Registration is a one-time, single-writer phase; reads re-validate at
/// most once per write generation.
///

#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<Registry>,
    validated: AtomicBool,
}

impl SharedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a write guard during schema construction. Any write
    /// invalidates the validated flag.
    pub fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.validated.store(false, Ordering::Release);
        self.inner
            .write()
            .expect("registry RwLock poisoned while acquiring write lock")
    }

    /// Read the registry without the validation gate.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner
            .read()
            .expect("registry RwLock poisoned while acquiring read lock")
    }

    /// Read the registry, validating it at most once per write generation.
    pub fn read_validated(&self) -> Result<RwLockReadGuard<'_, Registry>, Error> {
        let guard = self.read();

        if !self.validated.load(Ordering::Acquire) {
            guard.validate().map_err(Error::Validation)?;
            self.validated.store(true, Ordering::Release);
        }

        Ok(guard)
    }
}
