use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::client::{Comparator, ExtensionClient, Predicate, StoreResult};
use super::index::{IndexSpec, IndexValue, find_index};
use super::lifecycle::{is_collectable, mark_deleted, prepare_create, prepare_update};
use super::list_options::{ListOptions, PageRequest, Query, Sort};
use super::list_result::ListResult;
use super::query_engine;
use super::{Extension, StoreError};

type IndexEntries = BTreeMap<IndexValue, BTreeSet<String>>;

struct StoreState<E> {
    items: BTreeMap<String, E>,
    entries: HashMap<&'static str, IndexEntries>,
}

/// In-process store for one extension kind with secondary indexes.
pub struct MemoryExtensionStore<E: Extension> {
    state: RwLock<StoreState<E>>,
    indexes: Vec<IndexSpec<E>>,
}

impl<E: Extension> Default for MemoryExtensionStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Extension> MemoryExtensionStore<E> {
    pub fn new() -> Self {
        let indexes = E::indexes();
        let entries = indexes
            .iter()
            .map(|index| (index.name, IndexEntries::new()))
            .collect();
        Self {
            state: RwLock::new(StoreState {
                items: BTreeMap::new(),
                entries,
            }),
            indexes,
        }
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState<E>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<E>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(name: &str) -> StoreError {
        StoreError::NotFound {
            kind: E::gvk().kind,
            name: name.to_string(),
        }
    }

    fn put(&self, state: &mut StoreState<E>, extension: E) {
        let name = extension.name().to_string();
        self.remove(state, &name);
        for index in &self.indexes {
            if let Some(key) = index.key_of(&extension) {
                state
                    .entries
                    .entry(index.name)
                    .or_default()
                    .entry(key)
                    .or_default()
                    .insert(name.clone());
            }
        }
        state.items.insert(name, extension);
    }

    fn remove(&self, state: &mut StoreState<E>, name: &str) -> Option<E> {
        let previous = state.items.remove(name)?;
        for index in &self.indexes {
            let Some(key) = index.key_of(&previous) else {
                continue;
            };
            if let Some(entries) = state.entries.get_mut(index.name) {
                if let Some(names) = entries.get_mut(&key) {
                    names.remove(name);
                    if names.is_empty() {
                        entries.remove(&key);
                    }
                }
            }
        }
        Some(previous)
    }

    /// Narrows the scan to the names an equality clause can reach through its
    /// index. `None` means a full scan is needed.
    fn candidates(&self, state: &StoreState<E>, query: &Query) -> Option<BTreeSet<String>> {
        match query {
            Query::Equal { field, value } => {
                find_index(&self.indexes, field)?;
                let entries = state.entries.get(field.as_str())?;
                Some(
                    entries
                        .iter()
                        .filter(|(key, _)| key.matches(value))
                        .flat_map(|(_, names)| names.iter().cloned())
                        .collect(),
                )
            }
            Query::And(queries) => queries
                .iter()
                .filter_map(|q| self.candidates(state, q))
                .reduce(|left, right| left.intersection(&right).cloned().collect()),
            _ => None,
        }
    }

    fn select(&self, options: &ListOptions, sort: &Sort) -> StoreResult<Vec<E>> {
        let state = self.read();
        let scoped: Vec<E> = match self.candidates(&state, &options.field_query) {
            Some(names) => names
                .iter()
                .filter_map(|name| state.items.get(name).cloned())
                .collect(),
            None => state.items.values().cloned().collect(),
        };
        drop(state);
        query_engine::select(scoped, options, sort, &self.indexes)
    }
}

#[async_trait]
impl<E: Extension> ExtensionClient<E> for MemoryExtensionStore<E> {
    async fn list(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> StoreResult<Vec<E>> {
        let mut items: Vec<E> = self
            .read()
            .items
            .values()
            .filter(|extension| predicate.as_ref().is_none_or(|p| p(extension)))
            .cloned()
            .collect();
        if let Some(comparator) = comparator {
            items.sort_by(|a, b| comparator(a, b));
        }
        Ok(items)
    }

    async fn list_by(
        &self,
        options: &ListOptions,
        page: &PageRequest,
    ) -> StoreResult<ListResult<E>> {
        let items = self.select(options, &page.sort)?;
        Ok(ListResult::paginate(items, page.page, page.size))
    }

    async fn list_all(&self, options: &ListOptions, sort: &Sort) -> StoreResult<Vec<E>> {
        self.select(options, sort)
    }

    async fn fetch(&self, name: &str) -> StoreResult<Option<E>> {
        Ok(self.read().items.get(name).cloned())
    }

    async fn create(&self, extension: E) -> StoreResult<E> {
        let created = prepare_create(extension, Utc::now())?;
        let mut state = self.write();
        if state.items.contains_key(created.name()) {
            return Err(StoreError::AlreadyExists {
                kind: E::gvk().kind,
                name: created.name().to_string(),
            });
        }
        self.put(&mut state, created.clone());
        Ok(created)
    }

    async fn update(&self, extension: E) -> StoreResult<E> {
        let mut state = self.write();
        let stored = state
            .items
            .get(extension.name())
            .ok_or_else(|| Self::not_found(extension.name()))?;
        let updated = prepare_update(stored, extension)?;
        if is_collectable(&updated) {
            self.remove(&mut state, updated.name());
        } else {
            self.put(&mut state, updated.clone());
        }
        Ok(updated)
    }

    async fn delete(&self, extension: E) -> StoreResult<E> {
        let mut state = self.write();
        let stored = state
            .items
            .get(extension.name())
            .cloned()
            .ok_or_else(|| Self::not_found(extension.name()))?;
        let (deleted, removable) = mark_deleted(stored, Utc::now());
        if removable {
            self.remove(&mut state, deleted.name());
        } else {
            self.put(&mut state, deleted.clone());
        }
        Ok(deleted)
    }
}
