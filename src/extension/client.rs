use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;

use super::list_options::{ListOptions, PageRequest, Sort};
use super::list_result::ListResult;
use super::{Extension, StoreError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Pure filter over one extension.
pub type Predicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Total order over extensions.
pub type Comparator<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

/// Access to the extensions of one kind.
///
/// Callers either hand over in-process predicates and comparators (`list`,
/// `list_page`) or index-backed options (`list_by`, `list_all`); whether the
/// backing store evaluates them in memory or through its indexes is its own
/// business.
#[async_trait]
pub trait ExtensionClient<E: Extension>: Send + Sync {
    /// Lists every match, ordered by `comparator` or by name when absent.
    async fn list(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> StoreResult<Vec<E>>;

    async fn list_page(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
        page: usize,
        size: usize,
    ) -> StoreResult<ListResult<E>> {
        let items = self.list(predicate, comparator).await?;
        Ok(ListResult::paginate(items, page, size))
    }

    async fn list_by(&self, options: &ListOptions, page: &PageRequest)
    -> StoreResult<ListResult<E>>;

    async fn list_all(&self, options: &ListOptions, sort: &Sort) -> StoreResult<Vec<E>>;

    async fn fetch(&self, name: &str) -> StoreResult<Option<E>>;

    async fn create(&self, extension: E) -> StoreResult<E>;

    /// Replaces a stored extension; a `version` that differs from the stored
    /// one is rejected with [`StoreError::Conflict`].
    async fn update(&self, extension: E) -> StoreResult<E>;

    /// Marks the extension deleted. It is removed at once unless finalizers
    /// still hold it, in which case it stays visible with a deletion timestamp.
    async fn delete(&self, extension: E) -> StoreResult<E>;
}

pub fn and_predicate<E: 'static>(left: Predicate<E>, right: Predicate<E>) -> Predicate<E> {
    Arc::new(move |extension: &E| left(extension) && right(extension))
}
