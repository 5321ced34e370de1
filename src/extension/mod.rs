//! Generic typed resource store the gallery is built on.

pub mod client;
pub mod index;
pub mod lifecycle;
pub mod list_options;
pub mod list_result;
pub mod memory_store;
pub mod metadata;
#[cfg(feature = "postgres")]
pub mod postgres_store;
pub mod query_engine;
pub mod scheme;
pub mod selector;

pub use client::{Comparator, ExtensionClient, Predicate, StoreResult};
pub use index::{IndexSpec, IndexValue};
pub use list_options::{Direction, ListOptions, Order, PageRequest, Query, Sort};
pub use list_result::ListResult;
pub use memory_store::MemoryExtensionStore;
pub use metadata::{LifecycleState, Metadata};
pub use scheme::{GroupVersionKind, Scheme, SchemeManager};
pub use selector::LabelSelector;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A typed record managed by an [`ExtensionClient`].
pub trait Extension: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    fn gvk() -> GroupVersionKind;

    fn metadata(&self) -> &Metadata;

    fn metadata_mut(&mut self) -> &mut Metadata;

    fn indexes() -> Vec<IndexSpec<Self>> {
        IndexSpec::defaults()
    }

    fn name(&self) -> &str {
        &self.metadata().name
    }

    fn scheme() -> Scheme {
        Scheme::new(
            Self::gvk(),
            Self::indexes().iter().map(|index| index.name).collect(),
        )
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: &'static str, name: String },
    #[error("{kind} \"{name}\" already exists")]
    AlreadyExists { kind: &'static str, name: String },
    #[error("{kind} \"{name}\" was modified concurrently")]
    Conflict { kind: &'static str, name: String },
    #[error("field \"{0}\" is not indexed")]
    UnknownField(String),
    #[error("invalid selector \"{0}\"")]
    InvalidSelector(String),
    #[error("invalid extension: {0}")]
    Invalid(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store provider error: {0}")]
    Provider(String),
}
